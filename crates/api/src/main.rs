use std::sync::Arc;

use marketgate_api::config::AppConfig;
use marketgate_infra::PgDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Fail startup on bad configuration (notably a missing JWT_SECRET)
    // before anything binds or connects.
    let config = AppConfig::from_env()?;
    marketgate_observability::init(config.production);

    let directory = PgDirectory::connect(&config.database_url).await?;
    let app = marketgate_api::app::build_app(&config, Arc::new(directory));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
