use serde::Deserialize;

/// `POST /login/{scope}` request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
