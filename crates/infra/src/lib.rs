//! `marketgate-infra` — storage-backed credential directory.
//!
//! The in-memory directory for tests/dev lives next to the trait in
//! `marketgate-identity`; this crate holds the Postgres implementation
//! used by the deployed service.

pub mod postgres;

pub use postgres::PgDirectory;
