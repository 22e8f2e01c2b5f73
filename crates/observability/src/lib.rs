//! Tracing/logging setup shared by the marketgate binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init(json: bool) {
    tracing::init(json);
}

/// Tracing configuration (filters, output format).
pub mod tracing;
