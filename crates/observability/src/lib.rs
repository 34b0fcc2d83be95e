//! Tracing/logging setup shared by binaries.

/// Initialize process-wide observability with the `info` fallback filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Initialize with a caller-chosen fallback filter (used when `RUST_LOG` is unset).
pub fn init_with_default(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
