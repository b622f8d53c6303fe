//! Telemetry helpers for hosts embedding `figure-gallery`.
//!
//! Nothing is installed implicitly. Hosts either call one of the helpers
//! below or wire their own `tracing` subscriber and filters.

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "figure_gallery=info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"figure_gallery=debug"` to surface navigation transitions.
#[must_use]
pub fn init_tracing_with_fallback(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
