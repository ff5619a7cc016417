//! Telemetry helpers for applications embedding `clndr-rs`.
//!
//! Navigation, event resolution and grid rebuilds are traced through the
//! `tracing` facade. Hosts either call one of the init helpers below or install
//! their own subscriber and filters.

/// Fallback directive used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "clndr_rs=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directive(DEFAULT_TRACING_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with an explicit fallback directive,
/// e.g. `"clndr_rs=trace"` to see per-event resolution and gate vetoes.
#[must_use]
pub fn init_tracing_with_directive(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
