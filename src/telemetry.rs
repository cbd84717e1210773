//! Opt-in tracing bootstrap for hosts embedding `graph-rs`.
//!
//! The engine only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts that don't bring their own subscriber can enable the
//! `telemetry` feature and call [`init_default_tracing`] once at startup.

/// Installs a compact stderr subscriber honoring `RUST_LOG`.
///
/// Returns `false` when the feature is disabled or another global
/// subscriber won the race; both cases are fine to ignore.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
