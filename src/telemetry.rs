//! Tracing setup for pages embedding `graphnav-rs`.
//!
//! Logging stays explicit and opt-in: click handling emits `tracing`
//! events unconditionally, but no subscriber is ever installed unless the
//! host asks for one here or wires its own.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Only does anything when the `telemetry` cargo feature is enabled.
/// Returns whether a subscriber was actually installed; `false` also
/// covers the case where the host application already set a global one.
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
