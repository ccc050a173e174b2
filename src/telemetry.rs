//! Tracing setup for hosts embedding the engine.
//!
//! The crate never installs a subscriber on its own; it only emits
//! `tracing` events. Structural changes (series creation, transform
//! registration) are logged at `debug`, per-point hot paths (retention
//! trims, incremental calculate passes) at `trace`. Hosts either call one
//! of the helpers below or wire their own subscriber and filters.

/// Default filter directives: structural engine events visible, per-point
/// hot paths silent, other crates untouched.
pub const DEFAULT_DIRECTIVES: &str = "plotflow=debug";

/// Installs a global subscriber filtered by [`DEFAULT_DIRECTIVES`].
///
/// Returns `true` when the subscriber was installed. Returns `false` when
/// the `telemetry` feature is disabled or a global subscriber was already
/// set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with(DEFAULT_DIRECTIVES)
}

/// Installs a global subscriber with the given filter directives, e.g.
/// `"plotflow=trace"` to surface the per-point hot paths. An explicit
/// `RUST_LOG` in the environment takes precedence over `directives`.
#[must_use]
pub fn init_tracing_with(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directives));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
