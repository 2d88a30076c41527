//! Telemetry helpers for applications embedding `curve-rs`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left
//! to the host. The helpers here are a convenience for binaries and demos
//! that want compact stderr output filtered by `RUST_LOG`.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact fmt subscriber honoring `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` if the `telemetry` feature is off or a global subscriber
/// already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(None)
}

/// Like [`init_default_tracing`] but with explicit filter directives, for
/// example `"curve_rs=trace"` to see every gesture.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    init_tracing(Some(directives))
}

#[cfg(feature = "telemetry")]
fn init_tracing(directives: Option<&str>) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = match directives {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
fn init_tracing(_directives: Option<&str>) -> bool {
    false
}
