//! Tracing bootstrap for applications embedding the library.
//!
//! The library itself only emits events through `tracing`; nothing is
//! printed unless a subscriber is installed. Call [`init`] once at
//! startup, or install your own subscriber instead.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber honouring `RUST_LOG`, defaulting to
/// `trace` for this workspace's crates when the variable is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,tessera=trace,tessera_geometry=trace,tessera_render=trace")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
