use crate::Result;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging/tracing for the host process.
///
/// Hosts that already install their own subscriber should skip this.
pub fn init(service_name: &str) -> Result<()> {
    // Default: info for our crates, warn for everything else.
    // Can be overridden with `RUST_LOG`.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,tnp_core=info,tnp_plugin=info,{service_name}=info"))
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .init();

    Ok(())
}
