//! Tracing setup for processes embedding the authorization layer.
//!
//! # Notes
//! Initialization is guarded by `OnceLock`, so calling it from several tests
//! or entry points is harmless. The filter comes from `RUST_LOG` and falls
//! back to `info`.
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static OBS_INIT: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    init_tracing_with_default("info");
}

pub fn init_tracing_with_default(default_directive: &str) {
    OBS_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing_with_default("debug");
        assert!(OBS_INIT.get().is_some());
        tracing::info!("tracing initialized twice without panicking");
    }
}
