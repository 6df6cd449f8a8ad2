// ABOUTME: Library half of the carryover binary
// ABOUTME: Environment configuration, server startup, and tracing setup

pub mod config;
pub mod server;

pub use config::{Config, ConfigError};
pub use server::run_server;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
