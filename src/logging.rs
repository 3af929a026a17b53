use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|e| anyhow!("invalid LOTTO_LOG {:?}: {}", config.log_filter, e))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(())
}
