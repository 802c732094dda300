pub mod logging;
pub mod ticketing;
pub mod verify;

use anyhow::Context;
use std::path::PathBuf;
use turnstile_store::app_config::Config;

/// Load layered config and apply a `--store` override from the command line.
pub fn load_config(store_override: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = Config::load().context("Failed to load config")?;
    if let Some(path) = store_override {
        config.store.path = path;
    }
    Ok(config)
}
