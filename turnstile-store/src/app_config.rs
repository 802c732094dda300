use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub tickets: TicketRules,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// JSON file holding every issued ticket
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TicketRules {
    #[serde(default = "default_validity_hours")]
    pub validity_hours: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

fn default_validity_hours() -> u32 { 24 }

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig { path: PathBuf::from("history.json") },
            tickets: TicketRules { validity_hours: default_validity_hours() },
            logging: LoggingConfig { filter: "warn".to_string() },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layered load: built-in defaults, then `{dir}/default`, `{dir}/{RUN_MODE}` and
    /// `{dir}/local` files when present, then `TURNSTILE_*` environment variables.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let defaults = Self::default();

        let s = config::Config::builder()
            .set_default("store.path", defaults.store.path.to_string_lossy().into_owned())?
            .set_default("tickets.validity_hours", i64::from(defaults.tickets.validity_hours))?
            .set_default("logging.filter", defaults.logging.filter)?
            .add_source(config::File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(config::File::with_name(&dir.join(&run_mode).to_string_lossy()).required(false))
            // Not checked in
            .add_source(config::File::with_name(&dir.join("local").to_string_lossy()).required(false))
            // Eg.. `TURNSTILE_STORE__PATH=/tmp/history.json`
            .add_source(
                config::Environment::with_prefix("TURNSTILE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
