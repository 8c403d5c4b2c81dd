//! Layered configuration: defaults, then `roster.toml`, then `ROSTER_*` env vars.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::RosterError;

const CONFIG_FILE_NAME: &str = "roster.toml";
const ENV_PREFIX: &str = "ROSTER_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub loglevel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx SQLite URL, e.g. `sqlite:students.db`.
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub busy_timeout_secs: u64,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:students.db".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 5,
            busy_timeout_secs: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }
}

impl Config {
    /// Load from the working directory's `roster.toml` and the environment.
    pub fn load() -> Result<Self, RosterError> {
        Self::figment(Path::new(CONFIG_FILE_NAME))
            .extract()
            .map_err(|e| RosterError::Config(Box::new(e)))
    }

    /// Provider chain with an explicit TOML path; a missing file is skipped.
    pub fn figment(toml_path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if toml_path.exists() {
            figment = figment.merge(Toml::file(toml_path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
