use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration. Defaults match the fixed local deployment;
/// every field can be overridden with a `FRIDGE_` prefixed variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// sqlx SQLite URL, e.g. `sqlite:fridge.db`.
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:fridge.db".to_string(),
            listen_addr: "0.0.0.0:8081".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("FRIDGE_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
