use dotenvy::dotenv;
use std::{env, fs, path::PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_SECRETS_DIR: &str = "/run/secrets";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set (environment variable or secrets file)")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub db_uri: String,
    pub bind_addr: String,
    pub deployment: String,
    pub top_n_limit: u64, // Upper bound applied by the HTTP layer to top-N requests
    pub tests_running: bool,
}

impl Config {
    /// Reads the configuration from the environment, falling back to files
    /// in the secrets directory. Database credentials have no defaults: a
    /// missing host, name, user or password is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load from .env file if available

        let secrets = SecretSource::from_env();
        Self::from_source(&secrets)
    }

    fn from_source(source: &SecretSource) -> Result<Self, ConfigError> {
        let db_uri = match source.get("DB_URL") {
            Some(url) => url,
            None => {
                let port = source.get("DB_PORT").unwrap_or_else(|| "5432".to_string());
                port.parse::<u16>().map_err(|e| ConfigError::Invalid {
                    key: "DB_PORT",
                    reason: e.to_string(),
                })?;
                // Credentials come from secret stores and may hold URI delimiters
                format!(
                    "{}://{}:{}@{}:{}/{}",
                    source
                        .get("DB_PREFIX")
                        .unwrap_or_else(|| "postgresql".to_string()),
                    urlencoding::encode(&source.require("DB_USER")?),
                    urlencoding::encode(&source.require("DB_PASSWORD")?),
                    source.require("DB_HOST")?,
                    port,
                    source.require("DB_NAME")?,
                )
            }
        };

        let top_n_limit = match source.get("TOP_N_LIMIT") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "TOP_N_LIMIT",
                reason: e.to_string(),
            })?,
            None => 1000,
        };
        if top_n_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "TOP_N_LIMIT",
                reason: "must be at least 1".to_string(),
            });
        }

        let config = Config {
            db_uri,
            bind_addr: source
                .get("BIND_ADDR")
                .unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            deployment: source
                .get("DEPLOYMENT")
                .unwrap_or_else(|| "local".to_string()),
            top_n_limit,
            tests_running: false, // Always false if using Config from_env
        };
        info!(
            deployment = %config.deployment,
            bind_addr = %config.bind_addr,
            top_n_limit = config.top_n_limit,
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn for_tests() -> Self {
        Config {
            db_uri: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            deployment: "test".to_string(),
            top_n_limit: 100,
            tests_running: true,
        }
    }
}

/// Looks a key up in the process environment first, then in a file named
/// after the key inside the secrets directory.
struct SecretSource {
    secrets_dir: PathBuf,
    overrides: Option<Vec<(&'static str, String)>>,
}

impl SecretSource {
    fn from_env() -> Self {
        let secrets_dir = env::var("SECRETS_DIR").unwrap_or_else(|_| DEFAULT_SECRETS_DIR.to_string());
        Self {
            secrets_dir: PathBuf::from(secrets_dir),
            overrides: None,
        }
    }

    fn get(&self, key: &'static str) -> Option<String> {
        let from_env = match &self.overrides {
            Some(values) => values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone()),
            None => env::var(key).ok(),
        };
        from_env
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.read_secret(key))
    }

    fn require(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::Missing(key))
    }

    fn read_secret(&self, key: &str) -> Option<String> {
        let path = self.secrets_dir.join(key);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(key, path = %path.display(), "Read setting from secrets file");
                Some(contents.trim().to_string()).filter(|v| !v.is_empty())
            }
            Err(_) => None,
        }
    }
}
