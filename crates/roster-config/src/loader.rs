//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use roster_core::RosterError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Environment variable holding the database connection string.
pub const DATABASE_URL_ENV: &str = "DB_URI";

/// Environment variable selecting the environment-specific config file.
pub const ENVIRONMENT_ENV: &str = "ROSTER_ENVIRONMENT";

/// Where the current configuration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// Environment name used to pick `config/{environment}.toml`.
    pub environment: String,
    /// TOML files that existed and were layered, in order.
    pub files: Vec<PathBuf>,
    /// `.env` file that was loaded, if any.
    pub dotenv: Option<PathBuf>,
    /// Whether `DB_URI` supplied the database URL.
    pub database_url_from_env: bool,
}

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    sources: Arc<RwLock<ConfigSources>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `ROSTER__` prefix
    /// 5. `DB_URI` for the database connection string
    ///
    /// Nothing is logged here since tracing is usually not installed yet;
    /// call [`ConfigLoader::log_summary`] once it is.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RosterError> {
        let dotenv = dotenvy::dotenv().ok();

        let config_dir = config_dir.into();
        let database_url = database_url_from_env();
        let (config, mut sources) = Self::load_layers(&config_dir, database_url)?;
        sources.dotenv = dotenv;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            sources: Arc::new(RwLock::new(sources)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RosterError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Returns where the current configuration came from.
    pub async fn sources(&self) -> ConfigSources {
        self.sources.read().await.clone()
    }

    /// Reloads the configuration from disk and the environment.
    pub async fn reload(&self) -> Result<(), RosterError> {
        let (new_config, new_sources) =
            Self::load_layers(&self.config_dir, database_url_from_env())?;

        *self.config.write().await = new_config;
        let mut sources = self.sources.write().await;
        let dotenv = sources.dotenv.take();
        *sources = ConfigSources {
            dotenv,
            ..new_sources
        };

        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Logs the environment and the sources that were layered.
    pub async fn log_summary(&self) {
        let sources = self.sources.read().await;

        info!("Loaded configuration for environment: {}", sources.environment);
        match &sources.dotenv {
            Some(path) => debug!("Loaded .env from: {}", path.display()),
            None => debug!("No .env file loaded"),
        }
        for file in &sources.files {
            debug!("Layered config file: {}", file.display());
        }
        if sources.database_url_from_env {
            debug!("Database URL taken from {}", DATABASE_URL_ENV);
        }
    }

    /// Loads configuration from `config_dir`, with `database_url` taking
    /// precedence over any file or `ROSTER__` source.
    pub fn load_config(
        config_dir: &str,
        database_url: Option<String>,
    ) -> Result<AppConfig, RosterError> {
        Self::load_layers(config_dir, database_url).map(|(config, _)| config)
    }

    fn load_layers(
        config_dir: &str,
        database_url: Option<String>,
    ) -> Result<(AppConfig, ConfigSources), RosterError> {
        let environment =
            std::env::var(ENVIRONMENT_ENV).unwrap_or_else(|_| "development".to_string());

        let mut sources = ConfigSources {
            environment: environment.clone(),
            database_url_from_env: database_url.is_some(),
            ..ConfigSources::default()
        };

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = Path::new(config_dir).join(format!("{}.toml", name));
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()).required(false));
                sources.files.push(path);
            }
        }

        builder = builder
            .set_default("app.environment", environment.as_str())
            .map_err(config_error_to_roster_error)?
            .add_source(
                Environment::with_prefix("ROSTER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", database_url)
            .map_err(config_error_to_roster_error)?;

        let config = builder.build().map_err(config_error_to_roster_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_roster_error)?;

        Self::validate_config(&app_config)?;

        Ok((app_config, sources))
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), RosterError> {
        if config.database.url.trim().is_empty() {
            return Err(RosterError::Configuration(format!(
                "Database URL is required (set {} or database.url)",
                DATABASE_URL_ENV
            )));
        }

        if config.database.max_connections == 0 {
            return Err(RosterError::Configuration(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        if config.database.min_connections > config.database.max_connections {
            return Err(RosterError::Configuration(
                "database.min_connections cannot exceed database.max_connections".to_string(),
            ));
        }

        Ok(())
    }

    /// Gets a specific configuration value by dotted key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn database_url_from_env() -> Option<String> {
    std::env::var(DATABASE_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::Configuration(err.to_string())
}
