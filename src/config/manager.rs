use super::{countdown::CountdownConfig, find_dups::FindDupsConfig, traits::ConfigSection};
use crate::error::CodesError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Environment variables starting with `CODES_` override file values,
/// e.g. `CODES_COUNTDOWN__DELAY_MS=0`.
pub const ENV_PREFIX: &str = "CODES";

/// Names the TOML file layered under the environment.
pub const CONFIG_PATH_ENV: &str = "CODES_CONFIG";

/// The config file named by `CODES_CONFIG`, if set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub countdown: CountdownConfig,
    pub find_dups: FindDupsConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), CodesError> {
        self.countdown.validate()?;
        self.find_dups.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CodesError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CodesError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| CodesError::Configuration(format!("Failed to parse config: {}", e)))?;

        self.replace(config)
    }

    /// Layers an optional TOML file under the process environment.
    pub fn load_layered(&self, path: Option<&Path>) -> Result<(), CodesError> {
        self.load_layered_with_env(path, None)
    }

    /// Same as [`load_layered`](Self::load_layered), reading overrides from
    /// `env` instead of the process environment when given.
    pub fn load_layered_with_env(
        &self,
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<(), CodesError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            log::debug!("Layering config file {}", path.display());
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CodesError::Configuration(format!("Failed to load config: {}", e)))?;

        self.replace(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CodesError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| CodesError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| CodesError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Applies `f` to a copy and keeps it only if it still validates.
    pub fn update<F>(&self, f: F) -> Result<(), CodesError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        self.replace(candidate)
    }

    fn replace(&self, config: AppConfig) -> Result<(), CodesError> {
        config.validate()?;
        *self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
        Ok(())
    }
}
