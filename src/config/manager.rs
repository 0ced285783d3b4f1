use super::{
    backend::BackendConfig,
    browser::BrowserConfig,
    personal::PersonalConfig,
    traits::ConfigSection,
};
use crate::error::RvarError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix of environment overrides, e.g. `RVAR__BACKEND__BASE_URL`
pub const ENV_PREFIX: &str = "RVAR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub browser: BrowserConfig,
    pub personal: PersonalConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), RvarError> {
        self.backend.validate()?;
        self.browser.validate()?;
        self.personal.validate()?;
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

    /// Load the TOML file (if it exists) with environment overrides on top
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RvarError> {
        self.load_layered(Some(path.as_ref()), None)
    }

    /// Like `load_from_file`, reading overrides from `env` instead of the process environment
    pub fn load_with_env(
        &self,
        path: Option<&Path>,
        env: HashMap<String, String>,
    ) -> Result<(), RvarError> {
        self.load_layered(path, Some(env))
    }

    fn load_layered(
        &self,
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<(), RvarError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env.map(|vars| vars.into_iter().collect())),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| RvarError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RvarError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| RvarError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| RvarError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), RvarError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = candidate;
        Ok(())
    }
}
