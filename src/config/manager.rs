use super::{
    encoding::EncodingConfig, mutation::MutationConfig, problem::ProblemConfig, run::RunConfig,
    traits::ConfigSection,
};
use crate::error::RectfitError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub problem: ProblemConfig,
    #[serde(default)]
    pub encoding: EncodingConfig,
    #[serde(default)]
    pub mutation: MutationConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), RectfitError> {
        self.problem.validate()?;
        self.encoding.validate()?;
        self.mutation.validate()?;
        self.run.validate()?;
        // Cross-section check: the id width must cover the catalog.
        self.encoding.build_layout(self.problem.catalog.len())?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RectfitError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RectfitError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| RectfitError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RectfitError> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| RectfitError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| RectfitError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), RectfitError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        f(&mut config);
        config.validate()?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
