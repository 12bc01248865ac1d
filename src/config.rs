use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use weekpick_lotto::{BatchOptions, DEFAULT_COUNT, MAX_COUNT, MIN_COUNT};
use weekpick_mealplan::{Recipe, catalog};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub mealplan: MealplanConfig,
    #[serde(default)]
    pub lotto: LottoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MealplanConfig {
    /// TOML catalog replacing the built-in recipes
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl MealplanConfig {
    pub fn catalog(&self) -> weekpick_shared::Result<Vec<Recipe>> {
        match self.catalog_path.as_deref() {
            Some(path) => catalog::load(path),
            None => Ok(catalog::builtin()),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LottoConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_true")]
    pub sorted: bool,
    #[serde(default = "default_true")]
    pub unique: bool,
    /// Fixed seed for reproducible draws
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            sorted: true,
            unique: true,
            seed: None,
        }
    }
}

impl LottoConfig {
    pub fn options(&self) -> BatchOptions {
        BatchOptions::new(self.count, self.sorted, self.unique)
    }
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (WEEKPICK__LOTTO__COUNT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("observability.log_level", default_log_level())?
            .set_default("lotto.count", DEFAULT_COUNT as u64)?
            .set_default("lotto.sorted", true)?
            .set_default("lotto.unique", true)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WEEKPICK")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&self.lotto.count) {
            return Err(format!(
                "Lotto count must be between {MIN_COUNT} and {MAX_COUNT}, got {}",
                self.lotto.count
            ));
        }
        Ok(())
    }
}
