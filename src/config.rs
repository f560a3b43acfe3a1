//! Configuration for catalog tuning
//!
//! Confidence and cost constants are tuning data, not code; overrides live
//! in ~/.autotriage/config.toml and are applied on top of the standard
//! catalog at startup. Selection logic is untouched by tuning.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnosis::{FaultCatalog, FaultCategory};
use crate::errors::TriageError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Per-category tuning overrides, keyed by category name
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryOverride>,
}

/// Tuning knobs for a single fault category
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryOverride {
    /// Replacement base confidence
    pub confidence: Option<f64>,

    /// Replacement lower cost bound
    pub cost_min: Option<u32>,

    /// Replacement upper cost bound
    pub cost_max: Option<u32>,

    /// Additional keywords, lowercased on load
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

impl Config {
    /// Load configuration from the default path, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".autotriage").join("config.toml"))
    }

    /// Build the active catalog: the standard table with these overrides
    /// applied, re-validated
    pub fn catalog(&self) -> std::result::Result<FaultCatalog, TriageError> {
        let mut categories: Vec<FaultCategory> = FaultCatalog::standard().categories().to_vec();

        for (name, tuning) in &self.categories {
            let cat = categories
                .iter_mut()
                .find(|c| &c.name == name)
                .ok_or_else(|| TriageError::UnknownCategory(name.clone()))?;

            if let Some(confidence) = tuning.confidence {
                cat.confidence = confidence;
            }
            if let Some(cost_min) = tuning.cost_min {
                cat.cost_range.0 = cost_min;
            }
            if let Some(cost_max) = tuning.cost_max {
                cat.cost_range.1 = cost_max;
            }
            for keyword in &tuning.extra_keywords {
                let keyword = keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(TriageError::ConfigError(format!(
                        "empty extra keyword for category '{}'",
                        name
                    )));
                }
                if !cat.keywords.contains(&keyword) {
                    cat.keywords.push(keyword);
                }
            }
        }

        FaultCatalog::new(categories)
    }
}
