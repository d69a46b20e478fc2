use crate::core::CostCategory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Defaults applied when raw input omits a value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Evaluation horizon applied when a profile omits one.
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            horizon_years: default_horizon_years(),
        }
    }
}

/// Presentation settings for the output writers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Rendered in place of an undefined metric. Never "0" or "NaN".
    #[serde(default = "default_na_label")]
    pub na_label: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            na_label: default_na_label(),
        }
    }
}

/// Which one-time cost categories count toward migration cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationConfig {
    #[serde(default = "default_migration_categories")]
    pub categories: Vec<CostCategory>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            categories: default_migration_categories(),
        }
    }
}

/// Top-level configuration, loaded from `toolcost.toml` when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolcostConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
}

fn default_horizon_years() -> u32 {
    3
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_na_label() -> String {
    "N/A".to_string()
}

fn default_migration_categories() -> Vec<CostCategory> {
    vec![
        CostCategory::DataMigration,
        CostCategory::Training,
        CostCategory::Downtime,
    ]
}

impl ToolcostConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ToolcostConfig = toml::from_str(&content)?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Validate cross-field constraints the serde layer cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.defaults.horizon_years < 1 {
            return Err("defaults.horizon_years must be at least 1".to_string());
        }
        if self.migration.categories.is_empty() {
            return Err("migration.categories must not be empty".to_string());
        }
        Ok(())
    }
}

static CONFIG: OnceLock<ToolcostConfig> = OnceLock::new();

/// Get the loaded configuration, reading `toolcost.toml` from the current
/// directory on first access and falling back to defaults when absent or
/// unreadable.
pub fn get_config() -> &'static ToolcostConfig {
    CONFIG.get_or_init(|| {
        let path = Path::new("toolcost.toml");
        if path.exists() {
            match ToolcostConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to load toolcost.toml, using defaults: {e}");
                    ToolcostConfig::default()
                }
            }
        } else {
            ToolcostConfig::default()
        }
    })
}
