//! Configuration module for cluster-inventory
//!
//! Cluster-wide settings are merged from several sources, later ones winning:
//! - Default values
//! - A configuration file (YAML, JSON or TOML)
//! - Environment variables

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Environment variable overriding [`DeriverConfig::domain_name`]
pub const ENV_DOMAIN_NAME: &str = "CLUSTER_INVENTORY_DOMAIN_NAME";
/// Environment variable overriding [`DeriverConfig::equipment_naming`]
pub const ENV_EQUIPMENT_NAMING: &str = "CLUSTER_INVENTORY_EQUIPMENT_NAMING";
/// Environment variable overriding [`DeriverConfig::master_groups_naming`]
pub const ENV_MASTER_GROUPS_NAMING: &str = "CLUSTER_INVENTORY_MASTER_GROUPS_NAMING";

/// Naming conventions and DNS domain shared by the whole cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriverConfig {
    /// DNS domain appended to primary host names
    pub domain_name: String,

    /// Prefix of equipment profile groups (`equipment_typeC`)
    pub equipment_naming: String,

    /// Prefix of master groups (`mg_computes`)
    pub master_groups_naming: String,

    /// Prefix of partition groups
    pub iceberg_naming: String,

    /// Prefix of per-partition management networks
    pub management_networks_naming: String,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            domain_name: "cluster.local".to_string(),
            equipment_naming: "equipment".to_string(),
            master_groups_naming: "mg".to_string(),
            iceberg_naming: "iceberg".to_string(),
            management_networks_naming: "net".to_string(),
        }
    }
}

impl DeriverConfig {
    /// Load configuration: defaults, then the optional file, then environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Read configuration from a file, format chosen by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: DeriverConfig = match extension {
            "yml" | "yaml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            "toml" => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            _ => {
                // Try TOML first, then YAML
                toml::from_str(&content)
                    .or_else(|_| serde_yaml::from_str(&content))
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?
            }
        };

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        let overrides = [
            (ENV_DOMAIN_NAME, &mut self.domain_name),
            (ENV_EQUIPMENT_NAMING, &mut self.equipment_naming),
            (ENV_MASTER_GROUPS_NAMING, &mut self.master_groups_naming),
        ];

        for (var, field) in overrides {
            match std::env::var(var) {
                Ok(value) if !value.is_empty() => *field = value,
                Ok(_) => warn!("Ignoring empty {}", var),
                Err(std::env::VarError::NotUnicode(_)) => warn!("Ignoring non-unicode {}", var),
                Err(std::env::VarError::NotPresent) => {}
            }
        }
    }
}
