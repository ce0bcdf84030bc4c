use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::checker::CyclePolicy;
use crate::daemons::{labels_from, DaemonLabel, BIND9_DAEMONS, KEA_DAEMONS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub allow_inherit_state: bool,
    pub daemon_order: Vec<DaemonLabel>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let mut daemon_order = labels_from(BIND9_DAEMONS);
        daemon_order.extend(labels_from(KEA_DAEMONS));
        Self {
            allow_inherit_state: false,
            daemon_order,
        }
    }
}

impl DashboardConfig {
    pub fn policy(&self) -> CyclePolicy {
        CyclePolicy {
            allow_inherit: self.allow_inherit_state,
        }
    }
}

pub fn load_config(path: Option<&std::path::Path>) -> Result<DashboardConfig> {
    let config = if let Some(config_path) = path {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

            toml::from_str::<DashboardConfig>(&contents)
                .map_err(|e| anyhow::anyhow!("Failed to parse TOML config: {}", e))?
        } else {
            tracing::warn!("Config file not found at {:?}, using defaults", config_path);
            DashboardConfig::default()
        }
    } else {
        tracing::info!("No config path provided, using defaults");
        DashboardConfig::default()
    };

    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &DashboardConfig) -> Result<()> {
    if config.daemon_order.is_empty() {
        anyhow::bail!("daemon_order cannot be empty");
    }

    let mut ids = HashSet::new();
    for label in &config.daemon_order {
        if label.id.trim().is_empty() {
            anyhow::bail!("daemon_order entries must have a non-empty id");
        }
        if label.display_name.trim().is_empty() {
            anyhow::bail!("daemon_order entry '{}' has an empty display_name", label.id);
        }
        if !ids.insert(label.id.as_str()) {
            anyhow::bail!("daemon_order contains duplicate id '{}'", label.id);
        }
    }

    Ok(())
}
