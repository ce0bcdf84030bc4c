use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::checker::ConfigChecker;
use crate::daemons::DaemonRecord;

/// Telemetry and checker listing captured from the monitoring server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub daemons: Vec<DaemonRecord>,
    pub checkers: Vec<ConfigChecker>,
}

impl Snapshot {
    pub fn checker_mut(&mut self, name: &str) -> Option<&mut ConfigChecker> {
        self.checkers.iter_mut().find(|c| c.name == name)
    }
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;

    let snapshot: Snapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

    debug!(
        "Loaded snapshot {}: {} daemons, {} checkers",
        path.display(),
        snapshot.daemons.len(),
        snapshot.checkers.len()
    );

    Ok(snapshot)
}
