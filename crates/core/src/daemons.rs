use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::stats::query_utilization;
use crate::status::{derive_status, DaemonFlags, StatusView};

/// Display order of BIND 9 daemons: (id, display name).
pub const BIND9_DAEMONS: &[(&str, &str)] = &[("named", "named")];

/// Display order of Kea daemons: (id, display name).
pub const KEA_DAEMONS: &[(&str, &str)] = &[
    ("dhcp4", "DHCPv4"),
    ("dhcp6", "DHCPv6"),
    ("d2", "DDNS"),
    ("ca", "CA"),
    ("netconf", "NETCONF"),
];

/// Raw telemetry for one daemon as reported by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaemonRecord {
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub agent_comm_errors: u64,
    #[serde(default)]
    pub daemon_comm_errors: u64,
    #[serde(default)]
    pub query_hit_ratio: Option<f64>,
}

impl DaemonRecord {
    /// Normalize the error counters into status flags.
    pub fn flags(&self) -> DaemonFlags {
        DaemonFlags {
            active: self.active,
            communication_ok: self.daemon_comm_errors == 0,
            agent_communication_ok: self.agent_comm_errors == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonLabel {
    pub id: String,
    pub display_name: String,
}

impl DaemonLabel {
    pub fn new(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// Build labels from one of the built-in (id, display name) tables.
pub fn labels_from(table: &[(&str, &str)]) -> Vec<DaemonLabel> {
    table
        .iter()
        .map(|(id, display_name)| DaemonLabel::new(id, display_name))
        .collect()
}

/// A daemon record placed in display order, with its derived status.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledDaemon<'a> {
    pub display_name: &'a str,
    pub record: &'a DaemonRecord,
    pub status: StatusView,
    pub query_utilization: u8,
}

/// Arrange daemon records in the order given by `labels`.
///
/// Records are first collected into a map keyed by name. The label list is
/// then walked in order and only ids actually present in the map are emitted.
/// Records without a label are dropped. If several records share a name the
/// last one wins.
pub fn order_daemons<'a>(
    records: &'a [DaemonRecord],
    labels: &'a [DaemonLabel],
) -> Vec<LabeledDaemon<'a>> {
    let by_name: HashMap<&str, &DaemonRecord> = records
        .iter()
        .map(|record| (record.name.as_str(), record))
        .collect();

    let mut seen = HashSet::new();
    let mut ordered = Vec::new();

    for label in labels {
        let Some(&record) = by_name.get(label.id.as_str()) else {
            continue;
        };
        if !seen.insert(label.id.as_str()) {
            continue;
        }
        ordered.push(LabeledDaemon {
            display_name: &label.display_name,
            record,
            status: derive_status(record.flags()),
            query_utilization: query_utilization(record.query_hit_ratio),
        });
    }

    for name in by_name.keys() {
        if !labels.iter().any(|label| label.id == *name) {
            debug!("Skipping daemon {:?}: no display label configured", name);
        }
    }

    ordered
}
