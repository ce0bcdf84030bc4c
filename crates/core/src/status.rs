use serde::{Deserialize, Serialize};

/// Telemetry flags for a single daemon, already normalized to booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaemonFlags {
    /// The daemon is expected to run according to its configuration.
    pub active: bool,
    /// The last attempt to talk to the daemon through the agent succeeded.
    pub communication_ok: bool,
    /// The monitoring agent on the daemon's machine is reachable.
    pub agent_communication_ok: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconId {
    Ban,
    Times,
    Check,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Ban => "ban",
            IconId::Times => "times",
            IconId::Check => "check",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorId {
    Grey,
    Red,
    Green,
}

impl ColorId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorId::Grey => "grey",
            ColorId::Red => "red",
            ColorId::Green => "green",
        }
    }
}

pub const TOOLTIP_INACTIVE: &str = "This daemon is not configured to run.";
pub const TOOLTIP_AGENT_UNREACHABLE: &str =
    "Cannot reach the monitoring agent for this machine. Check that the agent is running and reachable.";
pub const TOOLTIP_DAEMON_UNRESPONSIVE: &str =
    "The monitoring agent is reachable but the daemon itself is not responding. Check that the daemon is running.";

/// Presentation of a daemon's status. Icon, color and tooltip all come from
/// one classification in [`derive_status`], so they never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    erred: bool,
    icon_name: IconId,
    icon_color: ColorId,
    tooltip: &'static str,
}

impl StatusView {
    pub fn erred(&self) -> bool {
        self.erred
    }

    pub fn icon_name(&self) -> IconId {
        self.icon_name
    }

    pub fn icon_color(&self) -> ColorId {
        self.icon_color
    }

    pub fn tooltip(&self) -> &'static str {
        self.tooltip
    }

    /// Check that icon, color, tooltip and the erred flag describe the same
    /// classification.
    pub fn is_consistent(&self) -> bool {
        match (self.icon_name, self.icon_color) {
            (IconId::Ban, ColorId::Grey) => !self.erred && !self.tooltip.is_empty(),
            (IconId::Times, ColorId::Red) => self.erred && !self.tooltip.is_empty(),
            (IconId::Check, ColorId::Green) => !self.erred && self.tooltip.is_empty(),
            _ => false,
        }
    }
}

/// Derive the status view for a daemon.
///
/// Rules are checked in order, first match wins:
/// 1. Inactive daemon: never erred, grey ban icon
/// 2. Agent unreachable: erred, blamed on the agent
/// 3. Daemon not responding: erred, blamed on the daemon
/// 4. Otherwise healthy: green check, no tooltip
pub fn derive_status(flags: DaemonFlags) -> StatusView {
    // Rule 1: inactive daemons are not a failure
    if !flags.active {
        return StatusView {
            erred: false,
            icon_name: IconId::Ban,
            icon_color: ColorId::Grey,
            tooltip: TOOLTIP_INACTIVE,
        };
    }

    // Rule 2: the agent hop failed
    if !flags.agent_communication_ok {
        return StatusView {
            erred: true,
            icon_name: IconId::Times,
            icon_color: ColorId::Red,
            tooltip: TOOLTIP_AGENT_UNREACHABLE,
        };
    }

    // Rule 3: the agent answered but the daemon did not
    if !flags.communication_ok {
        return StatusView {
            erred: true,
            icon_name: IconId::Times,
            icon_color: ColorId::Red,
            tooltip: TOOLTIP_DAEMON_UNRESPONSIVE,
        };
    }

    StatusView {
        erred: false,
        icon_name: IconId::Check,
        icon_color: ColorId::Green,
        tooltip: "",
    }
}
