// Status presentation library for the fleet dashboard

pub mod checker;
pub mod config;
pub mod daemons;
pub mod snapshot;
pub mod stats;
pub mod status;

// Re-export commonly used types
pub use checker::{next_state, CheckerState, CyclePolicy};
pub use config::DashboardConfig;
pub use status::{derive_status, DaemonFlags, StatusView};
