use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use fleetview_core::checker::{next_state, toggle_checker, CheckerState, CyclePolicy};
use fleetview_core::config::{load_config, DashboardConfig};
use fleetview_core::daemons::order_daemons;
use fleetview_core::snapshot::load_snapshot;

#[derive(Parser, Debug)]
#[command(name = "fleetview")]
#[command(about = "Daemon status and config checker preferences for the fleet dashboard", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the status of every daemon in a snapshot
    Status {
        /// JSON snapshot with daemon telemetry
        #[arg(short, long, value_name = "FILE")]
        snapshot: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the states visited by repeatedly activating a checker
    Cycle {
        /// Starting state (enabled, disabled or inherit)
        #[arg(short, long)]
        state: CheckerState,

        /// Number of activations
        #[arg(short = 'n', long, default_value_t = 3)]
        steps: usize,

        /// Keep the inherit state in the cycle regardless of configuration
        #[arg(long)]
        allow_inherit: bool,
    },
    /// Activate a checker once and print the preference change
    Toggle {
        /// JSON snapshot listing the checkers
        #[arg(short, long, value_name = "FILE")]
        snapshot: PathBuf,

        /// Checker name
        #[arg(long)]
        checker: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    debug!("fleetview v{}", env!("CARGO_PKG_VERSION"));

    let config = match load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };
    debug!("Allow inherit state: {}", config.allow_inherit_state);
    debug!("Daemon order: {} entries", config.daemon_order.len());

    match args.command {
        Command::Status { snapshot, json } => show_status(&config, &snapshot, json),
        Command::Cycle {
            state,
            steps,
            allow_inherit,
        } => {
            let policy = if allow_inherit {
                CyclePolicy { allow_inherit: true }
            } else {
                config.policy()
            };
            show_cycle(state, steps, policy);
            Ok(())
        }
        Command::Toggle { snapshot, checker } => toggle(&config, &snapshot, &checker),
    }
}

fn show_status(config: &DashboardConfig, snapshot_path: &Path, json: bool) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let daemons = order_daemons(&snapshot.daemons, &config.daemon_order);

    if json {
        let out = serde_json::to_string_pretty(&daemons).context("Failed to encode status")?;
        println!("{}", out);
    } else {
        for daemon in &daemons {
            let status = &daemon.status;
            println!(
                "{:<10} {:<6} {:<6} {:>3}%  {}",
                daemon.display_name,
                status.icon_name().as_str(),
                status.icon_color().as_str(),
                daemon.query_utilization,
                status.tooltip()
            );
        }
    }

    let erred = daemons.iter().filter(|d| d.status.erred()).count();
    info!("{} daemons shown, {} with communication errors", daemons.len(), erred);

    Ok(())
}

fn show_cycle(start: CheckerState, steps: usize, policy: CyclePolicy) {
    let mut state = start;
    println!("{}", state);
    for _ in 0..steps {
        state = next_state(state, policy);
        println!("{}", state);
    }
}

fn toggle(config: &DashboardConfig, snapshot_path: &Path, name: &str) -> Result<()> {
    let mut snapshot = load_snapshot(snapshot_path)?;
    let checker = snapshot
        .checker_mut(name)
        .ok_or_else(|| anyhow!("Unknown checker '{}'", name))?;

    let previous = checker.state;
    let preference = toggle_checker(checker, config.policy());
    info!("Checker {}: {} -> {}", preference.name, previous, preference.state);

    let out = serde_json::to_string(&preference).context("Failed to encode preference")?;
    println!("{}", out);

    Ok(())
}
