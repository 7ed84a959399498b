//! Command-line interface for the Promenade walking-route planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod catalog_file;
mod error;
mod fs;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_CATALOG: &str = "catalog";
pub(crate) const ARG_PLAN_INTEREST: &str = "interest";
pub(crate) const ARG_PLAN_TIME: &str = "time";
pub(crate) const ARG_PLAN_LAT: &str = "lat";
pub(crate) const ARG_PLAN_LON: &str = "lon";
pub(crate) const ARG_PLAN_MAX_CANDIDATES: &str = "max-candidates";
pub(crate) const ENV_PLAN_CATALOG: &str = "PROMENADE_CMDS_PLAN_CATALOG";

/// Filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the Promenade CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError::ArgumentParsing`] for help and version requests as
/// well as invalid arguments; see [`CliError::exit_code`].
pub fn run() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

/// Route `log` records and `tracing` events to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        log::debug!("logging already initialised: {err}");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "promenade",
    about = "Plan short walking routes through a city's landmarks",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Plan a walk for an interest and time budget.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
