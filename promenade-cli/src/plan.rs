//! Plan command implementation for the Promenade CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use promenade_core::{
    CityBounds, DEFAULT_MAX_CANDIDATES, DEFAULT_START, GeodesicDistance, Interest, Plan,
    PlanRequest, TimeBudget, plan_with,
};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PLAN_CATALOG, ARG_PLAN_INTEREST, ARG_PLAN_LAT, ARG_PLAN_LON, ARG_PLAN_MAX_CANDIDATES,
    ARG_PLAN_TIME, CliError, ENV_PLAN_CATALOG, catalog_file::load_catalog, fs::is_regular_file,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a walk by loading a JSON catalog of places, resolving \
                 the interest into candidates and ordering the best-rated \
                 ones as a nearest-neighbour tour from the start location. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Plan a walking route"
)]
#[ortho_config(prefix = "PROMENADE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the catalog of places.
    #[arg(long = ARG_PLAN_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Interest label, e.g. "History" or "Street art".
    #[arg(long = ARG_PLAN_INTEREST, value_name = "label")]
    #[serde(default)]
    pub(crate) interest: Option<String>,
    /// Time budget label: "1 hour", "2 hours", "3 hours" or "4 hours".
    #[arg(long = ARG_PLAN_TIME, value_name = "label")]
    #[serde(default)]
    pub(crate) time: Option<String>,
    /// Start latitude in decimal degrees.
    #[arg(long = ARG_PLAN_LAT, value_name = "deg")]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Start longitude in decimal degrees.
    #[arg(long = ARG_PLAN_LON, value_name = "deg")]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Upper bound on resolved candidates.
    #[arg(long = ARG_PLAN_MAX_CANDIDATES, value_name = "n")]
    #[serde(default)]
    pub(crate) max_candidates: Option<usize>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Interest label passed to the resolver.
    pub(crate) interest: String,
    /// Time budget label.
    pub(crate) time: String,
    /// Start location.
    pub(crate) start: Coord<f64>,
    /// Candidate bound.
    pub(crate) max_candidates: usize,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.catalog, ARG_PLAN_CATALOG)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn request(&self) -> PlanRequest {
        PlanRequest::new(self.interest.clone(), self.time.clone(), self.start)
            .with_max_candidates(self.max_candidates)
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_CATALOG,
            env: ENV_PLAN_CATALOG,
        })?;
        let interest = args
            .interest
            .unwrap_or_else(|| Interest::Any.as_str().to_owned());
        let time = args
            .time
            .unwrap_or_else(|| TimeBudget::TwoHours.as_str().to_owned());
        let start = Coord {
            x: args.lon.unwrap_or(DEFAULT_START.x),
            y: args.lat.unwrap_or(DEFAULT_START.y),
        };
        let max_candidates = args.max_candidates.unwrap_or(DEFAULT_MAX_CANDIDATES);

        Ok(Self {
            catalog,
            interest,
            time,
            start,
            max_candidates,
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let plan = execute_plan(args)?;
    write_plan(writer, &plan)
}

fn execute_plan(args: PlanArgs) -> Result<Plan, CliError> {
    let config = resolve_plan_config(args)?;
    let catalog = load_catalog(&config.catalog, &CityBounds::default())?;
    Ok(plan_with(&catalog, &config.request(), &GeodesicDistance))
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn write_plan(writer: &mut dyn Write, plan: &Plan) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(plan).map_err(CliError::SerialisePlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
