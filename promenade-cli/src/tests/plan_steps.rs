//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{OUT_OF_BOUNDS_NAME, temp_workspace, write_landmark_catalog, write_utf8};
use super::*;
use crate::plan::run_plan_with;
use camino::Utf8PathBuf;
use promenade_core::Plan;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct PlanWorld {
    _tmp: TempDir,
    catalog_path: Utf8PathBuf,
    include_catalog: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        let (tmp, root) = temp_workspace();
        Self {
            _tmp: tmp,
            catalog_path: root.join("catalog.json"),
            include_catalog: RefCell::new(true),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, interest: &str, time: &str) -> Vec<String> {
        let mut argv = vec!["promenade".to_owned(), "plan".to_owned()];
        if *self.include_catalog.borrow() {
            argv.extend([
                format!("--{ARG_PLAN_CATALOG}"),
                self.catalog_path.as_str().to_owned(),
            ]);
        }
        argv.extend([
            format!("--{ARG_PLAN_INTEREST}"),
            interest.to_owned(),
            format!("--{ARG_PLAN_TIME}"),
            time.to_owned(),
        ]);
        argv
    }

    fn error(&self) -> CliError {
        self.result
            .borrow_mut()
            .take()
            .expect("result recorded")
            .expect_err("expected error")
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("a catalog file with central landmarks")]
fn catalog_with_landmarks(#[from(world)] world: &PlanWorld) {
    write_landmark_catalog(&world.catalog_path);
}

#[given("the catalog file does not exist")]
fn catalog_missing(#[from(world)] world: &PlanWorld) {
    let _ = world;
}

#[given("the catalog file contains invalid JSON")]
fn catalog_invalid_json(#[from(world)] world: &PlanWorld) {
    write_utf8(&world.catalog_path, b"[{ not valid json");
}

#[given("I omit the catalog path")]
fn omit_catalog_path(#[from(world)] world: &PlanWorld) {
    *world.include_catalog.borrow_mut() = false;
}

#[when("I plan a \"{interest}\" walk lasting \"{time}\"")]
fn run_plan_command(#[from(world)] world: &PlanWorld, interest: String, time: String) {
    let invocation = world.build_command_line(&interest, &time);
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Plan(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_plan_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

fn printed_plan(world: &PlanWorld) -> Plan {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    serde_json::from_str(&stdout).expect("output should be a JSON plan")
}

#[then("the command prints the route \"{expected}\"")]
fn command_prints_route(#[from(world)] world: &PlanWorld, expected: String) {
    let plan = printed_plan(world);
    let expected: Vec<&str> = expected.split(", ").collect();
    let names: Vec<&str> = plan.route.names().iter().map(String::as_str).collect();
    assert_eq!(names, expected);
}

#[then("places outside the city are not candidates")]
fn outside_places_excluded(#[from(world)] world: &PlanWorld) {
    let plan = printed_plan(world);
    assert!(!plan.candidates.iter().any(|name| name == OUT_OF_BOUNDS_NAME));
}

#[then("the command fails because the catalog file is missing")]
fn fails_missing_catalog_file(#[from(world)] world: &PlanWorld) {
    match world.error() {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_PLAN_CATALOG);
            assert_eq!(path, world.catalog_path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[then("the command fails because the catalog JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &PlanWorld) {
    match world.error() {
        CliError::ParseCatalog { .. } => {}
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[then("the command fails because the catalog path is missing")]
fn fails_missing_catalog_path(#[from(world)] world: &PlanWorld) {
    match world.error() {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_CATALOG);
            assert_eq!(env, ENV_PLAN_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_happy_path, "planning a walk from a catalog file");
register_plan_scenario!(plan_missing_file, "rejecting a missing catalog file");
register_plan_scenario!(plan_invalid_json, "rejecting invalid catalog JSON");
register_plan_scenario!(plan_missing_path, "rejecting a missing catalog path");
