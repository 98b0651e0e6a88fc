//! Behaviour-driven step definitions driving the lookup CLI scenarios.

#![cfg(feature = "store-sqlite")]

use super::helpers::{BEST_BARCODE, BETTER_BARCODE, TARGET_BARCODE, Workspace, alternative_barcodes};
use super::*;
use crate::lookup::{DefaultLookupStoreBuilder, run_lookup_with};
use camino::Utf8PathBuf;
use nutriscan_core::BarcodeError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct LookupWorld {
    workspace: Workspace,
    database: Utf8PathBuf,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl LookupWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let database = workspace.path("products.db");
        Self {
            workspace,
            database,
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, barcode: &str) {
        let mut argv = vec![
            "nutriscan".to_owned(),
            "lookup".to_owned(),
            barcode.to_owned(),
            format!("--{ARG_DATABASE}"),
            self.database.as_str().to_owned(),
        ];
        argv.extend(self.cli_args.borrow().iter().cloned());

        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Lookup(args) => {
                let mut buffer = self.stdout.borrow_mut();
                run_lookup_with(args, &DefaultLookupStoreBuilder, &mut *buffer)
            }
            Command::Rate(_) => panic!("expected lookup command"),
        });
        self.result.replace(Some(outcome));
    }

    fn report(&self) -> serde_json::Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(error) = result {
            panic!("expected success, found {error:?}");
        }
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON")
    }

    fn with_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> LookupWorld {
    LookupWorld::new()
}

#[given("a product database with a poorly rated chocolate bar")]
fn database_exists(#[from(world)] world: &LookupWorld) {
    let written = world.workspace.write_catalogue();
    assert_eq!(written, world.database);
}

#[given("no product database exists")]
fn database_missing(#[from(world)] world: &LookupWorld) {
    assert!(!world.database.exists());
}

#[given("the alternatives limit is {limit}")]
fn alternatives_limit(#[from(world)] world: &LookupWorld, limit: usize) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_ALTERNATIVES_LIMIT}"), limit.to_string()]);
}

#[when("I look up the chocolate bar")]
fn look_up_target(#[from(world)] world: &LookupWorld) {
    world.run(TARGET_BARCODE);
}

#[when("I look up barcode {barcode:word}")]
fn look_up_barcode(#[from(world)] world: &LookupWorld, barcode: String) {
    world.run(&barcode);
}

#[then("the command prints the rating and the better chocolate bars, best first")]
fn prints_report(#[from(world)] world: &LookupWorld) {
    let report = world.report();
    assert_eq!(report["product"]["barcode"], TARGET_BARCODE);
    assert_eq!(report["rating"]["score"], 19);
    assert_eq!(alternative_barcodes(&report), [BEST_BARCODE, BETTER_BARCODE]);
    assert_eq!(report["alternatives"][0]["score"], 90);
    assert_eq!(report["alternatives"][1]["score"], 48);
}

#[then("only the better bar among the first two candidates is suggested")]
fn prints_limited_report(#[from(world)] world: &LookupWorld) {
    let report = world.report();
    assert_eq!(alternative_barcodes(&report), [BETTER_BARCODE]);
}

#[then("the command fails because the product was not found")]
fn fails_not_found(#[from(world)] world: &LookupWorld) {
    world.with_error(|error| match error {
        CliError::ProductNotFound { barcode } => assert_eq!(barcode.as_str(), "99999999"),
        other => panic!("expected ProductNotFound, found {other:?}"),
    });
}

#[then("the command fails because the barcode is invalid")]
fn fails_invalid_barcode(#[from(world)] world: &LookupWorld) {
    world.with_error(|error| match error {
        CliError::InvalidBarcode { source, .. } => {
            assert_eq!(*source, BarcodeError::InvalidLength { length: 5 });
        }
        other => panic!("expected InvalidBarcode, found {other:?}"),
    });
}

#[then("the command fails because the database is missing")]
fn fails_missing_database(#[from(world)] world: &LookupWorld) {
    world.with_error(|error| match error {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_DATABASE),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    });
}

macro_rules! register_lookup_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/lookup_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: LookupWorld) {
            let _ = world;
        }
    };
}

register_lookup_scenario!(lookup_suggests_alternatives, "suggesting better products from the same category");
register_lookup_scenario!(lookup_limits_candidates, "narrowing the candidate pool");
register_lookup_scenario!(lookup_unknown_barcode, "reporting an unknown barcode");
register_lookup_scenario!(lookup_malformed_barcode, "rejecting a malformed barcode");
register_lookup_scenario!(lookup_missing_database, "rejecting a missing database");
