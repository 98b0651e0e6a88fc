//! Unit tests for argument parsing and shared command helpers.

use super::helpers::{Workspace, write_utf8};
use super::*;
use rstest::rstest;

#[rstest]
#[case::credit("credit", ZeroValuesArg::Credit)]
#[case::credit_alias("default-credit", ZeroValuesArg::Credit)]
#[case::formula("formula", ZeroValuesArg::Formula)]
fn parses_zero_value_policies(#[case] raw: &str, #[case] expected: ZeroValuesArg) {
    let cli = Cli::try_parse_from(["nutriscan", "rate", "record.json", "--zero-values", raw])
        .expect("arguments should parse");
    match cli.command {
        Command::Rate(args) => assert_eq!(args.zero_values, Some(expected)),
        Command::Lookup(_) => panic!("expected rate command"),
    }
}

#[rstest]
fn rejects_unknown_zero_value_policy() {
    let err = Cli::try_parse_from(["nutriscan", "rate", "record.json", "--zero-values", "ignore"])
        .expect_err("unknown policy should fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[rstest]
#[case(ZeroValuesArg::Credit, ZeroValuePolicy::DefaultCredit)]
#[case(ZeroValuesArg::Formula, ZeroValuePolicy::Formula)]
fn zero_values_map_onto_scoring_policy(
    #[case] arg: ZeroValuesArg,
    #[case] expected: ZeroValuePolicy,
) {
    assert_eq!(ZeroValuePolicy::from(arg), expected);
}

#[rstest]
fn zero_values_deserialise_from_configuration_spelling() {
    let parsed: ZeroValuesArg =
        serde_json::from_str("\"default-credit\"").expect("alias should deserialise");
    assert_eq!(parsed, ZeroValuesArg::Credit);
}

#[rstest]
fn log_level_is_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from([
        "nutriscan",
        "lookup",
        "96385074",
        "--log-level",
        "nutriscan_scorer=debug",
    ])
    .expect("global flag should parse");
    assert_eq!(cli.log_level.as_deref(), Some("nutriscan_scorer=debug"));
}

#[rstest]
fn explicit_log_filter_must_parse() {
    let err = telemetry::build_filter(Some("nutriscan=loud")).expect_err("bad directive");
    match err {
        CliError::LogFilter { value, .. } => assert_eq!(value, "nutriscan=loud"),
        other => panic!("expected LogFilter, found {other:?}"),
    }
}

#[rstest]
fn explicit_log_filter_is_used() {
    let filter = telemetry::build_filter(Some("debug")).expect("valid directive");
    assert_eq!(
        filter.max_level_hint(),
        Some(tracing_subscriber::filter::LevelFilter::DEBUG)
    );
}

#[rstest]
fn require_existing_accepts_files() {
    let workspace = Workspace::new();
    let path = workspace.path("products.db");
    write_utf8(&path, b"db");
    require_existing(&path, ARG_DATABASE).expect("file should be accepted");
}

#[rstest]
fn require_existing_reports_missing_files() {
    let workspace = Workspace::new();
    let path = workspace.path("absent.db");
    let err = require_existing(&path, ARG_DATABASE).expect_err("missing file");
    match err {
        CliError::MissingSourceFile { field, path: reported } => {
            assert_eq!(field, ARG_DATABASE);
            assert_eq!(reported, path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn require_existing_rejects_directories() {
    let workspace = Workspace::new();
    let path = workspace.path("catalogue");
    std::fs::create_dir(path.as_std_path()).expect("create directory");
    let err = require_existing(&path, ARG_RECORD).expect_err("directory should fail");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_RECORD),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn write_json_appends_newline() {
    let mut buffer = Vec::new();
    write_json(&mut buffer, &serde_json::json!({ "score": 77 })).expect("write output");
    let text = String::from_utf8(buffer).expect("utf-8 output");
    assert_eq!(text, "{\n  \"score\": 77\n}\n");
}

#[rstest]
fn not_found_store_errors_become_product_not_found() {
    let barcode = nutriscan_core::Barcode::parse("96385074").expect("valid barcode");
    let err = CliError::from(nutriscan_core::StoreError::NotFound {
        barcode: barcode.clone(),
    });
    match err {
        CliError::ProductNotFound { barcode: reported } => assert_eq!(reported, barcode),
        other => panic!("expected ProductNotFound, found {other:?}"),
    }
}
