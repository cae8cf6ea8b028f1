//! Integration tests for the wayfarer CLI.
//!
//! These use `assert_cmd` to exercise the binary end to end against small
//! map database fixtures written into a temporary directory:
//! - route reports in text and JSON formats
//! - inspect output
//! - error exit paths (missing file, unknown start, corrupt database)

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const COUNTRY_DRIVING: &str = "\
5
NewYork Boston Chicago Fargo Orlando
NewYork 3 Boston 215 Chicago 790 Orlando 1090
Boston 1 Chicago 985
Chicago 1 Fargo 640
Fargo 0
Orlando 1 NewYork 1090
";

/// Helper holding a temp directory with a map database fixture.
struct TestEnv {
    _temp_dir: TempDir,
    map_path: PathBuf,
}

impl TestEnv {
    fn with_map(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let map_path = temp_dir.path().join("map.txt");
        fs::write(&map_path, contents).expect("write map fixture");
        Self {
            _temp_dir: temp_dir,
            map_path,
        }
    }
}

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("wayfarer").expect("binary exists");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn route_reports_costs_and_paths_for_every_place() {
    let env = TestEnv::with_map(COUNTRY_DRIVING);
    cli()
        .arg("route")
        .arg("--map")
        .arg(&env.map_path)
        .arg("--from")
        .arg("NewYork")
        .assert()
        .success()
        .stdout(predicate::str::contains("From NewYork to..."))
        .stdout(predicate::str::contains("(NewYork->Chicago->Fargo)"))
        .stdout(predicate::str::contains("1430"));
}

#[test]
fn multiple_starts_produce_one_report_each() {
    let env = TestEnv::with_map(COUNTRY_DRIVING);
    cli()
        .arg("route")
        .arg("--map")
        .arg(&env.map_path)
        .arg("--from")
        .arg("NewYork")
        .arg("--from")
        .arg("Fargo")
        .assert()
        .success()
        .stdout(predicate::str::contains("From NewYork to..."))
        .stdout(predicate::str::contains("From Fargo to..."));
}

#[test]
fn places_with_no_incoming_route_render_unreachable() {
    let env = TestEnv::with_map(COUNTRY_DRIVING);
    // Nothing leads back to Boston's side from Fargo.
    cli()
        .arg("route")
        .arg("--map")
        .arg(&env.map_path)
        .arg("--from")
        .arg("Fargo")
        .assert()
        .success()
        .stdout(predicate::str::contains("unreachable"))
        .stdout(predicate::str::contains("(NewYork)"));
}

#[test]
fn json_format_serializes_the_reports() {
    let env = TestEnv::with_map(COUNTRY_DRIVING);
    let output = cli()
        .arg("route")
        .arg("--map")
        .arg(&env.map_path)
        .arg("--from")
        .arg("NewYork")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let reports: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout is valid JSON");
    assert_eq!(reports[0]["start"], "NewYork");
    let fargo = &reports[0]["entries"][3];
    assert_eq!(fargo["place"], "Fargo");
    assert_eq!(fargo["cost"], 1430);
    assert_eq!(fargo["path"][1], "Chicago");
}

#[test]
fn inspect_lists_places_and_ordered_roads() {
    let env = TestEnv::with_map(COUNTRY_DRIVING);
    cli()
        .arg("inspect")
        .arg("--map")
        .arg(&env.map_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 places:"))
        .stdout(predicate::str::contains("-> Boston (215 miles)"));
}

#[test]
fn missing_map_file_fails_with_a_diagnostic() {
    let temp_dir = TempDir::new().expect("create temp dir");
    cli()
        .arg("route")
        .arg("--map")
        .arg(temp_dir.path().join("nope.txt"))
        .arg("--from")
        .arg("NewYork")
        .assert()
        .failure()
        .stderr(predicate::str::contains("map database not found"));
}

#[test]
fn unknown_start_place_fails_with_a_diagnostic() {
    let env = TestEnv::with_map(COUNTRY_DRIVING);
    cli()
        .arg("route")
        .arg("--map")
        .arg(&env.map_path)
        .arg("--from")
        .arg("Atlantis")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown start place: Atlantis"));
}

#[test]
fn empty_database_fails_as_too_few_places() {
    let env = TestEnv::with_map("0\n");
    cli()
        .arg("route")
        .arg("--map")
        .arg(&env.map_path)
        .arg("--from")
        .arg("NewYork")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too few places"));
}
