use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("grandtour")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("routes"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("diagram"));
}

#[test]
fn test_simulate_help_lists_flow_inputs() {
    cargo_bin_cmd!("grandtour")
        .args(["simulate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--login"))
        .stdout(predicate::str::contains("--role"))
        .stdout(predicate::str::contains("--code"))
        .stdout(predicate::str::contains("--forge"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("grandtour")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
