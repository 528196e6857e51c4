use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn simulate(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("grandtour");
    cmd.env("GRANDTOUR_HOME", home.path())
        .env_remove("GRANDTOUR_PASSWORD")
        .env_remove("GRANDTOUR_LOG")
        .arg("simulate");
    cmd
}

#[test]
fn test_executive_lands_on_executive_dashboard() {
    let home = tempdir().unwrap();

    simulate(&home)
        .args(["--login", "anna@grandtour.example", "--password", "pw"])
        .args(["--role", "executive", "--code", "123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view: executive-dashboard"))
        .stdout(predicate::str::contains("login -> executive-dashboard (login)"));
}

#[test]
fn test_gold_member_json_outcome() {
    let home = tempdir().unwrap();

    let output = simulate(&home)
        .args(["--login", "+7 999 123 45 67", "--password", "pw"])
        .args(["--role", "member-gold", "--code", "654321", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["view"], "client-club-portal");
    assert_eq!(value["session"]["role"], "member-gold");
    assert_eq!(value["transitions"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_short_code_fails() {
    let home = tempdir().unwrap();

    simulate(&home)
        .args(["--login", "a@b.com", "--password", "pw"])
        .args(["--role", "captain", "--code", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 6 digits"));
}

#[test]
fn test_missing_password_fails() {
    let home = tempdir().unwrap();

    simulate(&home)
        .args(["--login", "a@b.com", "--role", "captain", "--code", "123456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("enter your password"));
}

#[test]
fn test_visitor_cannot_use_the_form() {
    let home = tempdir().unwrap();

    simulate(&home)
        .args(["--login", "a@b.com", "--password", "pw"])
        .args(["--role", "visitor", "--code", "123456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be picked in the login form"))
        .stderr(predicate::str::contains("cannot sign in here"));
}

#[test]
fn test_unknown_role_is_named_as_unknown() {
    let home = tempdir().unwrap();

    simulate(&home)
        .args(["--login", "a@b.com", "--password", "pw"])
        .args(["--role", "ghost", "--code", "123456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role `ghost`"))
        .stderr(predicate::str::contains("cannot be picked").not());
}

#[test]
fn test_forged_role_lands_on_unrecognized_role() {
    let home = tempdir().unwrap();

    simulate(&home)
        .args(["--login", "ghost@b.com", "--role", "ghost-role", "--forge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view: unrecognized-role"))
        .stdout(predicate::str::contains("role: ghost-role"));
}
