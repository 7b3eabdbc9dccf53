use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("plango")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--exit-on-login"));
}

#[test]
fn test_check_help_shows_flags() {
    cargo_bin_cmd!("plango")
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--email"))
        .stdout(predicate::str::contains("--password-stdin"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("plango")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
