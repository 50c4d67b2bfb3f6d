use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_sanctuary-stats"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sanctuary-stats"))
        .stdout(predicate::str::contains("--network"));
}

#[test]
fn rejects_unknown_format() {
    Command::new(env!("CARGO_BIN_EXE_sanctuary-stats"))
        .args(["--format", "csv"])
        .assert()
        .failure();
}

#[test]
fn unknown_network_fails_cleanly() {
    Command::new(env!("CARGO_BIN_EXE_sanctuary-stats"))
        .args(["--network", "Solana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown network 'Solana'"));
}
