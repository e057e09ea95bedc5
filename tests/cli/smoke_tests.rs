use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_file_size"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("file_size"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_file_size"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn measures_manifest() {
    let expected = std::fs::metadata("Cargo.toml").unwrap().len();
    Command::new(env!("CARGO_BIN_EXE_file_size"))
        .arg("Cargo.toml")
        .assert()
        .success()
        .stdout(format!("{expected}\n"));
}

#[test]
fn missing_path_argument_is_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_file_size")).assert().failure().code(2);
}

#[test]
fn verbose_logs_go_to_stderr() {
    Command::new(env!("CARGO_BIN_EXE_file_size"))
        .args(["--verbose", "Cargo.toml"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap())
        .stderr(predicate::str::contains("querying file size"));
}
