use assert_cmd::Command;
use predicates::prelude::*;

fn folder_hash() -> Command {
    Command::new(env!("CARGO_BIN_EXE_folder_hash"))
}

#[test]
fn shows_help() {
    folder_hash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--folder"))
        .stdout(predicate::str::contains("--md5"))
        .stdout(predicate::str::contains("unset prints as 0"));
}

#[test]
fn shows_version() {
    folder_hash()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn folder_is_required() {
    folder_hash()
        .arg("-m")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--folder"));
}

#[test]
fn negative_threads_are_rejected() {
    folder_hash()
        .args(["-f", ".", "-t", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn review_options_print_without_running() {
    folder_hash()
        .args(["-f", "no/such/folder", "-t", "4", "-m", "-r"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Threads:    4"))
        .stdout(predicate::str::contains("Folder:     no/such/folder"))
        .stdout(predicate::str::contains("Md5:        true"))
        .stdout(predicate::str::contains("Review:     true"))
        .stdout(predicate::str::contains("Process took").not());
}
