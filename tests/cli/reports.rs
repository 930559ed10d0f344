use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HI_MD5: &str = "49f68a5c8493ec2c0bf489821c21fc3b";
const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

fn folder_hash() -> Command {
    Command::new(env!("CARGO_BIN_EXE_folder_hash"))
}

/// `<tmp>/data/a.txt` = "hi", `<tmp>/data/sub/b.txt` = "".
fn fixture() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("data");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "hi").unwrap();
    fs::write(root.join("sub").join("b.txt"), "").unwrap();
    let root = root.to_str().unwrap().to_string();
    (dir, root)
}

fn lines_before_summary(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .take_while(|line| !line.starts_with("Process took"))
        .map(str::to_string)
        .collect()
}

#[test]
fn listing_prints_sorted_relative_paths() {
    let (_dir, root) = fixture();
    let output = folder_hash().args(["-f", &root]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(lines_before_summary(&output.stdout), ["/a.txt", "/sub/b.txt"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Process took"));
}

#[test]
fn md5_single_worker_prints_digests() {
    let (_dir, root) = fixture();
    let output = folder_hash().args(["-f", &root, "-m", "-t", "1"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        lines_before_summary(&output.stdout),
        [
            format!("/a.txt -> {HI_MD5}"),
            format!("/sub/b.txt -> {EMPTY_MD5}"),
        ]
    );
}

#[test]
fn more_threads_than_files_gives_same_report() {
    let (_dir, root) = fixture();
    let one = folder_hash().args(["-f", &root, "-m", "-t", "1"]).output().unwrap();
    let many = folder_hash().args(["-f", &root, "-m", "-t", "8"]).output().unwrap();

    assert!(many.status.success());
    assert_eq!(
        lines_before_summary(&one.stdout),
        lines_before_summary(&many.stdout)
    );
}

#[test]
fn trailing_separator_drops_leading_slash() {
    let (_dir, root) = fixture();
    let root = format!("{root}/");
    let output = folder_hash().args(["-f", &root]).output().unwrap();

    assert_eq!(lines_before_summary(&output.stdout), ["a.txt", "sub/b.txt"]);
}

#[test]
fn output_file_receives_report() {
    let (dir, root) = fixture();
    let out = dir.path().join("report.txt");
    let out_str = out.to_str().unwrap();

    folder_hash()
        .args(["-f", &root, "-m", "-t", "2", "-o", out_str])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Written to {out_str}")))
        .stdout(predicate::str::contains("Process took"))
        .stdout(predicate::str::contains(HI_MD5).not());

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        format!("/a.txt -> {HI_MD5}\n/sub/b.txt -> {EMPTY_MD5}\n")
    );
}

#[test]
fn invalid_root_fails_without_creating_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let out = dir.path().join("report.txt");

    folder_hash()
        .args(["-f", missing.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("That isn't a directory. Try again"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn empty_folder_reports_nothing() {
    let dir = TempDir::new().unwrap();
    let output = folder_hash()
        .args(["-f", dir.path().to_str().unwrap(), "-m"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(lines_before_summary(&output.stdout).is_empty());
}
