#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Archive file used by every test run inside `dir`
pub fn archive_path(dir: &Path) -> PathBuf {
    dir.join("history.json")
}

/// Builds an orfscan command that runs inside `dir` with its archive there too
pub fn orfscan_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("orfscan").unwrap();
    cmd.current_dir(dir).arg("-a").arg(archive_path(dir)).arg("-q");
    cmd
}

/// Scans `sequence` in `format` and returns stdout
pub fn run_orfscan(dir: &Path, sequence: &str, format: &str) -> String {
    let output = orfscan_in(dir)
        .arg("-s")
        .arg(sequence)
        .arg("-f")
        .arg(format)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

/// Tabs rendered as `|` so snapshots stay readable
pub fn normalize_output(s: &str) -> String {
    s.replace('\t', " | ")
}

pub fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

pub fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}
