mod common;

use std::fs;

use orfscan_core::archive::deserialize;
use orfscan_core::types::Direction;
use tempfile::tempdir;

use crate::common::{
    archive_path, normalize_output, orfscan_in, run_orfscan, stderr_of, stdout_of,
};

#[test]
fn scan_writes_archive_on_exit() {
    let dir = tempdir().unwrap();
    run_orfscan(dir.path(), "AUGCCCUAA", "text");

    let text = fs::read_to_string(archive_path(dir.path())).unwrap();
    assert!(text.contains("\"positionInSupersequence\": 1"));
    assert!(text.contains("\"codonSequence\": \"AUG\""));

    let store = deserialize(&text).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.iter().next().unwrap().direction, Direction::Forward);
}

#[test]
fn history_accumulates_across_runs() {
    let dir = tempdir().unwrap();
    run_orfscan(dir.path(), "AUGCCCUAA", "text");
    run_orfscan(dir.path(), "AUGUAAAAUCCCGUA", "text");

    let output = orfscan_in(dir.path())
        .arg("--history")
        .arg("-f")
        .arg("tsv")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = normalize_output(&String::from_utf8(output).unwrap());

    let rows: Vec<_> = output.lines().skip(1).collect();
    assert_eq!(
        rows,
        vec![
            "1 | FORWARD | 1 | 9 | 3 | AUGCCCUAA",
            "2 | FORWARD | 1 | 6 | 2 | AUGUAA",
            "3 | REVERSE | 15 | 9 | 3 | AUGCCCUAA",
        ]
    );
}

#[test]
fn history_of_missing_archive_is_empty() {
    let dir = tempdir().unwrap();
    orfscan_in(dir.path())
        .arg("--history")
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn invalid_sequence_fails_without_touching_archive() {
    let dir = tempdir().unwrap();
    let assert = orfscan_in(dir.path())
        .arg("-s")
        .arg("ATGTAA")
        .assert()
        .failure()
        .code(1);
    assert!(stderr_of(&assert).contains("InvalidSequence"));

    assert!(!archive_path(dir.path()).exists());
}

#[test]
fn partial_codon_is_rejected() {
    let dir = tempdir().unwrap();
    let assert = orfscan_in(dir.path())
        .arg("-s")
        .arg("AUGCC")
        .assert()
        .failure()
        .code(1);
    assert!(stderr_of(&assert).contains("PreconditionViolation"));
}

#[test]
fn corrupt_archive_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(archive_path(dir.path()), "[{").unwrap();

    let assert = orfscan_in(dir.path())
        .arg("-s")
        .arg("AUGCCCUAA")
        .assert()
        .failure()
        .code(1);
    assert!(stderr_of(&assert).contains("ParseError"));
}

#[test]
fn fasta_input_scans_every_record() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.fa");
    fs::write(&input, ">first\nAUGCCCUAA\n>second\nCCCCCC\n>third\nGUGUGA\n").unwrap();

    let output = orfscan_in(dir.path())
        .arg("-i")
        .arg(&input)
        .arg("-f")
        .arg("gff")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("first\torfscan_v"));
    assert!(!output.contains("second\torfscan_v"));
    assert!(output.contains("ID=third_1;direction=FORWARD;start_codon=GUG;codons=2;"));

    let store = deserialize(&fs::read_to_string(archive_path(dir.path())).unwrap()).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn output_written_to_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("orfs.tsv");

    orfscan_in(dir.path())
        .arg("-s")
        .arg("AUGCCCUAA")
        .arg("-f")
        .arg("tsv")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let text = fs::read_to_string(out).unwrap();
    assert!(text.ends_with("1\tFORWARD\t1\t9\t3\tAUGCCCUAA\n"));
}

#[test]
fn interactive_menu_scans_and_saves() {
    let dir = tempdir().unwrap();

    let assert = orfscan_in(dir.path())
        .arg("-f")
        .arg("tsv")
        .write_stdin("1\nAUGCCCUAA\n1\n2\n1\n3\n")
        .assert()
        .success();

    let stdout = stdout_of(&assert);
    assert!(stdout.contains("MENU"));
    assert!(stdout.contains("1\tFORWARD\t1\t9\t3\tAUGCCCUAA"));
    assert!(stdout.ends_with("See you around!\n"));

    let store = deserialize(&fs::read_to_string(archive_path(dir.path())).unwrap()).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn max_length_is_enforced() {
    let dir = tempdir().unwrap();
    orfscan_in(dir.path())
        .arg("-l")
        .arg("6")
        .arg("-s")
        .arg("AUGCCCUAA")
        .assert()
        .failure()
        .code(1);
}
