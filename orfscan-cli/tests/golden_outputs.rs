mod common;

use insta::assert_snapshot;
use tempfile::tempdir;

use crate::common::{normalize_output, run_orfscan};

#[test]
fn tsv_forward_orf_snapshot() {
    let dir = tempdir().unwrap();
    let output = run_orfscan(dir.path(), "AUGCCCUAA", "tsv");

    assert_snapshot!(normalize_output(&output), @r"
    index | direction | position | length | codons | sequence
    1 | FORWARD | 1 | 9 | 3 | AUGCCCUAA
    ");
}

#[test]
fn tsv_both_directions_snapshot() {
    let dir = tempdir().unwrap();
    let output = run_orfscan(dir.path(), "AUGUAAAAUCCCGUA", "tsv");

    assert_snapshot!(normalize_output(&output), @r"
    index | direction | position | length | codons | sequence
    1 | FORWARD | 1 | 6 | 2 | AUGUAA
    2 | REVERSE | 15 | 9 | 3 | AUGCCCUAA
    ");
}

#[test]
fn text_output_snapshot() {
    let dir = tempdir().unwrap();
    let output = run_orfscan(dir.path(), "augcccuaa", "text");

    assert_snapshot!(output, @r"
    # orfscan_seq_1
    ORF 1: FORWARD at position 1, 9 nt, 3 codons
        START AUG@1
        PLAIN CCC@4
        STOP  UAA@7
    ");
}

#[test]
fn gff_output_snapshot() {
    let dir = tempdir().unwrap();
    let output = run_orfscan(dir.path(), "AUGUAAAAUCCCGUA", "gff");

    assert_snapshot!(normalize_output(&output), @r"
    ##gff-version 3
    # Model Data: version=orfscan.v0.1.0
    orfscan_seq_1 | orfscan_v0.1.0 | ORF | 1 | 6 | . | + | 0 | ID=orfscan_seq_1_1;direction=FORWARD;start_codon=AUG;codons=2;
    orfscan_seq_1 | orfscan_v0.1.0 | ORF | 7 | 15 | . | . | 0 | ID=orfscan_seq_1_2;direction=REVERSE;start_codon=AUG;codons=3;
    ");
}

#[test]
fn no_orfs_text_output() {
    let dir = tempdir().unwrap();
    let output = run_orfscan(dir.path(), "CCCCCC", "text");

    assert_eq!(output, "# orfscan_seq_1\nNo open reading frames found.\n");
}
