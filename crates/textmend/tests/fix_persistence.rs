//! Persistence rules of the fix command: backups, atomic writes, no-op paths.

use std::fs;
use std::path::{Path, PathBuf};
use textmend::cli::fix::fix_file;

fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}

#[test]
fn in_place_fix_converts_and_backs_up() {
    let dir = tempfile::tempdir().unwrap();
    let original = utf16le_with_bom("Les élèves étudient.");
    let path = write_file(dir.path(), "notes.txt", &original);

    let report = fix_file(&path, None, true, false);

    assert!(report.success);
    assert!(report.converted);
    assert_eq!(report.original_encoding, Some("utf-16"));
    assert!(report.backup_created);

    let backup = report.backup_path.expect("backup path");
    assert_eq!(backup, dir.path().join("notes.txt.bak"));
    assert_eq!(fs::read(&backup).unwrap(), original);
    assert_eq!(fs::read(&path).unwrap(), "Les élèves étudient.".as_bytes());
}

#[test]
fn already_utf8_file_is_never_rewritten_or_backed_up() {
    let dir = tempfile::tempdir().unwrap();
    let content = "déjà vu\n".as_bytes();
    let path = write_file(dir.path(), "ok.txt", content);

    let report = fix_file(&path, None, true, false);

    assert!(report.success);
    assert!(!report.converted);
    assert!(!report.backup_created);
    assert_eq!(report.original_encoding, Some("utf-8"));
    assert_eq!(fs::read(&path).unwrap(), content);
    assert!(!dir.path().join("ok.txt.bak").exists());
}

#[test]
fn backup_failure_aborts_before_touching_the_primary() {
    let dir = tempfile::tempdir().unwrap();
    let original = utf16le_with_bom("abandon ship");
    let path = write_file(dir.path(), "doomed.txt", &original);

    // Squat on the backup path with a directory so the backup write fails.
    fs::create_dir(dir.path().join("doomed.txt.bak")).unwrap();

    let report = fix_file(&path, None, true, false);

    assert!(!report.success);
    assert!(report.error.unwrap().contains("backup write failed"));
    assert_eq!(fs::read(&path).unwrap(), original, "primary must be untouched");
}

#[test]
fn separate_output_path_leaves_original_alone() {
    let dir = tempfile::tempdir().unwrap();
    let original = utf16le_with_bom("deux chemins");
    let path = write_file(dir.path(), "in.txt", &original);
    let out = dir.path().join("out.txt");

    let report = fix_file(&path, Some(&out), true, false);

    assert!(report.success);
    assert!(report.converted);
    assert!(!report.backup_created, "backup only guards in-place overwrites");
    assert_eq!(fs::read(&path).unwrap(), original);
    assert_eq!(fs::read(&out).unwrap(), "deux chemins".as_bytes());
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let original = utf16le_with_bom("pas encore");
    let path = write_file(dir.path(), "later.txt", &original);

    let report = fix_file(&path, None, true, true);

    assert!(report.success);
    assert!(report.converted);
    assert!(report.dry_run);
    assert!(!report.backup_created);
    assert_eq!(fs::read(&path).unwrap(), original);
    assert!(!dir.path().join("later.txt.bak").exists());
}

#[test]
fn missing_file_reports_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    let report = fix_file(&path, None, true, false);

    assert!(!report.success);
    assert!(report.error.unwrap().contains("read failed"));
}

#[test]
fn undecodable_file_reports_failure_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let garbage: &[u8] = b"\xFF\x00\x00\xFF\x00";
    let path = write_file(dir.path(), "blob.bin", garbage);

    let report = fix_file(&path, None, true, false);

    assert!(!report.success);
    assert_eq!(fs::read(&path).unwrap(), garbage);
    assert!(!dir.path().join("blob.bin.bak").exists());
}
