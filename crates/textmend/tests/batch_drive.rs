//! Directory batch runs: filtering, summaries, per-file failure isolation.

use std::fs;
use std::path::Path;
use textmend::cli::batch::{execute, BatchArgs, BatchRecord};
use textmend::cli::detect::detect_file;

fn seed_tree(root: &Path) {
    fs::write(root.join("ascii.txt"), b"plain\n").unwrap();
    fs::write(root.join("legacy.txt"), b"caf\xE9\n").unwrap();
    fs::write(root.join("binary.dat"), b"\xFF\x00\x00\xFF\x00").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    let mut utf16 = vec![0xFF, 0xFE];
    utf16.extend("bonjour".encode_utf16().flat_map(u16::to_le_bytes));
    fs::write(root.join("sub/wide.txt"), utf16).unwrap();
}

fn args_for(root: &Path) -> BatchArgs {
    BatchArgs {
        path: root.to_path_buf(),
        types: Vec::new(),
        depth: None,
        fix: false,
        backup: true,
        dry_run: false,
        json: false,
    }
}

#[test]
fn detect_run_tallies_every_file_and_survives_failures() {
    let dir = tempfile::tempdir().unwrap();
    seed_tree(dir.path());

    let result = execute(&args_for(dir.path()));

    assert_eq!(result.summary.scanned, 4);
    assert_eq!(result.summary.already_utf8, 1);
    assert_eq!(result.summary.needs_conversion, 2);
    assert_eq!(result.summary.failed, 1);
    assert_eq!(result.summary.converted, 0);

    // Paths come back sorted.
    let paths: Vec<_> = result
        .files
        .iter()
        .map(|r| match r {
            BatchRecord::Detect(d) => d.path.clone(),
            BatchRecord::Fix(f) => f.path.clone(),
        })
        .collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}

#[test]
fn type_filter_narrows_the_walk() {
    let dir = tempfile::tempdir().unwrap();
    seed_tree(dir.path());

    let mut args = args_for(dir.path());
    args.types = vec!["TXT".to_string()];
    let result = execute(&args);

    assert_eq!(result.summary.scanned, 3);
    assert_eq!(result.summary.failed, 0);
}

#[test]
fn depth_limit_skips_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    seed_tree(dir.path());

    let mut args = args_for(dir.path());
    args.depth = Some(1);
    let result = execute(&args);

    assert_eq!(result.summary.scanned, 3, "sub/wide.txt is below the cut");
}

#[test]
fn fix_run_converts_in_place_and_reports_totals() {
    let dir = tempfile::tempdir().unwrap();
    seed_tree(dir.path());

    let mut args = args_for(dir.path());
    args.fix = true;
    args.types = vec!["txt".to_string()];
    let result = execute(&args);

    assert_eq!(result.summary.scanned, 3);
    assert_eq!(result.summary.converted, 2);
    assert_eq!(result.summary.already_utf8, 1);
    assert_eq!(result.summary.failed, 0);

    // Converted files now detect as plain utf-8.
    for name in ["legacy.txt", "sub/wide.txt"] {
        let report = detect_file(&dir.path().join(name));
        assert!(report.success, "{name}");
        assert_eq!(report.detected_encoding, Some("utf-8"), "{name}");
    }

    // And the originals were preserved next to them.
    assert!(dir.path().join("legacy.txt.bak").exists());
    assert!(dir.path().join("sub/wide.txt.bak").exists());
}

#[test]
fn dry_run_fix_changes_nothing_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    seed_tree(dir.path());
    let before = fs::read(dir.path().join("legacy.txt")).unwrap();

    let mut args = args_for(dir.path());
    args.fix = true;
    args.dry_run = true;
    args.types = vec!["txt".to_string()];
    let result = execute(&args);

    assert_eq!(result.summary.needs_conversion, 2);
    assert_eq!(result.summary.converted, 0);
    assert_eq!(fs::read(dir.path().join("legacy.txt")).unwrap(), before);
    assert!(!dir.path().join("legacy.txt.bak").exists());
}

#[test]
fn empty_directory_yields_empty_summary() {
    let dir = tempfile::tempdir().unwrap();
    let result = execute(&args_for(dir.path()));
    assert_eq!(result.summary.scanned, 0);
    assert_eq!(result.summary.failed, 0);
    assert!(result.files.is_empty());
}
