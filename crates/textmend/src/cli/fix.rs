//! Fix command - re-encode a file to UTF-8
//!
//! Persistence rules the pure resolver leaves to us:
//! - a file that is already plain UTF-8 is never rewritten or backed up
//! - before an in-place overwrite, the original bytes go durably to a
//!   sibling `.bak` file; if that write fails the whole fix aborts with the
//!   primary file untouched
//! - output commits are atomic (tempfile in the target directory, then rename)

use crate::cli::error::HelpfulError;
use crate::cli::output::{fix_status_line, print_json};
use crate::cli::report::FixReport;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

/// Arguments for the fix command
#[derive(Debug)]
pub struct FixArgs {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub backup: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// Execute the fix command
pub fn run(args: FixArgs) -> anyhow::Result<ExitCode> {
    if args.path.is_dir() {
        return Err(HelpfulError::is_a_directory(&args.path).into());
    }

    let report = fix_file(&args.path, args.output.as_deref(), args.backup, args.dry_run);
    if args.json {
        print_json(&report)?;
    } else {
        println!("{}", fix_status_line(&report));
    }
    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Fix one file on disk.
///
/// `output` of `None` means in place. All failures, including backup and
/// output write failures, come back as `success: false` reports.
pub fn fix_file(path: &Path, output: Option<&Path>, backup: bool, dry_run: bool) -> FixReport {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), %err, "could not read file");
            return FixReport::failed(path, format!("read failed: {err}"));
        }
    };

    let conversion = match textmend_encoding::fix(&bytes) {
        Ok(conversion) => conversion,
        Err(err) => {
            warn!(path = %path.display(), %err, "fix failed");
            return FixReport::failed(path, err);
        }
    };

    let dest = output.unwrap_or(path).to_path_buf();
    let in_place = output.map_or(true, |o| o == path);
    let encoding = conversion.original_encoding.label();

    if !conversion.changed && in_place {
        // Already UTF-8: leave the file exactly as it is.
        return FixReport {
            path: path.to_path_buf(),
            success: true,
            original_encoding: Some(encoding),
            converted: false,
            output_path: Some(dest),
            backup_created: false,
            backup_path: None,
            dry_run,
            error: None,
        };
    }

    if dry_run {
        return FixReport {
            path: path.to_path_buf(),
            success: true,
            original_encoding: Some(encoding),
            converted: conversion.changed,
            output_path: Some(dest),
            backup_created: false,
            backup_path: None,
            dry_run: true,
            error: None,
        };
    }

    // Backup only guards an in-place overwrite of converted content, and it
    // must be durable before the primary file is touched.
    let backup_path = (backup && in_place && conversion.changed).then(|| backup_path_for(path));
    if let Some(bak) = &backup_path {
        if let Err(err) = write_durably(bak, &bytes) {
            warn!(path = %path.display(), backup = %bak.display(), %err, "backup write failed");
            return FixReport::failed(path, format!("backup write failed, aborting: {err}"));
        }
    }

    if let Err(err) = write_atomic(&dest, &conversion.output) {
        warn!(path = %path.display(), dest = %dest.display(), %err, "output write failed");
        return FixReport::failed(path, format!("output write failed: {err}"));
    }

    if conversion.changed {
        info!(
            path = %path.display(),
            from = encoding,
            backup = backup_path.is_some(),
            "converted to utf-8"
        );
    }

    FixReport {
        path: path.to_path_buf(),
        success: true,
        original_encoding: Some(encoding),
        converted: conversion.changed,
        output_path: Some(dest),
        backup_created: backup_path.is_some(),
        backup_path,
        dry_run: false,
        error: None,
    }
}

/// Sibling backup path: `notes.txt` -> `notes.txt.bak`
fn backup_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{name}.bak"))
}

/// Write and fsync, so the backup survives a crash before the overwrite.
fn write_durably(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Commit output via a tempfile in the destination directory plus rename.
fn write_atomic(dest: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|err| err.error)?;
    Ok(())
}
