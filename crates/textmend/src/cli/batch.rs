//! Batch command - drive detect/fix over a directory tree
//!
//! Files are processed independently: one undecodable or unreadable file adds
//! a failed record and the walk continues. Results are ordered by path for
//! stable output.

use crate::cli::detect::detect_file;
use crate::cli::error::HelpfulError;
use crate::cli::fix::fix_file;
use crate::cli::output::{print_json, print_table};
use crate::cli::report::{BatchSummary, DetectReport, FixReport};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use walkdir::WalkDir;

/// Arguments for the batch command
#[derive(Debug)]
pub struct BatchArgs {
    pub path: PathBuf,
    pub types: Vec<String>,
    pub depth: Option<usize>,
    pub fix: bool,
    pub backup: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// One per-file record in a batch run.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchRecord {
    Detect(DetectReport),
    Fix(FixReport),
}

impl BatchRecord {
    fn success(&self) -> bool {
        match self {
            BatchRecord::Detect(r) => r.success,
            BatchRecord::Fix(r) => r.success,
        }
    }

    fn encoding(&self) -> &str {
        match self {
            BatchRecord::Detect(r) => r.detected_encoding.unwrap_or("-"),
            BatchRecord::Fix(r) => r.original_encoding.unwrap_or("-"),
        }
    }

    fn path(&self) -> &PathBuf {
        match self {
            BatchRecord::Detect(r) => &r.path,
            BatchRecord::Fix(r) => &r.path,
        }
    }

    fn status(&self) -> String {
        match self {
            BatchRecord::Detect(r) if !r.success => {
                format!("failed: {}", r.error.as_deref().unwrap_or("unknown"))
            }
            BatchRecord::Detect(r) if r.needs_conversion => "needs conversion".to_string(),
            BatchRecord::Detect(_) => "ok".to_string(),
            BatchRecord::Fix(r) if !r.success => {
                format!("failed: {}", r.error.as_deref().unwrap_or("unknown"))
            }
            BatchRecord::Fix(r) if r.converted && r.dry_run => "would convert".to_string(),
            BatchRecord::Fix(r) if r.converted => "converted".to_string(),
            BatchRecord::Fix(_) => "ok".to_string(),
        }
    }
}

/// Complete batch result
#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub root: PathBuf,
    pub fixed: bool,
    pub files: Vec<BatchRecord>,
    pub summary: BatchSummary,
}

/// Execute the batch command
pub fn run(args: BatchArgs) -> anyhow::Result<ExitCode> {
    if !args.path.exists() {
        return Err(HelpfulError::file_not_found(&args.path).into());
    }
    if !args.path.is_dir() {
        return Err(HelpfulError::not_a_directory(&args.path).into());
    }

    let result = execute(&args);

    if args.json {
        print_json(&result)?;
    } else {
        output_table(&result);
    }

    Ok(if result.summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Walk the tree and process every matching file, never aborting on one.
pub fn execute(args: &BatchArgs) -> BatchResult {
    let type_filters: Vec<String> = args.types.iter().map(|t| t.to_lowercase()).collect();

    let mut walker = WalkDir::new(&args.path);
    if let Some(depth) = args.depth {
        walker = walker.max_depth(depth);
    }

    let mut paths: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            if type_filters.is_empty() {
                return true;
            }
            let ext = p
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();
            type_filters.contains(&ext)
        })
        .collect();
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    let mut summary = BatchSummary::default();

    for path in paths {
        let record = if args.fix {
            BatchRecord::Fix(fix_file(&path, None, args.backup, args.dry_run))
        } else {
            BatchRecord::Detect(detect_file(&path))
        };
        tally(&mut summary, &record);
        files.push(record);
    }

    info!(
        root = %args.path.display(),
        scanned = summary.scanned,
        converted = summary.converted,
        failed = summary.failed,
        "batch run complete"
    );

    BatchResult {
        root: args.path.clone(),
        fixed: args.fix,
        files,
        summary,
    }
}

fn tally(summary: &mut BatchSummary, record: &BatchRecord) {
    summary.scanned += 1;
    if !record.success() {
        summary.failed += 1;
        return;
    }
    match record {
        BatchRecord::Detect(r) => {
            if r.needs_conversion {
                summary.needs_conversion += 1;
            } else {
                summary.already_utf8 += 1;
            }
        }
        BatchRecord::Fix(r) => {
            if r.converted {
                summary.needs_conversion += 1;
                if !r.dry_run {
                    summary.converted += 1;
                }
            } else {
                summary.already_utf8 += 1;
            }
        }
    }
}

fn output_table(result: &BatchResult) {
    let rows: Vec<Vec<String>> = result
        .files
        .iter()
        .map(|record| {
            vec![
                record.path().display().to_string(),
                record.encoding().to_string(),
                record.status(),
            ]
        })
        .collect();
    print_table(vec!["File", "Encoding", "Status"], rows);

    let s = &result.summary;
    println!();
    println!(
        "{} scanned, {} already utf-8, {} needing conversion, {} converted, {} failed",
        s.scanned, s.already_utf8, s.needs_conversion, s.converted, s.failed
    );
}
