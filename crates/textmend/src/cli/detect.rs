//! Detect command - report the likely encoding of a single file

use crate::cli::error::HelpfulError;
use crate::cli::output::{detect_status_line, print_json};
use crate::cli::report::DetectReport;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};

/// Arguments for the detect command
#[derive(Debug)]
pub struct DetectArgs {
    pub path: PathBuf,
    pub json: bool,
}

/// Execute the detect command
pub fn run(args: DetectArgs) -> anyhow::Result<ExitCode> {
    if args.path.is_dir() {
        return Err(HelpfulError::is_a_directory(&args.path).into());
    }

    let report = detect_file(&args.path);
    if args.json {
        print_json(&report)?;
    } else {
        println!("{}", detect_status_line(&report));
    }
    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read one file and run detection on its content.
///
/// Read and detection failures both come back as `success: false` reports so
/// batch callers can keep going.
pub fn detect_file(path: &Path) -> DetectReport {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), %err, "could not read file");
            return DetectReport::failed(path, format!("read failed: {err}"));
        }
    };

    match textmend_encoding::detect(&bytes) {
        Ok(detection) => {
            debug!(
                path = %path.display(),
                encoding = %detection.encoding,
                needs_conversion = detection.needs_conversion,
                "detection complete"
            );
            DetectReport::detected(path, &detection)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "detection failed");
            DetectReport::failed(path, err)
        }
    }
}
