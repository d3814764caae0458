//! Flat report records rendered to operators and machines
//!
//! These are the errors-as-data boundary: a command never lets a per-file
//! failure escape as an error, it emits a `success: false` record instead and
//! keeps going. `--json` prints the records verbatim.

use serde::Serialize;
use std::path::{Path, PathBuf};
use textmend_encoding::{Detection, TextStats};

/// Outcome of detecting a single file.
#[derive(Debug, Clone, Serialize)]
pub struct DetectReport {
    pub path: PathBuf,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_encoding: Option<&'static str>,
    pub is_utf8: bool,
    pub needs_conversion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<TextStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectReport {
    pub fn detected(path: &Path, detection: &Detection) -> Self {
        Self {
            path: path.to_path_buf(),
            success: true,
            detected_encoding: Some(detection.encoding.label()),
            is_utf8: detection.is_utf8,
            needs_conversion: detection.needs_conversion,
            statistics: Some(detection.stats),
            error: None,
        }
    }

    pub fn failed(path: &Path, error: impl ToString) -> Self {
        Self {
            path: path.to_path_buf(),
            success: false,
            detected_encoding: None,
            is_utf8: false,
            needs_conversion: false,
            statistics: None,
            error: Some(error.to_string()),
        }
    }
}

/// Outcome of fixing a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub path: PathBuf,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_encoding: Option<&'static str>,
    /// True when the content needed (and received) re-encoding. A file that
    /// was already plain UTF-8 reports `success: true, converted: false`.
    pub converted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    pub backup_created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_path: Option<PathBuf>,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FixReport {
    pub fn failed(path: &Path, error: impl ToString) -> Self {
        Self {
            path: path.to_path_buf(),
            success: false,
            original_encoding: None,
            converted: false,
            output_path: None,
            backup_created: false,
            backup_path: None,
            dry_run: false,
            error: Some(error.to_string()),
        }
    }
}

/// Totals accumulated over a batch run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BatchSummary {
    pub scanned: usize,
    pub already_utf8: usize,
    pub needs_conversion: usize,
    pub converted: usize,
    pub failed: usize,
}
