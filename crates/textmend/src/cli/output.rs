//! Output formatting utilities for CLI commands
//!
//! Human output is one status line per file, or a table for batch runs;
//! machine output is the serialized report records.

use crate::cli::report::{DetectReport, FixReport};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;

/// Print any report record as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line operator summary of a detection.
pub fn detect_status_line(report: &DetectReport) -> String {
    if !report.success {
        return format!(
            "{}: FAILED ({})",
            report.path.display(),
            report.error.as_deref().unwrap_or("unknown error")
        );
    }
    let encoding = report.detected_encoding.unwrap_or("?");
    let verdict = if report.needs_conversion {
        "needs conversion"
    } else {
        "ok"
    };
    match report.statistics {
        Some(stats) => format!(
            "{}: {} ({}) - {} chars, {} lines, {} non-ascii",
            report.path.display(),
            encoding,
            verdict,
            stats.total_chars,
            stats.lines,
            stats.accented_chars
        ),
        None => format!("{}: {} ({})", report.path.display(), encoding, verdict),
    }
}

/// One-line operator summary of a fix.
pub fn fix_status_line(report: &FixReport) -> String {
    if !report.success {
        return format!(
            "{}: FAILED ({})",
            report.path.display(),
            report.error.as_deref().unwrap_or("unknown error")
        );
    }
    if !report.converted {
        return format!("{}: already utf-8, left untouched", report.path.display());
    }
    let mut line = format!(
        "{}: {} -> utf-8",
        report.path.display(),
        report.original_encoding.unwrap_or("?")
    );
    if report.dry_run {
        line.push_str(" (dry run, nothing written)");
        return line;
    }
    if let Some(backup) = &report.backup_path {
        line.push_str(&format!(" (backup: {})", backup.display()));
    }
    line
}

/// Print a table with the shared preset.
pub fn print_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.into_iter().map(Cell::new).collect::<Vec<_>>());
    for row in rows {
        table.add_row(row);
    }
    println!("{table}");
}
