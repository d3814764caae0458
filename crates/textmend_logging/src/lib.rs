//! Shared logging utilities for Textmend binaries.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "textmend=info,textmend_encoding=info";
const MAX_LOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Logging configuration shared by Textmend binaries.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
}

/// Initialize tracing with a log file and stderr output.
pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    let log_dir = ensure_logs_dir().context("Failed to ensure log directory")?;
    let log_file = open_log_file(&log_dir, config.app_name)
        .context("Failed to open log file")?;

    let file_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let console_filter = if config.verbose {
        file_filter.clone()
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_filter(file_filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .init();

    Ok(())
}

/// Get the Textmend home directory: ~/.textmend
pub fn textmend_home() -> PathBuf {
    if let Ok(override_path) = std::env::var("TEXTMEND_HOME") {
        return PathBuf::from(override_path);
    }
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".textmend")
}

/// Get the logs directory: ~/.textmend/logs
pub fn logs_dir() -> PathBuf {
    textmend_home().join("logs")
}

/// Ensure the logs directory exists.
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir();
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory: {}", logs.display()))?;
    Ok(logs)
}

/// Open `<app>.log` for appending, displacing it to `<app>.log.1` once it
/// grows past the size cap.
fn open_log_file(dir: &Path, app_name: &str) -> Result<File> {
    let path = dir.join(format!("{}.log", sanitize_name(app_name)));
    if let Ok(meta) = fs::metadata(&path) {
        if meta.len() > MAX_LOG_FILE_SIZE {
            let rotated = path.with_extension("log.1");
            fs::rename(&path, &rotated)
                .with_context(|| format!("Failed to rotate log file: {}", path.display()))?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_path_separators() {
        assert_eq!(sanitize_name("text/mend v2"), "text_mend_v2");
        assert_eq!(sanitize_name("textmend"), "textmend");
    }

    #[test]
    fn open_log_file_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_path_buf();
        let _file = open_log_file(&path, "testapp").unwrap();
        assert!(path.join("testapp.log").exists());
    }
}
