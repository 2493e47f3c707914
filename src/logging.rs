//! File logging.
//!
//! The terminal belongs to the UI, so log lines never go to stdout or
//! stderr. When the user asks for a log file a `tracing` subscriber writes
//! plain text there; otherwise no subscriber is installed and the
//! `tracing` macros throughout the crate cost next to nothing.

use anyhow::{anyhow, Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Sends `tracing` output to the file at `path`.
///
/// `level` is an `EnvFilter` directive such as `info` or `pomoruler=debug`;
/// a set `RUST_LOG` takes precedence.
pub fn init(path: &Path, level: &str) -> Result<()> {
    let file = open_log_file(path)?;
    let filter = build_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level {level:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("timer.log");

        let mut file = open_log_file(&path).expect("create");
        writeln!(file, "first").expect("write");
        drop(file);

        let mut file = open_log_file(&path).expect("reopen");
        writeln!(file, "second").expect("write");
        drop(file);

        let contents = std::fs::read_to_string(&path).expect("read");
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("timer.log");
        let err = open_log_file(&path).expect_err("no parent directory");
        assert!(err.to_string().contains("failed to open log file"));
    }
}
