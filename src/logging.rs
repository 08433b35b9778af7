//! Tracing setup.
//!
//! The game owns the terminal's alternate screen, so log lines never go to
//! stdout/stderr: they are written to a file, and only when one is configured.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber writing plain text to `path`.
///
/// Returns `Ok(false)` without installing anything when `path` is `None`.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}

/// `RUST_LOG`-style directives, falling back to [`DEFAULT_FILTER`].
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn filter_falls_back_to_default() {
        assert_eq!(env_filter(None).to_string(), DEFAULT_FILTER);
        assert_eq!(env_filter(Some("  ")).to_string(), DEFAULT_FILTER);
        assert_eq!(env_filter(Some("tui_snake_engine=debug")).to_string(), "tui_snake_engine=debug");
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("snake.log");
        assert!(init(Some(&path)).unwrap());

        tracing::warn!("hello from the test");
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("logging initialized"));
        assert!(text.contains("hello from the test"));
        assert!(!text.contains('\x1b'));
    }
}
