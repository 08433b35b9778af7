//! File-backed high-score store.
//!
//! Scores live in a single JSON array (for example `[12,7,0]`) in a file with a
//! fixed name inside a configurable directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use tui_snake_engine::ScoreStore;

/// File name used inside the scores directory.
pub const HIGH_SCORES_FILE: &str = "snake_high_scores.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `dir/snake_high_scores.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(HIGH_SCORES_FILE),
        }
    }

    /// Store at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<Vec<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no stored high scores");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read high scores from {}", self.path.display()))
            }
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let scores: Vec<u32> = serde_json::from_str(&text)
            .with_context(|| format!("parse high scores in {}", self.path.display()))?;
        Ok(scores)
    }

    fn save(&mut self, scores: &[u32]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }

        let json = serde_json::to_string(scores)?;

        // Write-then-rename: readers never see a truncated file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            bail!("replace {}: {}", self.path.display(), e);
        }

        tracing::debug!(path = %self.path.display(), ?scores, "high scores saved");
        Ok(())
    }
}
