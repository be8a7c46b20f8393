use std::{
    fs::OpenOptions,
    io::Write as _,
    path::{Path, PathBuf},
};

use crate::foundation::error::{JourneyError, JourneyResult};

/// Append-only plain-text run log (`Saved <name>` / `Failed to save <name>: <message>`).
///
/// Never truncated or rotated; every run appends one line per item.
#[derive(Clone, Debug)]
pub struct DebugLog {
    path: PathBuf,
}

impl DebugLog {
    /// Log writing to `path` (created on first append).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a successful item.
    pub fn saved(&self, name: &str) -> JourneyResult<()> {
        self.append(&format!("Saved {name}"))
    }

    /// Record a failed item.
    pub fn failed(&self, name: &str, message: &str) -> JourneyResult<()> {
        self.append(&format!("Failed to save {name}: {message}"))
    }

    fn append(&self, line: &str) -> JourneyResult<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| JourneyError::output_write(&self.path, e))?;
        writeln!(f, "{line}").map_err(|e| JourneyError::output_write(&self.path, e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/debug_log.rs"]
mod tests;
