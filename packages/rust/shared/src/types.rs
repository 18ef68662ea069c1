//! Core domain types: the document being patched and the run report.

use std::path::{Path, PathBuf};

use crate::error::{DashpatchError, Result};

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// Full text of one file, tied to the path it was read from.
///
/// Created by [`Document::read`], mutated by each patch step in turn, and
/// written back to the same path by [`Document::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Build a document from text already in memory.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read the whole file as UTF-8.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DashpatchError::io(path, e))?;
        Ok(Self::new(path, text))
    }

    /// Overwrite the source file with the current text.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.text).map_err(|e| DashpatchError::io(&self.path, e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// What a single step did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Step name, e.g. `remove-update-token-button`.
    pub step: String,
    /// Number of occurrences rewritten.
    pub replacements: usize,
}

impl StepOutcome {
    pub fn matched(&self) -> bool {
        self.replacements > 0
    }
}

/// Summary of one applicator run over a file.
#[derive(Debug, Clone)]
pub struct PatchReport {
    /// File that was patched.
    pub path: PathBuf,
    /// Per-step outcomes, in application order.
    pub outcomes: Vec<StepOutcome>,
    /// Whether the final text differs from what was read.
    pub changed: bool,
    /// Whether the file was written back.
    pub written: bool,
}

impl PatchReport {
    /// Total occurrences rewritten across all steps.
    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().map(|o| o.replacements).sum()
    }

    /// Names of steps that found nothing to rewrite.
    pub fn unmatched_steps(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.matched())
            .map(|o| o.step.as_str())
            .collect()
    }
}
