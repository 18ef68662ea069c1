//! Text transformation steps.
//!
//! Every step works on raw text, not on a parsed DOM. A step that finds
//! nothing to rewrite returns its input unchanged.

use regex::Regex;

use dashpatch_shared::{DashpatchError, Result};

/// One transformation applied to the document text.
#[derive(Debug, Clone)]
pub enum PatchStep {
    /// Delete every match of `pattern`.
    RemovePattern { name: String, pattern: Regex },
    /// Replace every exact occurrence of `from` with `to`.
    ReplaceLiteral {
        name: String,
        from: String,
        to: String,
    },
}

impl PatchStep {
    /// Compile a removal step. The pattern uses `regex` syntax; inline flags
    /// such as `(?s)` are the way to make `.` cross newlines.
    pub fn remove_pattern(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let name = name.into();
        let pattern =
            Regex::new(pattern).map_err(|e| DashpatchError::pattern(&name, e.to_string()))?;
        Ok(Self::RemovePattern { name, pattern })
    }

    pub fn replace_literal(
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::ReplaceLiteral {
            name: name.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::RemovePattern { name, .. } | Self::ReplaceLiteral { name, .. } => name,
        }
    }

    /// Apply the step, returning the new text and how many spans were rewritten.
    pub fn apply(&self, text: &str) -> (String, usize) {
        match self {
            Self::RemovePattern { pattern, .. } => {
                let count = pattern.find_iter(text).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                (pattern.replace_all(text, "").into_owned(), count)
            }
            Self::ReplaceLiteral { from, to, .. } => {
                // str::matches on "" would hit every char boundary
                if from.is_empty() {
                    return (text.to_string(), 0);
                }
                let count = text.matches(from.as_str()).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                (text.replace(from.as_str(), to), count)
            }
        }
    }
}
