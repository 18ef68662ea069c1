//! Read → transform → write pipeline.
//!
//! All steps run in memory before the single write-back, so an error
//! before the write leaves the file on disk untouched.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use dashpatch_shared::{Document, PatchReport, Result, StepOutcome};

use crate::step::PatchStep;

/// Options for [`apply_to_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Run every step but never write the file.
    pub dry_run: bool,
    /// Skip the write-back when the text came out identical.
    pub skip_unchanged: bool,
}

/// Apply `steps` to `text` in order.
pub fn apply_steps(text: &str, steps: &[PatchStep]) -> (String, Vec<StepOutcome>) {
    let mut current = text.to_string();
    let mut outcomes = Vec::with_capacity(steps.len());

    for step in steps {
        let (next, replacements) = step.apply(&current);
        if replacements == 0 {
            warn!(step = step.name(), "no match, step left text unchanged");
        } else {
            debug!(step = step.name(), replacements, "step applied");
        }
        current = next;
        outcomes.push(StepOutcome {
            step: step.name().to_string(),
            replacements,
        });
    }

    (current, outcomes)
}

/// Apply `steps` to a document already in memory.
pub fn apply_to_document(doc: &mut Document, steps: &[PatchStep]) -> Vec<StepOutcome> {
    let (text, outcomes) = apply_steps(doc.text(), steps);
    doc.set_text(text);
    outcomes
}

/// Patch the file at `path` in place.
#[instrument(skip(steps), fields(step_count = steps.len()))]
pub fn apply_to_file(path: &Path, steps: &[PatchStep], opts: ApplyOptions) -> Result<PatchReport> {
    let mut doc = Document::read(path)?;
    let before = doc.text().to_string();

    let outcomes = apply_to_document(&mut doc, steps);
    let changed = doc.text() != before;

    let written = if opts.dry_run {
        info!("dry run, file not written");
        false
    } else if opts.skip_unchanged && !changed {
        info!("nothing changed, file not written");
        false
    } else {
        doc.write()?;
        true
    };

    let report = PatchReport {
        path: path.to_path_buf(),
        outcomes,
        changed,
        written,
    };

    info!(
        replacements = report.total_replacements(),
        before_bytes = before.len(),
        after_bytes = doc.text().len(),
        changed,
        written,
        "patch run complete"
    );

    Ok(report)
}
