//! Patch steps, the student dashboard migration, and the file applicator.
//!
//! - [`step`]: [`PatchStep`] for pattern removal and literal replacement
//! - [`dashboard`]: the built-in step list for the student dashboard page
//! - [`applicator`]: read → transform → write over one file

pub mod applicator;
pub mod dashboard;
pub mod step;

pub use applicator::{ApplyOptions, apply_steps, apply_to_document, apply_to_file};
pub use dashboard::{DEFAULT_TARGET, SUCCESS_MESSAGE, student_dashboard_patch};
pub use step::PatchStep;
