//! Shared types, error model, and configuration for dashpatch.
//!
//! This crate is the foundation depended on by the other dashpatch crates.
//! It provides:
//! - [`DashpatchError`]: the unified error type
//! - Domain types ([`Document`], [`StepOutcome`], [`PatchReport`])
//! - Configuration ([`AppConfig`], [`TargetConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DEFAULT_TARGET_PATH, TargetConfig, config_dir, config_file_path, load_config,
    load_config_from,
};
pub use error::{DashpatchError, Result};
pub use types::{Document, PatchReport, StepOutcome};
