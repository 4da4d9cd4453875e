//! # fmtwire_core
//!
//! Core setup engine for fmtwire.
//!
//! This crate provides:
//! - The [`patch`] operation that wires the formatter into a project
//! - The [`CommandRunner`] capability used for the optional install step
//! - The distributed configuration templates
//!
//! ## Example
//!
//! ```rust,ignore
//! use fmtwire_core::{patch, PatchOptions, ProcessRunner};
//!
//! let mut runner = ProcessRunner;
//! let outcome = patch(".".as_ref(), &PatchOptions::default(), &mut runner)?;
//! println!("updated {}", outcome.manifest_path.display());
//! ```

mod error;
mod patcher;
mod runner;
mod support;
pub mod templates;

pub use error::SetupError;
pub use patcher::{
    CHECK_COMMAND, CHECK_SCRIPT, FORMATTER_PACKAGE, InstallOutcome, PatchOptions, PatchOutcome,
    WRITE_COMMAND, WRITE_SCRIPT, patch,
};
pub use runner::{CommandRunner, ProcessRunner};
pub use support::{CONFIG_FILE, FALLBACK_CONFIG_PACKAGE, IGNORE_FILE};
