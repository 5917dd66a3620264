//! ns-hook — hook trampoline manager for the NativeScript plugin lifecycle.
//!
//! Plugins declare lifecycle hooks in their `package.json`; this crate writes
//! a small trampoline file per hook into the consuming project's hooks
//! directory on install and removes them again on uninstall.

pub mod error;
pub mod hooks;
pub mod locator;
pub mod manifest;
pub mod observability;
pub mod resolver;

pub use error::{HookError, Result};
pub use hooks::install::{postinstall, postinstall_with, InstallReport};
pub use hooks::uninstall::{preuninstall, preuninstall_with, UninstallOutcome};
pub use locator::find_project_dir;
pub use resolver::HooksDirStrategy;
