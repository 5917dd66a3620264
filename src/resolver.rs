//! Hooks-directory resolution — the single seam between the two
//! installation strategies.
//!
//! The original tooling had two divergent variants: one ascended from the
//! package directory to the project root, the other read the hooks directory
//! from an environment variable. Both are expressed here as one enum so the
//! install/uninstall logic is shared. Reading the environment stays at the
//! process boundary (see `main.rs`); the library only ever sees an explicit
//! path.

use std::path::{Path, PathBuf};

use crate::locator::find_project_dir;

/// Subdirectory of the project root that holds hook trampolines.
pub const HOOKS_DIR_NAME: &str = "hooks";

/// How the hooks directory is determined for a given package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HooksDirStrategy {
    /// Ascend from the package directory to the project root and append
    /// [`HOOKS_DIR_NAME`]. Install/uninstall become no-ops when no project
    /// root exists.
    ProjectRoot,

    /// Use the given directory as-is. This strategy also maintains an
    /// install log in the package directory so uninstall does not depend on
    /// the (possibly changed) package manifest.
    Explicit(PathBuf),
}

impl HooksDirStrategy {
    /// Resolve the hooks directory for `pkg_dir`, or `None` when the
    /// project-root walk finds nothing.
    pub fn resolve(&self, pkg_dir: &Path) -> Option<PathBuf> {
        match self {
            HooksDirStrategy::ProjectRoot => {
                find_project_dir(pkg_dir).map(|root| root.join(HOOKS_DIR_NAME))
            }
            HooksDirStrategy::Explicit(dir) => Some(dir.clone()),
        }
    }

    /// Whether installs under this strategy record an install log.
    pub fn keeps_install_log(&self) -> bool {
        matches!(self, HooksDirStrategy::Explicit(_))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
