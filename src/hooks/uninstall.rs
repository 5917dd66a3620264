//! Hook removal — deletes the trampolines a previous install created.
//!
//! Removal is deliberately non-fatal: each deletion is guarded individually
//! and failures are collected into the returned [`UninstallOutcome`] instead
//! of aborting, so a single bad file never strands the remaining cleanup.
//! The caller (the CLI, or an embedding installer) decides whether and how
//! to surface the failures.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::hooks::install_log::{InstallLog, INSTALL_LOG_NAME};
use crate::hooks::trampoline;
use crate::manifest::PackageManifest;
use crate::resolver::HooksDirStrategy;

/// A deletion (or log read) that did not succeed.
#[derive(Debug, Clone)]
pub struct RemovalFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of an uninstall pass.
#[derive(Debug, Clone, Default)]
pub struct UninstallOutcome {
    /// Trampolines actually deleted.
    pub removed: Vec<PathBuf>,
    /// Non-fatal problems encountered along the way.
    pub failures: Vec<RemovalFailure>,
}

impl UninstallOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, path: &Path, reason: impl ToString) {
        warn!(path = %path.display(), reason = %reason.to_string(), "uninstall step failed");
        self.failures.push(RemovalFailure {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        });
    }
}

/// Remove hooks for the package at `pkg_dir` using the project-root
/// strategy. This is the `preuninstall` lifecycle entry point.
pub fn preuninstall(pkg_dir: &Path) -> Result<UninstallOutcome> {
    preuninstall_with(pkg_dir, &HooksDirStrategy::ProjectRoot)
}

/// Remove hooks with an explicit strategy.
///
/// - Project-root strategy: the trampoline paths are re-derived from the
///   package manifest, so [`crate::HookError::NotAPlugin`] propagates. No
///   project root means there is nothing to remove.
/// - Explicit strategy: the install log is consumed instead; the package
///   manifest is never read, so hook declarations that changed since install
///   time cannot strand files. A missing or corrupt log is downgraded to a
///   failure entry.
pub fn preuninstall_with(pkg_dir: &Path, strategy: &HooksDirStrategy) -> Result<UninstallOutcome> {
    if strategy.keeps_install_log() {
        return Ok(uninstall_from_log(pkg_dir));
    }

    let manifest = PackageManifest::load(pkg_dir)?;
    let hooks = manifest.hooks(pkg_dir)?;

    let Some(hooks_dir) = strategy.resolve(pkg_dir) else {
        debug!(pkg_dir = %pkg_dir.display(), "no project root, skipping uninstall");
        return Ok(UninstallOutcome::default());
    };

    let mut outcome = UninstallOutcome::default();
    for hook in hooks {
        let path = trampoline::path_for(&hooks_dir, &manifest, hook);
        remove_trampoline(&path, &mut outcome);
    }
    Ok(outcome)
}

/// Log-driven removal for the explicit strategy. Never fails outright.
fn uninstall_from_log(pkg_dir: &Path) -> UninstallOutcome {
    let mut outcome = UninstallOutcome::default();

    let log = match InstallLog::load(pkg_dir) {
        Ok(log) => log,
        Err(err) => {
            outcome.record_failure(&pkg_dir.join(INSTALL_LOG_NAME), err);
            return outcome;
        }
    };

    for path in log.resolved_paths(pkg_dir) {
        remove_trampoline(&path, &mut outcome);
    }

    // The log is consumed: once processed it no longer reflects reality.
    if let Err(err) = InstallLog::remove(pkg_dir) {
        outcome.record_failure(&pkg_dir.join(INSTALL_LOG_NAME), err);
    }

    outcome
}

/// Delete one trampoline if it exists, recording rather than raising errors.
/// An already-missing file is not a failure (idempotent uninstall).
fn remove_trampoline(path: &Path, outcome: &mut UninstallOutcome) {
    if !path.exists() {
        return;
    }
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(trampoline = %path.display(), "removed trampoline");
            outcome.removed.push(path.to_path_buf());
        }
        Err(err) => outcome.record_failure(path, err),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
