//! Hook installation — writes one trampoline per declared hook into the
//! resolved hooks directory.
//!
//! Install-time flow: load manifest → resolve hooks directory → write
//! trampolines → (explicit strategy) persist the install log. Individual
//! writes are not guarded; a failure propagates to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::hooks::install_log::InstallLog;
use crate::hooks::trampoline;
use crate::manifest::PackageManifest;
use crate::resolver::HooksDirStrategy;

/// What an install wrote, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Absolute paths of the trampolines created.
    pub written: Vec<PathBuf>,
}

/// Install hooks for the package at `pkg_dir` using the project-root
/// strategy. This is the `postinstall` lifecycle entry point.
pub fn postinstall(pkg_dir: &Path) -> Result<()> {
    postinstall_with(pkg_dir, &HooksDirStrategy::ProjectRoot).map(|_| ())
}

/// Install hooks with an explicit strategy.
///
/// Fails with [`crate::HookError::NotAPlugin`] when the manifest carries no
/// `nativescript` declaration (and creates nothing in that case). When the
/// strategy resolves no hooks directory, the install is a successful no-op.
pub fn postinstall_with(pkg_dir: &Path, strategy: &HooksDirStrategy) -> Result<InstallReport> {
    let manifest = PackageManifest::load(pkg_dir)?;
    let hooks = manifest.hooks(pkg_dir)?;

    let Some(hooks_dir) = strategy.resolve(pkg_dir) else {
        debug!(pkg_dir = %pkg_dir.display(), "no project root, skipping install");
        return Ok(InstallReport::default());
    };

    let mut written = Vec::with_capacity(hooks.len());
    for hook in hooks {
        let hook_dir = hooks_dir.join(&hook.hook_type);
        fs::create_dir_all(&hook_dir)?;

        let path = trampoline::path_for(&hooks_dir, &manifest, hook);
        fs::write(&path, trampoline::render(&manifest.name, hook))?;
        debug!(trampoline = %path.display(), "wrote trampoline");
        written.push(path);
    }

    // The log is written even when empty so uninstall always has a record.
    if strategy.keeps_install_log() {
        InstallLog::from_paths(pkg_dir, &written)?.save(pkg_dir)?;
    }

    Ok(InstallReport { written })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
