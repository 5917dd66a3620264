//! Install log — the `_hooks.json` side channel recording which trampolines
//! an install created.
//!
//! The log makes uninstall independent of the package manifest: even if the
//! plugin's hook declarations changed between install and uninstall, exactly
//! the files that were written get removed. Paths are stored relative to the
//! package directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Log filename, written into the package directory.
pub const INSTALL_LOG_NAME: &str = "_hooks.json";

/// Ordered record of trampoline paths created by the most recent install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallLog {
    entries: Vec<String>,
}

impl InstallLog {
    /// Build a log from trampoline paths, relativized against `pkg_dir`.
    ///
    /// Both sides are made absolute first (without touching the filesystem)
    /// so a relative package directory — the CLI's default `.` — still
    /// produces relative entries.
    pub fn from_paths(pkg_dir: &Path, paths: &[PathBuf]) -> Result<Self> {
        let base = std::path::absolute(pkg_dir)?;
        let entries = paths
            .iter()
            .map(|p| {
                let target = std::path::absolute(p)?;
                Ok(relative_to(&base, &target).to_string_lossy().into_owned())
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Read and parse `<pkg_dir>/_hooks.json`.
    pub fn load(pkg_dir: &Path) -> Result<Self> {
        let contents = fs::read_to_string(pkg_dir.join(INSTALL_LOG_NAME))?;
        let entries: Vec<String> = serde_json::from_str(&contents)?;
        Ok(Self { entries })
    }

    /// Write the log into `pkg_dir`, overwriting any prior log. An empty
    /// log is still written so uninstall always finds a consistent record.
    pub fn save(&self, pkg_dir: &Path) -> Result<()> {
        let path = pkg_dir.join(INSTALL_LOG_NAME);
        fs::write(&path, serde_json::to_string(&self.entries)?)?;
        debug!(log = %path.display(), entries = self.entries.len(), "wrote install log");
        Ok(())
    }

    /// Delete the log file if present.
    pub fn remove(pkg_dir: &Path) -> Result<()> {
        let path = pkg_dir.join(INSTALL_LOG_NAME);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// The recorded paths, resolved against `pkg_dir`. Entries routinely
    /// climb out of the package directory (the hooks dir lives elsewhere),
    /// so the joined paths are normalized rather than left with `..`
    /// segments in the middle.
    pub fn resolved_paths(&self, pkg_dir: &Path) -> Vec<PathBuf> {
        self.entries
            .iter()
            .map(|e| normalize(&pkg_dir.join(e)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Lexically drop `.` components and resolve `..` against the preceding
/// component. No filesystem access, no symlink resolution.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for part in path.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            part => out.push(part),
        }
    }
    out
}

/// Express `target` relative to `base` using `..` segments where the two
/// diverge. Both paths must be either absolute or rooted the same way.
fn relative_to(base: &Path, target: &Path) -> PathBuf {
    let base_parts: Vec<Component> = base.components().collect();
    let target_parts: Vec<Component> = target.components().collect();

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &target_parts[common..] {
        rel.push(part.as_os_str());
    }
    rel
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
