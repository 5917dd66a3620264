//! Package manifest loading — typed view of the `package.json` fields this
//! tool cares about.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HookError, Result};
use crate::locator::PROJECT_MANIFEST;

/// The subset of a package's `package.json` relevant to hook management.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub name: String,

    /// Present only on NativeScript development modules.
    #[serde(default)]
    pub nativescript: Option<NativeScriptSection>,
}

/// The `nativescript` block of the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NativeScriptSection {
    #[serde(default)]
    pub hooks: Vec<HookDescriptor>,
}

/// One declared hook.
#[derive(Debug, Clone, Deserialize)]
pub struct HookDescriptor {
    /// Lifecycle point, used as the subdirectory name (e.g. "before-build").
    #[serde(rename = "type")]
    pub hook_type: String,

    /// Module path of the hook implementation, relative to the package.
    pub script: String,

    /// When set, the trampoline re-exports the script instead of just
    /// requiring it.
    #[serde(default)]
    pub inject: bool,
}

impl PackageManifest {
    /// Load and parse `<pkg_dir>/package.json`.
    pub fn load(pkg_dir: &Path) -> Result<Self> {
        let contents = fs::read_to_string(pkg_dir.join(PROJECT_MANIFEST))?;
        let manifest: PackageManifest = serde_json::from_str(&contents)?;
        Ok(manifest)
    }

    /// The declared hooks, or [`HookError::NotAPlugin`] when the manifest
    /// has no `nativescript` declaration at all.
    ///
    /// A present but empty hooks list is valid and yields an empty slice.
    pub fn hooks(&self, pkg_dir: &Path) -> Result<&[HookDescriptor]> {
        match &self.nativescript {
            Some(section) => Ok(&section.hooks),
            None => Err(HookError::NotAPlugin(pkg_dir.to_path_buf())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
