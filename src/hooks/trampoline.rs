//! Trampoline rendering — the one-line generated files that forward a hook
//! invocation to the plugin's actual script.

use std::path::{Path, PathBuf};

use crate::manifest::{HookDescriptor, PackageManifest};

/// Platform line terminator appended to every trampoline.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Trampoline filename for a package. Derived from the package name only,
/// so multiple hooks of the same type from one package overwrite each other
/// by design.
pub fn file_name(pkg: &PackageManifest) -> String {
    format!("{}.js", pkg.name)
}

/// Full trampoline path: `<hooks_dir>/<type>/<name>.js`.
pub fn path_for(hooks_dir: &Path, pkg: &PackageManifest, hook: &HookDescriptor) -> PathBuf {
    hooks_dir.join(&hook.hook_type).join(file_name(pkg))
}

/// Render the trampoline source. With `inject` set, the script's exports are
/// forwarded so the build tool can call into it; otherwise requiring the
/// module for its side effects is enough.
pub fn render(pkg_name: &str, hook: &HookDescriptor) -> String {
    let prefix = if hook.inject { "module.exports = " } else { "" };
    format!(
        "{prefix}require(\"{pkg_name}/{script}\");{LINE_ENDING}",
        script = hook.script
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
