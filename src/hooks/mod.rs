//! Hooks — trampoline generation, installation, and removal.

pub mod install;
pub mod install_log;
pub mod trampoline;
pub mod uninstall;
