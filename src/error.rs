//! Unified error type for ns-hook.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("not a NativeScript development module: {0}")]
    NotAPlugin(PathBuf),

    #[error("hooks directory not configured: {0} is not set")]
    MissingHooksDir(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HookError>;
