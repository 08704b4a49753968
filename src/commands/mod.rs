//! Command implementations for the appdist CLI

pub mod completions;
pub mod list;
pub mod publish;

use std::path::{Path, PathBuf};

use crate::error::{AppdistError, Result};

/// Monorepo root from the CLI argument or the current directory
///
/// The path is canonicalized when it exists so confirmation lines show
/// absolute destinations; a missing root is passed through unchanged and
/// fails later when the applications directory is listed.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| AppdistError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };
    Ok(canonical_or_self(&root))
}

fn canonical_or_self(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
