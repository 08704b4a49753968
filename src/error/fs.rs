//! File system error constructors

use std::path::Path;

use super::AppdistError;

pub fn read_dir_failed(path: &Path, e: &std::io::Error) -> AppdistError {
    AppdistError::ReadDirFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub fn create_dir_failed(path: &Path, e: &std::io::Error) -> AppdistError {
    AppdistError::CreateDirFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub fn copy_failed(source: &Path, target: &Path, e: &std::io::Error) -> AppdistError {
    AppdistError::CopyFailed {
        source_path: source.display().to_string(),
        target_path: target.display().to_string(),
        reason: e.to_string(),
    }
}

/// Converts a traversal error, keeping the path walkdir was visiting
pub fn walk_failed(root: &Path, e: &walkdir::Error) -> AppdistError {
    let path = e.path().unwrap_or(root);
    if let Some(ancestor) = e.loop_ancestor() {
        return AppdistError::ReadDirFailed {
            path: path.display().to_string(),
            reason: format!("symlink cycle back to {}", ancestor.display()),
        };
    }
    AppdistError::ReadDirFailed {
        path: path.display().to_string(),
        reason: e
            .io_error()
            .map_or_else(|| e.to_string(), std::string::ToString::to_string),
    }
}
