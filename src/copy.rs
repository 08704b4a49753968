//! Recursive tree copy
//!
//! [`copy_tree`] mirrors a source path onto a destination path:
//! - a missing source is a no-op,
//! - a directory is recreated (with ancestors) and its children copied,
//! - a regular file is copied byte for byte, overwriting the target.
//!
//! Traversal is iterative through `walkdir` and follows symlinks, so a link
//! to a directory is copied as a directory. Dangling links are skipped the
//! same way a missing source is. Nothing in the destination is ever removed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;
use crate::error::fs as fs_err;

/// Counters accumulated while copying (or planning) one tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    /// Regular files copied
    pub files: usize,
    /// Directories created or already present
    pub directories: usize,
    /// Total bytes of copied files
    pub bytes: u64,
}

impl CopyStats {
    /// Format byte count as human-readable string
    #[allow(clippy::cast_precision_loss)]
    pub fn formatted_size(&self) -> String {
        let size = self.bytes as f64;
        if size < 1024.0 {
            format!("{} B", self.bytes)
        } else if size < 1024.0 * 1024.0 {
            format!("{:.1} KB", size / 1024.0)
        } else if size < 1024.0 * 1024.0 * 1024.0 {
            format!("{:.1} MB", size / (1024.0 * 1024.0))
        } else {
            format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
        }
    }
}

/// Copy `source` to `destination`, recursing into directories.
///
/// Any filesystem failure aborts the copy and is returned as is; files
/// copied before the failure stay in place.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<CopyStats> {
    walk_tree(source, Some(destination))
}

/// Count what [`copy_tree`] would copy without touching the destination
pub fn plan_tree(source: &Path) -> Result<CopyStats> {
    walk_tree(source, None)
}

fn walk_tree(source: &Path, destination: Option<&Path>) -> Result<CopyStats> {
    let mut stats = CopyStats::default();

    if !source.exists() {
        debug!(source = %source.display(), "source does not exist, nothing to copy");
        return Ok(stats);
    }

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling_link(&e) => {
                debug!(path = ?e.path(), "skipping dangling symlink");
                continue;
            }
            Err(e) => return Err(fs_err::walk_failed(source, &e)),
        };

        let target = destination.map(|dest| target_path(source, entry.path(), dest));

        if entry.file_type().is_dir() {
            if let Some(target) = &target {
                fs::create_dir_all(target).map_err(|e| fs_err::create_dir_failed(target, &e))?;
                debug!(dir = %target.display(), "created directory");
            }
            stats.directories += 1;
            continue;
        }

        let bytes = match &target {
            Some(target) => {
                let bytes = fs::copy(entry.path(), target)
                    .map_err(|e| fs_err::copy_failed(entry.path(), target, &e))?;
                debug!(
                    from = %entry.path().display(),
                    to = %target.display(),
                    bytes,
                    "copied file"
                );
                bytes
            }
            None => entry
                .metadata()
                .map_err(|e| fs_err::walk_failed(source, &e))?
                .len(),
        };
        stats.files += 1;
        stats.bytes += bytes;
    }

    Ok(stats)
}

/// Map a path inside `source` onto the same relative path under `destination`
fn target_path(source: &Path, path: &Path, destination: &Path) -> PathBuf {
    match path.strip_prefix(source) {
        Ok(relative) if !relative.as_os_str().is_empty() => destination.join(relative),
        _ => destination.to_path_buf(),
    }
}

fn is_dangling_link(e: &walkdir::Error) -> bool {
    let not_found = e
        .io_error()
        .is_some_and(|io| io.kind() == ErrorKind::NotFound);
    not_found
        && e.path()
            .and_then(|p| fs::symlink_metadata(p).ok())
            .is_some_and(|m| m.file_type().is_symlink())
}
