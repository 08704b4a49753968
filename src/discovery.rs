//! Application discovery
//!
//! Every directory directly under the applications root is an application,
//! named after the directory.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AppdistError, Result};
use crate::error::fs as fs_err;

/// One buildable unit of the monorepo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Display name, lossy when the directory name is not UTF-8
    pub name: String,
    /// Directory name as found on disk; the destination uses it verbatim
    pub dir_name: OsString,
    pub path: PathBuf,
}

impl Application {
    pub fn new(dir_name: OsString, path: PathBuf) -> Self {
        Self {
            name: dir_name.to_string_lossy().into_owned(),
            dir_name,
            path,
        }
    }

    /// `<application path>/<marker>`, whether or not it exists
    pub fn marker_path(&self, marker: &str) -> PathBuf {
        self.path.join(marker)
    }

    /// The marker path when it exists and is a directory
    pub fn build_output(&self, marker: &str) -> Option<PathBuf> {
        let path = self.marker_path(marker);
        path.is_dir().then_some(path)
    }
}

/// List the applications under `apps_root`, sorted by name.
///
/// Plain files in `apps_root` are ignored. Fails when `apps_root` itself
/// cannot be listed, including when it does not exist.
pub fn discover_applications(apps_root: &Path) -> Result<Vec<Application>> {
    let entries = fs::read_dir(apps_root).map_err(|e| AppdistError::ApplicationsRootUnreadable {
        path: apps_root.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut applications = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| fs_err::read_dir_failed(apps_root, &e))?;
        let path = entry.path();

        if !path.is_dir() {
            debug!(path = %path.display(), "ignoring non-directory entry");
            continue;
        }

        applications.push(Application::new(entry.file_name(), path));
    }

    applications.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    Ok(applications)
}
