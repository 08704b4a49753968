//! Publish configuration
//!
//! Paths are resolved in three layers: command-line flags win over
//! `appdist.yaml` at the monorepo root, which wins over the built-in
//! layout (`apps/<name>/.next` copied to `dist/apps/<name>`).

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppdistError, Result};

/// Optional configuration file at the monorepo root
pub const CONFIG_FILE: &str = "appdist.yaml";

/// Default directory holding one subdirectory per application
pub const DEFAULT_APPS_DIR: &str = "apps";

/// Default distribution directory
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Default build output directory inside each application
pub const DEFAULT_MARKER: &str = ".next";

/// Subdirectory of the distribution root that receives application copies
pub const DIST_APPS_DIR: &str = "apps";

/// Contents of `appdist.yaml`; every key is optional
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub apps_dir: Option<PathBuf>,
    #[serde(default)]
    pub dist_dir: Option<PathBuf>,
    #[serde(default)]
    pub marker: Option<String>,
}

impl FileConfig {
    /// Parse configuration from YAML; an empty document yields the defaults
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppdistError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Load `appdist.yaml` from `root`, returning defaults when it is absent
pub fn load_file_config(root: &Path) -> Result<FileConfig> {
    let path = root.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| AppdistError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    FileConfig::from_yaml(&content, &path)
}

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub apps_dir: Option<PathBuf>,
    pub dist_dir: Option<PathBuf>,
    pub marker: Option<String>,
    pub dry_run: bool,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Monorepo root; relative `apps_dir`/`dist_dir` are joined onto it
    pub root: PathBuf,
    pub apps_dir: PathBuf,
    pub dist_dir: PathBuf,
    /// Name of the build output directory inside each application
    pub marker: String,
    /// Report what would be copied without writing anything
    pub dry_run: bool,
}

impl PublishConfig {
    /// Built-in layout rooted at `root`
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            apps_dir: PathBuf::from(DEFAULT_APPS_DIR),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            marker: DEFAULT_MARKER.to_string(),
            dry_run: false,
        }
    }

    /// Resolve flags, `appdist.yaml` and defaults into one configuration
    pub fn resolve(root: &Path, overrides: Overrides) -> Result<Self> {
        let file = load_file_config(root)?;
        let defaults = Self::with_defaults(root);

        let config = Self {
            root: defaults.root,
            apps_dir: overrides
                .apps_dir
                .or(file.apps_dir)
                .unwrap_or(defaults.apps_dir),
            dist_dir: overrides
                .dist_dir
                .or(file.dist_dir)
                .unwrap_or(defaults.dist_dir),
            marker: overrides.marker.or(file.marker).unwrap_or(defaults.marker),
            dry_run: overrides.dry_run,
        };
        validate_marker(&config.marker)?;

        Ok(config)
    }

    /// Directory whose subdirectories are the applications
    pub fn applications_root(&self) -> PathBuf {
        self.root.join(&self.apps_dir)
    }

    /// Directory receiving every published build output
    pub fn distribution_root(&self) -> PathBuf {
        self.root.join(&self.dist_dir)
    }

    /// `<distribution root>/apps/<application directory name>`
    pub fn destination_for(&self, dir_name: impl AsRef<Path>) -> PathBuf {
        self.distribution_root().join(DIST_APPS_DIR).join(dir_name)
    }
}

/// The marker must name exactly one directory below the application
fn validate_marker(marker: &str) -> Result<()> {
    let mut components = Path::new(marker).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(AppdistError::InvalidMarker {
            marker: marker.to_string(),
        }),
    }
}
