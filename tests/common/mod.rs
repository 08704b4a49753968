//! Common test utilities for appdist integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// A throwaway monorepo with an `apps/` directory
pub struct TestMonorepo {
    /// Keeps the directory alive for the duration of the test
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the monorepo root
    pub path: PathBuf,
}

impl TestMonorepo {
    /// Create a new monorepo with an empty `apps/` directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("apps")).expect("Failed to create apps directory");
        Self { temp, path }
    }

    /// Create an application directory without any build output
    pub fn create_app(&self, name: &str) -> PathBuf {
        let app_path = self.path.join("apps").join(name);
        std::fs::create_dir_all(&app_path).expect("Failed to create app directory");
        app_path
    }

    /// Write a file relative to the monorepo root
    pub fn write_file(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the monorepo root
    pub fn read_file(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists relative to the monorepo root
    pub fn exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// `web` with a `.next` build (nested and empty directories), `api` without one
    pub fn with_web_and_api(self) -> Self {
        self.write_file("apps/web/.next/index.html", b"<!doctype html><h1>web</h1>");
        self.write_file("apps/web/.next/static/logo.png", &[0x89, b'P', b'N', b'G', 0, 7]);
        self.write_file("apps/web/next.config.js", b"module.exports = {}");
        std::fs::create_dir_all(self.path.join("apps/web/.next/cache/images"))
            .expect("Failed to create empty directory");
        self.create_app("api");
        self.write_file("apps/api/src/server.ts", b"export {}");
        self
    }
}

impl Default for TestMonorepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real appdist binary, rooted at `root`
#[allow(deprecated)]
pub fn appdist_cmd_for_root(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("appdist").expect("Failed to find appdist binary");
    cmd.current_dir(root)
        .env_remove("APPDIST_ROOT")
        .env_remove("RUST_LOG");
    cmd
}

/// Relative paths and file contents below `root`, sorted
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Option<Vec<u8>>)> {
    let mut entries: Vec<_> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.expect("Failed to walk directory");
            let rel = entry
                .path()
                .strip_prefix(root)
                .expect("entry below root")
                .to_path_buf();
            let content = entry
                .file_type()
                .is_file()
                .then(|| std::fs::read(entry.path()).expect("Failed to read file"));
            (rel, content)
        })
        .collect();
    entries.sort();
    entries
}
