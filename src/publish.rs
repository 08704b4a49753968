//! Publishing of per-application build outputs
//!
//! A single linear pass: discover applications, and for each one that has
//! a build marker directory copy that directory to
//! `<distribution root>/apps/<name>`. The first error ends the run; nothing
//! already copied is rolled back.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::PublishConfig;
use crate::copy::{self, CopyStats};
use crate::discovery::discover_applications;
use crate::error::Result;
use crate::ui::PublishReporter;

/// Confirmation record for one published application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRecord {
    pub application: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub stats: CopyStats,
}

/// Outcome of a completed run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    pub published: Vec<PublishRecord>,
    /// Applications without a build marker directory
    pub skipped: Vec<String>,
}

/// Copy every application's build output into the distribution root.
///
/// Applications lacking the marker directory are skipped silently. In
/// dry-run mode the records are produced from a traversal of the source
/// and the distribution root is left alone.
pub fn publish_build_outputs(
    config: &PublishConfig,
    reporter: &mut dyn PublishReporter,
) -> Result<PublishSummary> {
    let apps_root = config.applications_root();
    let applications = discover_applications(&apps_root)?;
    debug!(
        apps_root = %apps_root.display(),
        count = applications.len(),
        "discovered applications"
    );

    let mut summary = PublishSummary::default();

    for application in applications {
        let Some(source) = application.build_output(&config.marker) else {
            debug!(
                application = %application.name,
                marker = %config.marker,
                "no build output, skipping"
            );
            summary.skipped.push(application.name);
            continue;
        };

        let destination = config.destination_for(&application.dir_name);
        let stats = if config.dry_run {
            copy::plan_tree(&source)?
        } else {
            copy::copy_tree(&source, &destination)?
        };
        info!(
            application = %application.name,
            destination = %destination.display(),
            files = stats.files,
            dry_run = config.dry_run,
            "published build output"
        );

        let record = PublishRecord {
            application: application.name,
            source,
            destination,
            stats,
        };
        reporter.published(&record);
        summary.published.push(record);
    }

    reporter.finished(&summary);
    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AppdistError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use walkdir::WalkDir;

    #[derive(Default)]
    struct CollectingReporter {
        lines: Vec<String>,
        finished: usize,
    }

    impl PublishReporter for CollectingReporter {
        fn published(&mut self, record: &PublishRecord) {
            self.lines.push(format!(
                "{} -> {}",
                record.application,
                record.destination.display()
            ));
        }

        fn finished(&mut self, _summary: &PublishSummary) {
            self.finished += 1;
        }
    }

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// `web` has a build, `api` does not
    fn monorepo() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "apps/web/.next/index.html", b"<h1>web</h1>");
        write(temp.path(), "apps/web/.next/static/logo.png", &[1, 2, 3, 0, 255]);
        write(temp.path(), "apps/web/package.json", b"{}");
        write(temp.path(), "apps/api/src/main.ts", b"export {}");
        temp
    }

    /// Relative path and contents of every entry below `root`
    fn snapshot(root: &Path) -> Vec<(PathBuf, Option<Vec<u8>>)> {
        let mut entries: Vec<_> = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .map(|e| {
                let e = e.unwrap();
                let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
                let content = e.file_type().is_file().then(|| fs::read(e.path()).unwrap());
                (rel, content)
            })
            .collect();
        entries.sort();
        entries
    }

    #[test]
    fn test_publish_copies_only_built_applications() {
        let repo = monorepo();
        let config = PublishConfig::with_defaults(repo.path());
        let mut reporter = CollectingReporter::default();

        let summary = publish_build_outputs(&config, &mut reporter).unwrap();

        let dist = repo.path().join("dist/apps");
        assert_eq!(
            fs::read_to_string(dist.join("web/index.html")).unwrap(),
            "<h1>web</h1>"
        );
        assert_eq!(
            fs::read(dist.join("web/static/logo.png")).unwrap(),
            vec![1, 2, 3, 0, 255]
        );
        assert!(!dist.join("web/package.json").exists());
        assert!(!dist.join("api").exists());

        assert_eq!(reporter.lines.len(), 1);
        assert!(reporter.lines[0].starts_with("web -> "));
        assert_eq!(reporter.finished, 1);
        assert_eq!(summary.skipped, ["api"]);
        assert_eq!(summary.published[0].stats.files, 2);
    }

    #[test]
    fn test_publish_destination_mirrors_marker_tree() {
        let repo = monorepo();
        fs::create_dir_all(repo.path().join("apps/web/.next/cache/empty")).unwrap();
        let config = PublishConfig::with_defaults(repo.path());

        publish_build_outputs(&config, &mut CollectingReporter::default()).unwrap();

        assert_eq!(
            snapshot(&repo.path().join("apps/web/.next")),
            snapshot(&repo.path().join("dist/apps/web"))
        );
    }

    #[test]
    fn test_publish_twice_is_idempotent() {
        let repo = monorepo();
        let config = PublishConfig::with_defaults(repo.path());

        publish_build_outputs(&config, &mut CollectingReporter::default()).unwrap();
        let first = snapshot(&repo.path().join("dist"));
        publish_build_outputs(&config, &mut CollectingReporter::default()).unwrap();

        assert_eq!(first, snapshot(&repo.path().join("dist")));
    }

    #[test]
    fn test_publish_keeps_unrelated_destination_files() {
        let repo = monorepo();
        write(repo.path(), "dist/apps/web/old-chunk.js", b"old");
        write(repo.path(), "dist/apps/api/leftover.txt", b"leftover");
        let config = PublishConfig::with_defaults(repo.path());

        publish_build_outputs(&config, &mut CollectingReporter::default()).unwrap();

        let dist = repo.path().join("dist/apps");
        assert_eq!(fs::read_to_string(dist.join("web/old-chunk.js")).unwrap(), "old");
        assert_eq!(
            fs::read_to_string(dist.join("api/leftover.txt")).unwrap(),
            "leftover"
        );
        assert!(dist.join("web/index.html").is_file());
    }

    #[test]
    fn test_publish_overwrites_stale_files() {
        let repo = monorepo();
        write(repo.path(), "dist/apps/web/index.html", b"stale");
        let config = PublishConfig::with_defaults(repo.path());

        publish_build_outputs(&config, &mut CollectingReporter::default()).unwrap();

        assert_eq!(
            fs::read_to_string(repo.path().join("dist/apps/web/index.html")).unwrap(),
            "<h1>web</h1>"
        );
    }

    #[test]
    fn test_publish_dry_run_writes_nothing() {
        let repo = monorepo();
        let mut config = PublishConfig::with_defaults(repo.path());
        config.dry_run = true;
        let mut reporter = CollectingReporter::default();

        let summary = publish_build_outputs(&config, &mut reporter).unwrap();

        assert!(!repo.path().join("dist").exists());
        assert_eq!(reporter.lines.len(), 1);
        assert_eq!(summary.published[0].stats.files, 2);
    }

    #[test]
    fn test_publish_missing_apps_root_fails() {
        let temp = TempDir::new().unwrap();
        let config = PublishConfig::with_defaults(temp.path());
        let mut reporter = CollectingReporter::default();

        let result = publish_build_outputs(&config, &mut reporter);

        assert!(matches!(
            result,
            Err(AppdistError::ApplicationsRootUnreadable { .. })
        ));
        assert_eq!(reporter.finished, 0);
    }

    #[test]
    fn test_publish_marker_file_is_not_a_build() {
        let repo = monorepo();
        write(repo.path(), "apps/api/.next", b"not a directory");
        let config = PublishConfig::with_defaults(repo.path());

        let summary = publish_build_outputs(&config, &mut CollectingReporter::default()).unwrap();

        assert_eq!(summary.skipped, ["api"]);
        assert!(!repo.path().join("dist/apps/api").exists());
    }

    #[test]
    fn test_publish_custom_layout() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "packages/site/build/app.js", b"app");
        let mut config = PublishConfig::with_defaults(temp.path());
        config.apps_dir = PathBuf::from("packages");
        config.dist_dir = PathBuf::from("out");
        config.marker = "build".to_string();

        publish_build_outputs(&config, &mut CollectingReporter::default()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("out/apps/site/app.js")).unwrap(),
            "app"
        );
    }

    #[test]
    fn test_publish_stops_at_first_copy_error() {
        let repo = monorepo();
        // A file where the distribution root should be makes every copy fail
        write(repo.path(), "dist", b"in the way");
        let config = PublishConfig::with_defaults(repo.path());
        let mut reporter = CollectingReporter::default();

        let result = publish_build_outputs(&config, &mut reporter);

        assert!(matches!(result, Err(AppdistError::CreateDirFailed { .. })));
        assert!(reporter.lines.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_publish_non_utf8_names_get_distinct_destinations() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let apps = temp.path().join("apps");
        for (raw, content) in [(&b"app\xff"[..], b"ff"), (&b"app\xfe"[..], b"fe")] {
            let marker = apps.join(OsStr::from_bytes(raw)).join(".next");
            fs::create_dir_all(&marker).unwrap();
            fs::write(marker.join("index.html"), content).unwrap();
        }
        let config = PublishConfig::with_defaults(temp.path());

        let summary = publish_build_outputs(&config, &mut CollectingReporter::default()).unwrap();

        let destinations: Vec<_> = summary.published.iter().map(|r| &r.destination).collect();
        assert_eq!(destinations.len(), 2);
        assert_ne!(destinations[0], destinations[1]);

        let dist = temp.path().join("dist/apps");
        assert_eq!(fs::read_dir(&dist).unwrap().count(), 2);
        assert_eq!(
            fs::read(dist.join(OsStr::from_bytes(b"app\xff")).join("index.html")).unwrap(),
            b"ff"
        );
        assert_eq!(
            fs::read(dist.join(OsStr::from_bytes(b"app\xfe")).join("index.html")).unwrap(),
            b"fe"
        );
    }
}
