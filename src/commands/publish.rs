//! Publish command implementation

use std::path::PathBuf;

use crate::cli::PublishArgs;
use crate::config::PublishConfig;
use crate::error::Result;
use crate::publish::{PublishSummary, publish_build_outputs};
use crate::ui::{ConsoleReporter, PublishReporter, SilentReporter};

/// Run publish command
pub fn run(root: Option<PathBuf>, verbose: bool, args: PublishArgs) -> Result<()> {
    let root = super::resolve_root(root)?;
    let overrides = args.layout.into_overrides(args.dry_run);
    let config = PublishConfig::resolve(&root, overrides)?;

    execute(&config, verbose, args.quiet).map(|_| ())
}

fn execute(config: &PublishConfig, verbose: bool, quiet: bool) -> Result<PublishSummary> {
    let mut reporter: Box<dyn PublishReporter> = if quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::stdout(verbose, config.dry_run))
    };
    publish_build_outputs(config, reporter.as_mut())
}
