use clap::{Args, Parser};
use std::path::PathBuf;

use crate::config::Overrides;

/// Monorepo layout flags shared by publish and list
#[derive(Args, Debug, Default, Clone)]
pub struct LayoutArgs {
    /// Directory holding one subdirectory per application [default: apps]
    #[arg(long, value_name = "DIR")]
    pub apps_dir: Option<PathBuf>,

    /// Distribution directory; outputs land in <DIR>/apps/<name> [default: dist]
    #[arg(long, value_name = "DIR")]
    pub dist_dir: Option<PathBuf>,

    /// Build output directory inside each application [default: .next]
    #[arg(long, value_name = "NAME")]
    pub marker: Option<String>,
}

impl LayoutArgs {
    pub fn into_overrides(self, dry_run: bool) -> Overrides {
        Overrides {
            apps_dir: self.apps_dir,
            dist_dir: self.dist_dir,
            marker: self.marker,
            dry_run,
        }
    }
}

/// Arguments for the publish command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Publish every built application:\n    appdist publish\n\n\
                  Preview without copying:\n    appdist publish --dry-run\n\n\
                  Use a different build directory:\n    appdist publish --marker build")]
pub struct PublishArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Report what would be copied without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not print confirmation lines
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
