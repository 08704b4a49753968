//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - publish: Publish command arguments (also used when no command is given)
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod publish;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use publish::{LayoutArgs, PublishArgs};

/// appdist - publish monorepo build outputs
///
/// Copy each application's build output directory into a shared dist folder.
#[derive(Parser, Debug)]
#[command(
    name = "appdist",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Publish per-application build outputs of a monorepo into one dist folder",
    long_about = "appdist looks at every directory under <root>/apps and, when it contains a \
                  build output directory (.next by default), copies that directory to \
                  <root>/dist/apps/<name>. Nothing in dist is ever deleted.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  appdist                          \x1b[90m# Publish from the current directory\x1b[0m\n   \
                  appdist publish --dry-run        \x1b[90m# Show what would be copied\x1b[0m\n   \
                  appdist -r ../repo publish       \x1b[90m# Publish another monorepo\x1b[0m\n   \
                  appdist list                     \x1b[90m# Show which applications are built\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Monorepo root (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "APPDIST_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy build outputs into the distribution directory (default)
    Publish(PublishArgs),

    /// List applications and whether they have a build output
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
