use clap::Parser;

use super::LayoutArgs;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List applications:\n    appdist list\n\n\
                  Check for a different build directory:\n    appdist list --marker build")]
pub struct ListArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,
}
