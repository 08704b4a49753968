//! appdist - monorepo build output publisher
//!
//! Copies the build output directory of every application in a monorepo
//! (`apps/<name>/.next` by default) into a single distribution folder
//! (`dist/apps/<name>`), ready to be packaged or deployed as one unit.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod copy;
mod discovery;
mod error;
mod logging;
mod publish;
mod ui;

use cli::{Cli, Commands, PublishArgs};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        None => commands::publish::run(cli.root, cli.verbose, PublishArgs::default()),
        Some(Commands::Publish(args)) => commands::publish::run(cli.root, cli.verbose, args),
        Some(Commands::List(args)) => commands::list::run(cli.root, cli.verbose, args),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
