//! List command implementation
//!
//! Shows every application under the applications root and whether its
//! build output directory is present. Nothing is copied.

use console::Style;

use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::config::PublishConfig;
use crate::discovery::{Application, discover_applications};
use crate::error::Result;

/// Run list command
pub fn run(root: Option<PathBuf>, verbose: bool, args: ListArgs) -> Result<()> {
    let root = super::resolve_root(root)?;
    let config = PublishConfig::resolve(&root, args.layout.into_overrides(false))?;

    let applications = discover_applications(&config.applications_root())?;
    if applications.is_empty() {
        println!(
            "No applications in {}",
            config.applications_root().display()
        );
        return Ok(());
    }

    println!("Applications ({}):", applications.len());
    for application in &applications {
        println!("{}", format_entry(&config, application, verbose));
    }

    Ok(())
}

fn format_entry(config: &PublishConfig, application: &Application, verbose: bool) -> String {
    let name = Style::new().bold().yellow().apply_to(&application.name);
    match application.build_output(&config.marker) {
        Some(source) if verbose => format!(
            "  {} {} -> {}",
            name,
            source.display(),
            config.destination_for(&application.dir_name).display()
        ),
        Some(_) => format!("  {} built", name),
        None => format!(
            "  {} {}",
            name,
            Style::new().dim().apply_to(format!("no {} directory", config.marker))
        ),
    }
}
