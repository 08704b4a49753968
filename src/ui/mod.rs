//! Presentation of publish results
//!
//! All user-facing output of a publish run goes through the
//! [`PublishReporter`] trait, so the driver never prints directly:
//! - [`ConsoleReporter`] writes one confirmation line per copied application
//! - [`SilentReporter`] discards everything

use std::fmt;
use std::io::{self, Write};

use console::Style;
use tracing::debug;

use crate::publish::{PublishRecord, PublishSummary};

/// Receives the confirmation records of a publish run
pub trait PublishReporter {
    /// Called once for every application whose build output was copied
    fn published(&mut self, record: &PublishRecord);

    /// Called once after the last application has been processed
    fn finished(&mut self, summary: &PublishSummary);
}

/// Human-readable reporter writing to stdout (or any writer)
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    verbose: bool,
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn stdout(verbose: bool, dry_run: bool) -> Self {
        Self::new(io::stdout(), verbose, dry_run)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool, dry_run: bool) -> Self {
        Self {
            out,
            verbose,
            dry_run,
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}") {
            debug!(error = %e, "failed to write report line");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PublishReporter for ConsoleReporter<W> {
    fn published(&mut self, record: &PublishRecord) {
        let verb = if self.dry_run {
            "Would copy"
        } else {
            "Copied"
        };
        self.line(format_args!(
            "{} build output of {} to {}",
            verb,
            Style::new().bold().apply_to(&record.application),
            record.destination.display()
        ));
        if self.verbose {
            self.line(format_args!(
                "  from {}: {} files, {} directories, {}",
                record.source.display(),
                record.stats.files,
                record.stats.directories,
                record.stats.formatted_size()
            ));
        }
    }

    fn finished(&mut self, summary: &PublishSummary) {
        if summary.published.is_empty() {
            self.line(format_args!("No build outputs found."));
            return;
        }
        if self.verbose {
            self.line(format_args!(
                "\n{} published, {} skipped",
                Style::new().green().apply_to(summary.published.len()),
                summary.skipped.len()
            ));
        }
    }
}

/// No-op reporter
#[derive(Default)]
pub struct SilentReporter;

impl PublishReporter for SilentReporter {
    fn published(&mut self, _record: &PublishRecord) {}

    fn finished(&mut self, _summary: &PublishSummary) {}
}
