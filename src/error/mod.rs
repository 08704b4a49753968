//! Error types and handling for appdist
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//!
//! Helpers in [`fs`] build the file system variants from an `std::io::Error`
//! so call sites only have to name the path they were working on.

pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appdist operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppdistError {
    // Application discovery errors
    #[error("Failed to read applications directory: {path}: {reason}")]
    #[diagnostic(
        code(appdist::apps::root_unreadable),
        help("Run appdist from the monorepo root or pass --root and --apps-dir")
    )]
    ApplicationsRootUnreadable { path: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(appdist::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(appdist::config::parse_failed),
        help("Valid keys are apps_dir, dist_dir and marker")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid build marker directory name: '{marker}'")]
    #[diagnostic(
        code(appdist::config::invalid_marker),
        help("The marker must be a single directory name such as .next or build")
    )]
    InvalidMarker { marker: String },

    // File system errors
    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(code(appdist::fs::read_dir_failed))]
    ReadDirFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(appdist::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to copy file: {source_path} -> {target_path}: {reason}")]
    #[diagnostic(code(appdist::fs::copy_failed))]
    CopyFailed {
        source_path: String,
        target_path: String,
        reason: String,
    },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(appdist::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(appdist::fs::io_error))]
    IoError { message: String },
}

/// Result type alias using AppdistError
pub type Result<T> = std::result::Result<T, AppdistError>;
