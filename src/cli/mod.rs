//! CLI module for the elma compiler
//!
//! This module provides the command-line interface for the compiler.
//!
//! ```text
//! elma <MODULE> [--lib <DIR>] [--out <FILE>] [--marker <TEXT>] [--self-ref <TEXT>] [--stdout]
//! ```
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::CompileConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a library diagnostic (code, help and source chain included).
    pub fn diagnostic(err: impl miette::Diagnostic + Send + Sync + 'static) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Compile a Go-subset module to JavaScript
#[derive(Parser, Debug)]
#[command(name = "elma")]
#[command(version = VERSION)]
#[command(about = "Compile a Go-subset module to JavaScript", long_about = None)]
pub struct Cli {
    /// Directory holding the root module's `*.ast.json` files
    #[arg(value_name = "MODULE")]
    pub module: PathBuf,

    /// Directory tree of dependency packages (default: lib)
    #[arg(long = "lib", value_name = "DIR")]
    pub lib_dir: Option<PathBuf>,

    /// Artifact path (default: <MODULE>/main.js)
    #[arg(short, long = "out", value_name = "FILE", conflicts_with = "stdout")]
    pub out: Option<PathBuf>,

    /// Documentation marker for foreign-bound declarations (default: js-bind)
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Text a method receiver is rewritten to (default: this)
    #[arg(long = "self-ref", value_name = "TEXT")]
    pub self_ref: Option<String>,

    /// Print the generated JavaScript instead of writing the artifact
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// Compilation settings: defaults overridden by the flags given.
    pub fn config(&self) -> CompileConfig {
        let mut config = CompileConfig::new();
        if let Some(dir) = &self.lib_dir {
            config = config.with_lib_dir(dir);
        }
        if let Some(marker) = &self.marker {
            config = config.with_directive_marker(marker);
        }
        if let Some(self_ref) = &self.self_ref {
            config = config.with_self_reference(self_ref);
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();
    let output = if cli.stdout {
        commands::Output::Stdout
    } else {
        commands::Output::File(
            cli.out
                .unwrap_or_else(|| cli.module.join(&config.output_file_name)),
        )
    };
    commands::compile_module(&cli.module, &output, &config)
}

// ============================================================================
// Tests
// ============================================================================
