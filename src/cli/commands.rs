//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::JsCodegen;
use crate::config::CompileConfig;
use crate::frontend::loader;

use super::{CliError, CliResult, ExitCode};

/// Where generated JavaScript goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

/// Load `module` and its library, generate JavaScript and deliver it to `output`.
///
/// Generation completes before the artifact is touched: a failing compile leaves any previous artifact in place.
pub fn compile_module(module: &Path, output: &Output, config: &CompileConfig) -> CliResult<ExitCode> {
    let program = loader::load_program(module, config).map_err(CliError::diagnostic)?;
    let js = JsCodegen::with_config(config.clone())
        .try_generate(&program)
        .map_err(CliError::diagnostic)?;

    match output {
        Output::Stdout => println!("{}", js),
        Output::File(path) => {
            replace_artifact(path, &js)?;
            tracing::info!(path = %path.display(), bytes = js.len(), "wrote JavaScript artifact");
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Remove any existing artifact at `path`, then write `contents`.
pub fn replace_artifact(path: &Path, contents: &str) -> CliResult<()> {
    if path.exists() {
        fs::remove_file(path)
            .map_err(|e| CliError::failure(format!("Error removing '{}': {}", path.display(), e)))?;
    }
    fs::write(path, contents).map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))
}
