//! JavaScript code generation facade
//!
//! This module provides `JsCodegen`, a unified API for generating JavaScript from a loaded program:
//!
//! ```text
//! Program → SymbolTable (all packages) → JsEmitter (root package) → JavaScript text
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use elma::backend::JsCodegen;
//!
//! let codegen = JsCodegen::new();
//! let js = codegen.try_generate(&program)?;
//! ```
//!
//! ## Notes
//! - The last package of the program is the root; every earlier package is a dependency that only contributes
//!   symbols (struct shapes and foreign directives). Dependencies are never emitted.

use super::emit::{self, EmitError};
use crate::config::CompileConfig;
use crate::frontend::ast::{Package, Program};
use crate::frontend::symbols::SymbolTable;

/// JavaScript code generator.
#[derive(Debug, Clone, Default)]
pub struct JsCodegen {
    config: CompileConfig,
}

impl JsCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CompileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Generate JavaScript for the root (last) package of `program`.
    ///
    /// An empty program generates an empty script.
    pub fn try_generate(&self, program: &Program) -> Result<String, EmitError> {
        match program.packages.split_last() {
            Some((root, dependencies)) => self.try_generate_package(root, dependencies),
            None => Ok(String::new()),
        }
    }

    /// Generate JavaScript for `root`, resolving symbols across `dependencies` first and `root` last.
    #[tracing::instrument(skip_all, fields(root = %root.path, dependencies = dependencies.len()))]
    pub fn try_generate_package(&self, root: &Package, dependencies: &[Package]) -> Result<String, EmitError> {
        let packages: Vec<&Package> = dependencies.iter().chain(std::iter::once(root)).collect();
        let symbols = SymbolTable::build(&packages, &self.config.directive_marker);
        let js = emit::emit_package(root, &symbols, &self.config)?;
        tracing::debug!(bytes = js.len(), "generated JavaScript");
        Ok(js)
    }
}
