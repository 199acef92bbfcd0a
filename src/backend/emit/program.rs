//! Package-level emission.
//!
//! The root package is emitted file by file, declaration by declaration, in source order. Output is the plain
//! concatenation of every declaration's text.

use super::{EmitError, JsEmitter};
use crate::config::CompileConfig;
use crate::frontend::ast::Package;
use crate::frontend::symbols::SymbolTable;

/// Emit every declaration of `package`.
///
/// Each declaration gets a fresh [`JsEmitter`], so receiver bindings and depth never carry over. The first error
/// aborts emission; no partial output is returned.
#[tracing::instrument(skip_all, fields(package = %package.path, files = package.files.len()))]
pub fn emit_package(
    package: &Package,
    symbols: &SymbolTable<'_>,
    config: &CompileConfig,
) -> Result<String, EmitError> {
    let mut out = String::new();
    for file in &package.files {
        tracing::trace!(file = %file.name, declarations = file.declarations.len(), "emitting file");
        for decl in &file.declarations {
            let mut emitter = JsEmitter::new(symbols, config);
            out.push_str(&emitter.emit_declaration(decl)?);
        }
    }
    Ok(out)
}
