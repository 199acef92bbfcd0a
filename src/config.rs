//! Compilation configuration for elma
//!
//! Defaults match the conventions the bundled libraries are written against (`//js-bind` directives, `main.js`
//! output next to the root module).

use std::path::PathBuf;

use elma_core::lang::{conventions, directives};

/// Compilation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileConfig {
    /// First documentation line that marks a declaration as foreign-bound
    pub directive_marker: String,
    /// Text a method receiver is rewritten to inside the method body
    pub self_reference: String,
    /// Artifact file name, relative to the root module directory
    pub output_file_name: String,
    /// Directory tree holding dependency packages
    pub lib_dir: PathBuf,
    /// Extension of serialized syntax tree files
    pub ast_extension: String,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            directive_marker: directives::DEFAULT_MARKER.to_string(),
            self_reference: conventions::SELF_REFERENCE.to_string(),
            output_file_name: conventions::DEFAULT_OUTPUT_FILE.to_string(),
            lib_dir: PathBuf::from(conventions::DEFAULT_LIB_DIR),
            ast_extension: conventions::AST_FILE_EXTENSION.to_string(),
        }
    }
}

impl CompileConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreign directive marker
    pub fn with_directive_marker(mut self, marker: impl Into<String>) -> Self {
        self.directive_marker = marker.into();
        self
    }

    /// Set the receiver replacement text
    pub fn with_self_reference(mut self, self_reference: impl Into<String>) -> Self {
        self.self_reference = self_reference.into();
        self
    }

    /// Set the artifact file name
    pub fn with_output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }

    /// Set the dependency directory
    pub fn with_lib_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lib_dir = dir.into();
        self
    }

    /// Whether `file_name` names a serialized syntax tree.
    pub fn is_ast_file(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.ast_extension.as_str())
            .is_some_and(|stem| stem.len() > 1 && stem.ends_with('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker() {
        assert_eq!(CompileConfig::default().directive_marker, "js-bind");
    }

    #[test]
    fn test_default_self_reference() {
        assert_eq!(CompileConfig::default().self_reference, "this");
    }

    #[test]
    fn test_default_output_and_lib() {
        let config = CompileConfig::default();
        assert_eq!(config.output_file_name, "main.js");
        assert_eq!(config.lib_dir, PathBuf::from("lib"));
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(CompileConfig::new(), CompileConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = CompileConfig::new()
            .with_directive_marker("host")
            .with_self_reference("self")
            .with_output_file_name("bundle.js")
            .with_lib_dir("vendor");
        assert_eq!(config.directive_marker, "host");
        assert_eq!(config.self_reference, "self");
        assert_eq!(config.output_file_name, "bundle.js");
        assert_eq!(config.lib_dir, PathBuf::from("vendor"));
    }

    #[test]
    fn test_ast_file_detection() {
        let config = CompileConfig::default();
        assert!(config.is_ast_file("main.ast.json"));
        assert!(!config.is_ast_file("main.json"));
        assert!(!config.is_ast_file(".ast.json"));
        assert!(!config.is_ast_file("main.go"));
    }
}
