//! Load serialized syntax trees into packages.
//!
//! The front end writes one `*.ast.json` file per source file. A package is a directory holding at least one such
//! file; the library directory is a tree of packages.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use elma::config::CompileConfig;
//! use elma::frontend::loader;
//!
//! let program = loader::load_program("app".as_ref(), &CompileConfig::default())?;
//! ```
//!
//! ## Notes
//! - Files inside a package and packages inside the library are visited in name order, so loading is deterministic.
//! - The root package is always last in [`Program::packages`].

use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::config::CompileConfig;
use crate::frontend::ast::{Package, Program, SourceFile};

/// Error while reading syntax trees from disk.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("module not found: `{}`", path.display())]
    #[diagnostic(
        code(elma::load::module_not_found),
        help("a module is a directory containing `*.ast.json` files written by the front end")
    )]
    ModuleNotFound { path: PathBuf },

    #[error("failed to read `{}`", path.display())]
    #[diagnostic(code(elma::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed syntax tree in `{}`", path.display())]
    #[diagnostic(code(elma::load::malformed), help("regenerate the file with the front end"))]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the dependency packages under `config.lib_dir` followed by the root package in `root`.
#[tracing::instrument(skip_all, fields(root = %root.display(), lib = %config.lib_dir.display()))]
pub fn load_program(root: &Path, config: &CompileConfig) -> Result<Program, LoadError> {
    let mut packages = load_library(&config.lib_dir, config)?;
    let root_path = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let root_package = load_package(root, &root_path, config)?.ok_or_else(|| LoadError::ModuleNotFound {
        path: root.to_path_buf(),
    })?;
    packages.push(root_package);
    tracing::debug!(packages = packages.len(), "program loaded");
    Ok(Program { packages })
}

/// Load every package found under `lib_dir`, depth-first in name order.
///
/// A missing library directory yields no packages.
pub fn load_library(lib_dir: &Path, config: &CompileConfig) -> Result<Vec<Package>, LoadError> {
    let mut packages = Vec::new();
    if !lib_dir.is_dir() {
        tracing::debug!(lib = %lib_dir.display(), "no library directory");
        return Ok(packages);
    }
    collect_packages(lib_dir, lib_dir, config, &mut packages)?;
    Ok(packages)
}

fn collect_packages(
    lib_dir: &Path,
    dir: &Path,
    config: &CompileConfig,
    packages: &mut Vec<Package>,
) -> Result<(), LoadError> {
    let path = dir
        .strip_prefix(lib_dir)
        .unwrap_or(dir)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if !path.is_empty() {
        packages.extend(load_package(dir, &path, config)?);
    }
    for entry in sorted_entries(dir)? {
        if entry.is_dir() {
            collect_packages(lib_dir, &entry, config, packages)?;
        }
    }
    Ok(())
}

/// Load the package stored in `dir`.
///
/// ## Returns
/// - `Ok(None)` when `dir` holds no syntax tree files.
pub fn load_package(dir: &Path, path: &str, config: &CompileConfig) -> Result<Option<Package>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::ModuleNotFound { path: dir.to_path_buf() });
    }

    let mut files = Vec::new();
    for entry in sorted_entries(dir)? {
        let is_ast = entry
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| config.is_ast_file(name));
        if !is_ast || !entry.is_file() {
            continue;
        }
        files.push(read_source_file(&entry)?);
    }
    if files.is_empty() {
        return Ok(None);
    }

    let name = path.rsplit('/').next().unwrap_or(path).to_string();
    tracing::debug!(package = %path, files = files.len(), "package loaded");
    Ok(Some(Package {
        path: path.to_string(),
        name,
        files,
    }))
}

fn read_source_file(path: &Path) -> Result<SourceFile, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(io_error)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_FILE: &str = r#"{"name": "main.go", "declarations": []}"#;

    /// Fresh scratch directory under the system temp dir.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("elma-loader-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn loads_files_in_name_order() {
        let dir = scratch("order");
        write(&dir.join("b.ast.json"), r#"{"name": "b.go"}"#);
        write(&dir.join("a.ast.json"), r#"{"name": "a.go"}"#);
        write(&dir.join("notes.txt"), "ignored");

        let package = load_package(&dir, "app", &CompileConfig::default()).unwrap().unwrap();
        let names: Vec<_> = package.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.go", "b.go"]);
        assert_eq!(package.name, "app");
    }

    #[test]
    fn missing_root_is_module_not_found() {
        let dir = scratch("missing").join("nope");
        let err = load_program(&dir, &CompileConfig::default().with_lib_dir(dir.join("lib"))).unwrap_err();
        assert!(matches!(err, LoadError::ModuleNotFound { .. }), "{err:?}");
    }

    #[test]
    fn root_without_ast_files_is_module_not_found() {
        let dir = scratch("empty");
        let err = load_program(&dir, &CompileConfig::default().with_lib_dir(dir.join("lib"))).unwrap_err();
        assert!(matches!(err, LoadError::ModuleNotFound { .. }), "{err:?}");
    }

    #[test]
    fn malformed_json_is_reported_with_its_path() {
        let dir = scratch("malformed");
        write(&dir.join("main.ast.json"), "{ not json");
        let err = load_package(&dir, "app", &CompileConfig::default()).unwrap_err();
        match err {
            LoadError::Malformed { path, .. } => assert!(path.ends_with("main.ast.json")),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn library_packages_come_first_with_relative_paths() {
        let dir = scratch("library");
        let lib = dir.join("lib");
        write(&lib.join("fmt").join("print.ast.json"), EMPTY_FILE);
        write(&lib.join("ui").join("doc").join("doc.ast.json"), EMPTY_FILE);
        let root = dir.join("app");
        write(&root.join("main.ast.json"), EMPTY_FILE);

        let program = load_program(&root, &CompileConfig::default().with_lib_dir(&lib)).unwrap();
        let paths: Vec<_> = program.packages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["fmt", "ui/doc", "app"]);
        assert_eq!(program.packages[1].name, "doc");
    }

    #[test]
    fn missing_library_is_not_an_error() {
        let dir = scratch("nolib");
        assert!(load_library(&dir.join("lib"), &CompileConfig::default()).unwrap().is_empty());
    }
}
