//! Shared compiler conventions (well-known identifiers and file names).

/// JavaScript self reference a method receiver is rewritten to.
pub const SELF_REFERENCE: &str = "this";

/// The blank identifier; never bound and never destructured into.
pub const BLANK_IDENTIFIER: &str = "_";

/// Property a method is attached under on its constructor function.
pub const PROTOTYPE_PROPERTY: &str = "prototype";

/// Host function used to enumerate the entries of a ranged mapping.
pub const ENTRIES_FUNCTION: &str = "Object.entries";

/// Default name of the generated artifact inside the root module directory.
pub const DEFAULT_OUTPUT_FILE: &str = "main.js";

/// Default directory holding dependency packages.
pub const DEFAULT_LIB_DIR: &str = "lib";

/// Extension of the serialized syntax trees produced by the front end.
pub const AST_FILE_EXTENSION: &str = "ast.json";

/// Prefix given to unnamed parameters (`_0`, `_1`, ...).
pub const UNNAMED_PARAM_PREFIX: &str = "_";
