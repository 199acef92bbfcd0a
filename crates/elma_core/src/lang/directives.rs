//! Foreign directive vocabulary.
//!
//! A declaration is foreign-bound when its documentation starts with the marker line (`//js-bind` by default).
//! Every following documentation line is template text. The template may reference the call site through the
//! placeholder tokens defined here.
//!
//! | token     | meaning                                                        |
//! |-----------|----------------------------------------------------------------|
//! | `%args%`  | all call arguments, comma-joined, in source order              |
//! | `%recv%`  | the selector prefix before the called name (empty when bare)   |
//! | `%argN%`  | the N-th argument (0-indexed), substituted at every occurrence |
//!
//! ## Examples
//! ```rust
//! use elma_core::lang::directives::{self, PlaceholderId};
//!
//! assert_eq!(directives::parse_placeholder("%arg2%"), Some(PlaceholderId::Positional(2)));
//! assert_eq!(directives::positional_token(2), "%arg2%");
//! ```

/// Marker recognized on the first documentation line.
pub const DEFAULT_MARKER: &str = "js-bind";

/// Line-comment prefix stripped from every documentation line.
pub const COMMENT_PREFIX: &str = "//";

/// Delimiter surrounding every placeholder token.
pub const PLACEHOLDER_DELIMITER: char = '%';

/// Token expanding to all arguments.
pub const ALL_ARGS_TOKEN: &str = "%args%";

/// Token expanding to the receiver prefix.
pub const RECEIVER_TOKEN: &str = "%recv%";

const POSITIONAL_PREFIX: &str = "arg";

/// Stable identifier for a template placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlaceholderId {
    AllArgs,
    Receiver,
    Positional(usize),
}

/// Spell the positional token for argument `index`.
pub fn positional_token(index: usize) -> String {
    format!("{PLACEHOLDER_DELIMITER}{POSITIONAL_PREFIX}{index}{PLACEHOLDER_DELIMITER}")
}

/// Resolve a complete token (delimiters included) to its placeholder.
///
/// ## Returns
/// - `None` for anything that is not exactly one of the recognized tokens (e.g. `%arg%`, `%arg-1%`, `%ARGS%`).
pub fn parse_placeholder(token: &str) -> Option<PlaceholderId> {
    match token {
        ALL_ARGS_TOKEN => return Some(PlaceholderId::AllArgs),
        RECEIVER_TOKEN => return Some(PlaceholderId::Receiver),
        _ => {}
    }
    let digits = token
        .strip_prefix(PLACEHOLDER_DELIMITER)?
        .strip_suffix(PLACEHOLDER_DELIMITER)?
        .strip_prefix(POSITIONAL_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(PlaceholderId::Positional)
}

/// Find every recognized placeholder in `template`, in order of appearance.
///
/// Text between two delimiters that is not a recognized token is skipped; scanning resumes at its closing delimiter
/// so `100%%args%` still finds `%args%`.
pub fn scan_placeholders(template: &str) -> Vec<PlaceholderId> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find(PLACEHOLDER_DELIMITER) {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find(PLACEHOLDER_DELIMITER) else {
            break;
        };
        let token = &rest[open..open + close + 2];
        match parse_placeholder(token) {
            Some(id) => {
                found.push(id);
                rest = &after_open[close + 1..];
            }
            None => rest = &after_open[close..],
        }
    }
    found
}
