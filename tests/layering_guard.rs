//! Layering guardrails for the workspace crates.
//!
//! `elma_core` is pure vocabulary and must stay dependency-free. `elma_syntax` owns the tree types and must never
//! depend on the compiler crate. These tests scan the member manifests' `[dependencies]` tables.

/// Dependency names listed in the `[dependencies]` table of `manifest`.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if in_dependencies {
                break;
            }
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_vocabulary_has_no_dependencies() {
    let deps = dependencies(include_str!("../crates/elma_core/Cargo.toml"));
    assert!(deps.is_empty(), "`elma_core` must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_does_not_depend_on_the_compiler() {
    let deps = dependencies(include_str!("../crates/elma_syntax/Cargo.toml"));
    assert!(deps.contains(&"elma_core".to_string()), "{deps:?}");
    assert!(!deps.contains(&"elma".to_string()), "`elma_syntax` must not depend on `elma`");
}
