//! Lexical import scanning.
//!
//! Matches `import <anything> from '<specifier>'` (or double quotes, with an
//! optional trailing semicolon) over raw source text. This is a heuristic,
//! not a parser: comments, template literals, re-exports and dynamic
//! `import()` calls are not understood, so it can over- or under-match.

use once_cell::sync::Lazy;
use regex::Regex;

static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+.*?\s+from\s+['"](.*?)['"];?"#).expect("import regex is valid")
});

/// Return every import specifier in `source`, in order of appearance,
/// duplicates included.
pub fn extract_imports(source: &str) -> Vec<String> {
    IMPORT_RE
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True for specifiers that denote a filesystem-relative path (`./x`, `../x`).
pub fn is_relative(specifier: &str) -> bool {
    specifier.starts_with('.')
}
