//! Relative specifier resolution.
//!
//! Emulates the usual module-loader conventions, first match wins:
//! 1. the exact path is a regular file
//! 2. the path plus one of the configured extensions exists
//! 3. the path is a directory holding `index` plus one of the extensions
//!
//! Anything else is unresolved. Bare (package) specifiers are never tried.

use path_clean::PathClean;
use std::fs;
use std::path::{Path, PathBuf};

use super::imports::is_relative;
use crate::config::GraphConfig;

/// Resolves relative import specifiers against the filesystem.
#[derive(Debug, Clone)]
pub struct SpecifierResolver {
    extensions: Vec<String>,
    index_file: String,
}

impl Default for SpecifierResolver {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default())
    }
}

impl SpecifierResolver {
    pub fn new(extensions: Vec<String>, index_file: impl Into<String>) -> Self {
        Self {
            extensions,
            index_file: index_file.into(),
        }
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.resolve_extensions.clone(), config.index_file.clone())
    }

    /// Resolve `specifier` as imported from a file in `importing_dir`.
    ///
    /// Returns a lexically normalized path, or `None` when the specifier is
    /// not relative or matches no rule.
    pub fn resolve(&self, specifier: &str, importing_dir: &Path) -> Option<PathBuf> {
        if !is_relative(specifier) {
            return None;
        }

        let base = importing_dir.join(specifier).clean();

        if is_regular_file(&base) {
            return Some(base);
        }

        if let Some(found) = self.first_with_extension(&base) {
            return Some(found);
        }

        if is_directory(&base) {
            let index = base.join(&self.index_file);
            return self.first_with_extension(&index);
        }

        None
    }

    fn first_with_extension(&self, stem: &Path) -> Option<PathBuf> {
        self.extensions
            .iter()
            .map(|ext| append_extension(stem, ext))
            .find(|candidate| candidate.exists())
    }
}

/// `foo/bar` + `.ts` -> `foo/bar.ts`, keeping any dots already in the name.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(ext);
    PathBuf::from(raw)
}

// Rule 1 and the directory check use lstat; extension and index candidates
// follow links.
fn is_regular_file(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

fn is_directory(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_exact_file() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b.js");
        let resolver = SpecifierResolver::default();

        assert_eq!(
            resolver.resolve("./b.js", dir.path()),
            Some(dir.path().join("b.js"))
        );
    }

    #[test]
    fn test_extension_order() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b.ts");
        touch(dir.path(), "b.jsx");
        let resolver = SpecifierResolver::default();

        assert_eq!(
            resolver.resolve("./b", dir.path()),
            Some(dir.path().join("b.jsx"))
        );
    }

    #[test]
    fn test_dotted_stem_keeps_name() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b.service.ts");
        let resolver = SpecifierResolver::default();

        assert_eq!(
            resolver.resolve("./b.service", dir.path()),
            Some(dir.path().join("b.service.ts"))
        );
    }

    #[test]
    fn test_directory_index() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "lib/index.tsx");
        touch(dir.path(), "lib/index.ts");
        let resolver = SpecifierResolver::default();

        assert_eq!(
            resolver.resolve("./lib", dir.path()),
            Some(dir.path().join("lib/index.ts"))
        );
    }

    #[test]
    fn test_extension_beats_directory_index() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "x.ts");
        touch(dir.path(), "x/index.ts");
        let resolver = SpecifierResolver::default();

        assert_eq!(
            resolver.resolve("./x", dir.path()),
            Some(dir.path().join("x.ts"))
        );
    }

    #[test]
    fn test_parent_specifier_is_normalized() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "shared/util.js");
        touch(dir.path(), "app/main.js");
        let resolver = SpecifierResolver::default();

        assert_eq!(
            resolver.resolve("../shared/util", &dir.path().join("app")),
            Some(dir.path().join("shared/util.js"))
        );
    }

    #[test]
    fn test_directory_without_index_is_unresolved() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "lib/other.js");
        let resolver = SpecifierResolver::default();

        assert_eq!(resolver.resolve("./lib", dir.path()), None);
    }

    #[test]
    fn test_missing_target() {
        let dir = tempdir().unwrap();
        let resolver = SpecifierResolver::default();
        assert_eq!(resolver.resolve("./ghost", dir.path()), None);
    }

    #[test]
    fn test_bare_specifier_never_resolves() {
        let dir = tempdir().unwrap();
        // Even a same-named local file must not be picked up.
        touch(dir.path(), "lodash.js");
        let resolver = SpecifierResolver::default();

        assert_eq!(resolver.resolve("lodash", dir.path()), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_extension_candidate_follows_symlink() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "real/b.js");
        std::os::unix::fs::symlink(dir.path().join("real/b.js"), dir.path().join("b.js")).unwrap();
        let resolver = SpecifierResolver::default();

        assert_eq!(
            resolver.resolve("./b", dir.path()),
            Some(dir.path().join("b.js"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_exact_symlink_is_not_rule_one() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "real/b.js");
        std::os::unix::fs::symlink(dir.path().join("real/b.js"), dir.path().join("b.js")).unwrap();
        let resolver = SpecifierResolver::default();

        // lstat sees a link, and "b.js.js" etc. do not exist.
        assert_eq!(resolver.resolve("./b.js", dir.path()), None);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a/index.js");
        let resolver = SpecifierResolver::default();

        let first = resolver.resolve("./a", dir.path());
        let second = resolver.resolve("./a", dir.path());
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
