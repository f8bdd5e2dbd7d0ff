//! Stable integer identities for filesystem entries.

use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::path::{Component, Path};

/// Assigns ids to normalized relative paths in first-encounter order.
///
/// Ids start at 1 and are never reused. The level recorded for an id is the
/// one seen on first encounter.
#[derive(Debug, Clone)]
pub struct IdentityAssigner {
    next_id: u32,
    ids: IndexMap<String, u32>,
    levels: BTreeMap<u32, usize>,
}

impl Default for IdentityAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityAssigner {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ids: IndexMap::new(),
            levels: BTreeMap::new(),
        }
    }

    /// Return the id for `path`, allocating one on first sight.
    pub fn assign(&mut self, path: &str, level: usize) -> u32 {
        if let Some(&id) = self.ids.get(path) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.ids.insert(path.to_string(), id);
        self.levels.insert(id, level);
        id
    }

    pub fn get(&self, path: &str) -> Option<u32> {
        self.ids.get(path).copied()
    }

    pub fn level(&self, id: u32) -> Option<usize> {
        self.levels.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn into_maps(self) -> (IndexMap<String, u32>, BTreeMap<u32, usize>) {
        (self.ids, self.levels)
    }
}

/// `path` relative to `root`, with `/` separators on every platform.
///
/// Returns `None` for paths outside `root`, for `root` itself and for
/// paths that still contain `..` after stripping.
pub fn normalize_relative(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_ids_increase_from_one() {
        let mut ids = IdentityAssigner::new();
        assert_eq!(ids.assign("src", 0), 1);
        assert_eq!(ids.assign("src/a.js", 1), 2);
        assert_eq!(ids.assign("src/b.js", 1), 3);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_repeat_assign_keeps_id_and_level() {
        let mut ids = IdentityAssigner::new();
        let first = ids.assign("a.js", 0);
        let again = ids.assign("a.js", 5);
        assert_eq!(first, again);
        assert_eq!(ids.level(first), Some(0));
        assert_eq!(ids.assign("b.js", 0), 2);
    }

    #[test]
    fn test_maps_keep_encounter_order() {
        let mut ids = IdentityAssigner::new();
        ids.assign("z.js", 0);
        ids.assign("a.js", 0);
        let (paths, levels) = ids.into_maps();
        let keys: Vec<&String> = paths.keys().collect();
        assert_eq!(keys, vec!["z.js", "a.js"]);
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn test_normalize_relative() {
        let root = PathBuf::from("/project");
        assert_eq!(
            normalize_relative(&root, &root.join("src").join("a.js")),
            Some("src/a.js".to_string())
        );
        assert_eq!(normalize_relative(&root, &root), None);
        assert_eq!(normalize_relative(&root, Path::new("/elsewhere/a.js")), None);
    }
}
