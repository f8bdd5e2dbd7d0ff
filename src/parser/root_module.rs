//! Owning top-level module of a file, by path convention.

/// Prefix of `path` up to and including the first `sentinel` segment and
/// the segment after it: `src/modules/auth/api/login.ts` -> `src/modules/auth`.
///
/// Returns `None` when no segment equals `sentinel`. If the sentinel is the
/// last segment the prefix ends at the sentinel itself.
pub fn root_module(path: &str, sentinel: &str) -> Option<String> {
    let parts: Vec<&str> = path.split('/').collect();
    let pos = parts.iter().position(|p| *p == sentinel)?;
    let end = (pos + 2).min(parts.len());
    Some(parts[..end].join("/"))
}
