//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: `..` is resolved textually and
//! symlinks are not followed.

use std::path::{Component, Path, PathBuf};

/// Resolves `.` and `..` components without consulting the filesystem.
///
/// `..` directly under a root is dropped (`/..` is `/`); leading `..` in a
/// relative path is kept. An empty result becomes `.`.
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Expresses `target` relative to `base`, lexically.
///
/// Both paths must be absolute or both relative, and they must share the
/// same prefix (drive) and root. Returns `None` when no relative form
/// exists. Identical paths yield `.`.
///
/// ```
/// use cdplus_core::format::relative_path;
/// use std::path::{Path, PathBuf};
///
/// let rel = relative_path(Path::new("/a/b"), Path::new("/a/c/d")).unwrap();
/// assert_eq!(rel, PathBuf::from("../c/d"));
/// ```
pub fn relative_path(base: &Path, target: &Path) -> Option<PathBuf> {
    let base = lexical_clean(base);
    let target = lexical_clean(target);

    let (base_head, base_rest) = split_anchor(&base);
    let (target_head, target_rest) = split_anchor(&target);
    if base_head != target_head {
        return None;
    }

    let common = base_rest
        .iter()
        .zip(target_rest.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Climbing out of an unresolved `..` in the base is undefined.
    if base_rest[common..]
        .iter()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }

    let mut rel = PathBuf::new();
    for _ in common..base_rest.len() {
        rel.push("..");
    }
    for comp in &target_rest[common..] {
        rel.push(comp.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Some(rel)
}

/// Splits a cleaned path into its anchor (prefix + root) and the rest.
fn split_anchor(path: &Path) -> (Vec<Component<'_>>, Vec<Component<'_>>) {
    let (head, rest): (Vec<_>, Vec<_>) = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .partition(|c| matches!(c, Component::Prefix(_) | Component::RootDir));
    (head, rest)
}
