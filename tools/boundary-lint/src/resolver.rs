//! String-based import resolution against the project's alias conventions.
//!
//! Nothing here touches the filesystem. Paths are compared after
//! [`normalize`] so the same rules apply to Windows and POSIX separators.

use crate::config::ProjectLayout;

/// Where an import specifier points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportTarget {
    /// A normalized absolute path inside the project.
    Path(String),
    /// The specifier unchanged; a package or an alias we do not know.
    External(String),
}

impl ImportTarget {
    pub fn as_path(&self) -> Option<&str> {
        match self {
            ImportTarget::Path(p) => Some(p),
            ImportTarget::External(_) => None,
        }
    }
}

/// Lexically normalize a path: forward slashes, no `.` segments, `..` applied.
pub fn normalize(input: &str) -> String {
    let unified = input.replace('\\', "/");
    let absolute = unified.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if !absolute => segments.push(".."),
                _ => {}
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// True when `child` is `parent` itself or lies below it.
pub fn is_inside_dir(child: &str, parent: &str) -> bool {
    let child = normalize(child);
    let parent = normalize(parent);
    child == parent || child.starts_with(&format!("{}/", parent.trim_end_matches('/')))
}

fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(i) => &path[..i],
        None => ".",
    }
}

fn join(base: &str, rest: &str) -> String {
    normalize(&format!("{base}/{rest}"))
}

/// Resolve `specifier` as imported from `from_file`.
///
/// Returns `None` for an empty specifier and [`ImportTarget::External`] for
/// anything that is not relative or behind one of the `@/`, `@pages/` and
/// `src/` aliases. Index files and extensions are not probed.
pub fn resolve_import_target(
    layout: &ProjectLayout,
    from_file: &str,
    specifier: &str,
) -> Option<ImportTarget> {
    if specifier.is_empty() {
        return None;
    }

    let target = if specifier.starts_with('.') {
        let from = normalize(from_file);
        ImportTarget::Path(join(parent_dir(&from), specifier))
    } else if let Some(rest) = specifier.strip_prefix("@/") {
        ImportTarget::Path(join(&layout.src_dir, rest))
    } else if let Some(rest) = specifier.strip_prefix("@pages/") {
        ImportTarget::Path(join(&layout.pages_dir, rest))
    } else if let Some(rest) = specifier.strip_prefix("src/") {
        ImportTarget::Path(join(&layout.src_dir, rest))
    } else {
        ImportTarget::External(specifier.to_string())
    };

    Some(target)
}

/// The feature folder a path belongs to, if it sits below the pages dir.
pub fn feature_of(layout: &ProjectLayout, path: &str) -> Option<String> {
    let path = normalize(path);
    let rest = path.strip_prefix(layout.pages_dir.as_str())?;
    let rest = rest.strip_prefix('/')?;
    match rest.split('/').next() {
        Some(segment) if !segment.is_empty() => Some(segment.to_string()),
        _ => None,
    }
}
