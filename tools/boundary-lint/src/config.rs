use crate::resolver::normalize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Directories that are never inspected as source files.
/// The naming walk ignores this list and visits everything under `src`.
pub const GLOBAL_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    ".cache",
    ".vite",
    ".turbo",
];

/// Extensions of files handed to the rules, matching `src/**/*.{ts,tsx,js,jsx}`.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

pub const SRC_DIR_NAME: &str = "src";
pub const PAGES_DIR_NAME: &str = "pages";

/// Any file whose path contains this is part of the application layer.
pub const APPLICATION_LAYER_MARKER: &str = "/src/app/";

/// Naming issues on files with this extension are never surfaced by the fallback.
pub const DOCS_EXTENSION: &str = "md";

/// Build a HashSet from the global skip dirs plus any extra check-specific entries.
pub fn skip_dirs(extra: &[&'static str]) -> HashSet<&'static str> {
    let mut set: HashSet<&'static str> = GLOBAL_SKIP_DIRS.iter().copied().collect();
    for e in extra {
        set.insert(e);
    }
    set
}

/// Normalized, immutable locations every rule classifies paths against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub src_dir: String,
    pub pages_dir: String,
    pub app_layer_marker: String,
    pub docs_extension: String,
}

impl ProjectLayout {
    pub fn from_root(root: &Path) -> Self {
        let src_dir = normalize(&root.join(SRC_DIR_NAME).to_string_lossy());
        let pages_dir = normalize(&format!("{src_dir}/{PAGES_DIR_NAME}"));
        Self {
            src_dir,
            pages_dir,
            app_layer_marker: APPLICATION_LAYER_MARKER.to_string(),
            docs_extension: DOCS_EXTENSION.to_string(),
        }
    }
}

pub struct LinterConfig {
    pub root_dir: PathBuf,
    pub layout: ProjectLayout,
}

impl LinterConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            layout: ProjectLayout::from_root(root),
        }
    }

    /// Use the current working directory as the project root
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Some(Self::from_root(&dir))
    }

    pub fn src_dir(&self) -> PathBuf {
        PathBuf::from(&self.layout.src_dir)
    }

    /// Render a normalized absolute path relative to the project root.
    pub fn relative(&self, path: &str) -> String {
        let root = normalize(&self.root_dir.to_string_lossy());
        match path.strip_prefix(&root) {
            Some(rest) if rest.starts_with('/') => rest[1..].to_string(),
            _ => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_pages_under_src() {
        let layout = ProjectLayout::from_root(Path::new("/project"));
        assert_eq!(layout.src_dir, "/project/src");
        assert_eq!(layout.pages_dir, "/project/src/pages");
    }

    #[test]
    fn relative_strips_root_prefix_only_on_segment_boundary() {
        let config = LinterConfig::from_root(Path::new("/project"));
        assert_eq!(config.relative("/project/src/a.ts"), "src/a.ts");
        assert_eq!(config.relative("/projectx/src/a.ts"), "/projectx/src/a.ts");
    }
}
