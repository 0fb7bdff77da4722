use crate::checks::{CheckResult, Violation};
use crate::config::{self, LinterConfig, ProjectLayout};
use crate::imports::{self, ImportEdge};
use crate::resolver::{self, normalize};
use crate::walker;

pub const RULE: &str = "no-import-from-pages";

const MESSAGE: &str = "Files outside pages folder cannot import pages files (unidirectional rule).";

pub fn check(config: &LinterConfig) -> CheckResult {
    let name = "No imports from pages";
    let files = walker::collect_source_files(&config.src_dir(), &config::skip_dirs(&[]));
    let mut violations = Vec::new();

    for file in &files {
        let filename = normalize(&file.to_string_lossy());
        if !applies_to(&config.layout, &filename) {
            continue;
        }
        let edges = imports::read_imports(file);
        violations.extend(check_file(&config.layout, &filename, &edges));
    }

    CheckResult::new(config, name, RULE, violations)
}

fn applies_to(layout: &ProjectLayout, filename: &str) -> bool {
    resolver::is_inside_dir(filename, &layout.src_dir)
        && !resolver::is_inside_dir(filename, &layout.pages_dir)
}

/// The application layer wires pages into routes and may import them.
pub fn is_application_layer(layout: &ProjectLayout, filename: &str) -> bool {
    filename.contains(layout.app_layer_marker.as_str())
}

/// Report imports that reach into pages from anywhere else under src.
pub fn check_file(layout: &ProjectLayout, filename: &str, edges: &[ImportEdge]) -> Vec<Violation> {
    let filename = normalize(filename);
    if !applies_to(layout, &filename) || is_application_layer(layout, &filename) {
        return Vec::new();
    }

    edges
        .iter()
        .filter(|edge| {
            resolver::resolve_import_target(layout, &filename, &edge.specifier)
                .as_ref()
                .and_then(|t| t.as_path())
                .is_some_and(|target| resolver::is_inside_dir(target, &layout.pages_dir))
        })
        .map(|edge| Violation {
            rule: RULE,
            file: filename.clone(),
            line: edge.line,
            column: edge.column,
            message: MESSAGE.to_string(),
        })
        .collect()
}
