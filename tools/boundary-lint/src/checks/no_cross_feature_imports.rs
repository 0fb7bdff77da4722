use crate::checks::{CheckResult, Violation};
use crate::config::{self, LinterConfig, ProjectLayout};
use crate::imports::{self, ImportEdge};
use crate::resolver::{self, normalize};
use crate::walker;

pub const RULE: &str = "no-cross-feature-imports";

pub fn check(config: &LinterConfig) -> CheckResult {
    let name = "No cross-feature imports inside pages";
    let files = walker::collect_source_files(&config.src_dir(), &config::skip_dirs(&[]));
    let mut violations = Vec::new();

    for file in &files {
        let filename = normalize(&file.to_string_lossy());
        if !resolver::is_inside_dir(&filename, &config.layout.pages_dir) {
            continue;
        }
        let edges = imports::read_imports(file);
        violations.extend(check_file(&config.layout, &filename, &edges));
    }

    CheckResult::new(config, name, RULE, violations)
}

/// Report imports from one page feature into another.
pub fn check_file(layout: &ProjectLayout, filename: &str, edges: &[ImportEdge]) -> Vec<Violation> {
    let filename = normalize(filename);
    if !resolver::is_inside_dir(&filename, &layout.pages_dir) {
        return Vec::new();
    }

    let current_feature = match resolver::feature_of(layout, &filename) {
        Some(f) => f,
        None => return Vec::new(),
    };

    let mut violations = Vec::new();

    for edge in edges {
        let target = match resolver::resolve_import_target(layout, &filename, &edge.specifier) {
            Some(t) => t,
            None => continue,
        };
        let target = match target.as_path() {
            Some(p) => p,
            None => continue,
        };
        if !resolver::is_inside_dir(target, &layout.pages_dir) {
            continue;
        }

        if let Some(target_feature) = resolver::feature_of(layout, target) {
            if target_feature != current_feature {
                violations.push(Violation {
                    rule: RULE,
                    file: filename.clone(),
                    line: edge.line,
                    column: edge.column,
                    message: format!(
                        "Importing from {target_feature} into {current_feature} is FORBIDDEN as \
                         Cross-features import is not allowed inside pages."
                    ),
                });
            }
        }
    }

    violations
}
