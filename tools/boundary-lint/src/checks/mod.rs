pub mod kebab_case;
pub mod no_cross_feature_imports;
pub mod no_import_from_pages;

use crate::config::LinterConfig;
use serde::Serialize;

/// One reported problem, located at a line (1-based) and column (0-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: &'static str,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub rule: &'static str,
    pub passed: bool,
    pub violations: Vec<Violation>,
}

impl CheckResult {
    /// Build a result, rewriting violation paths relative to the project root.
    pub fn new(
        config: &LinterConfig,
        name: &str,
        rule: &'static str,
        violations: Vec<Violation>,
    ) -> Self {
        let violations: Vec<Violation> = violations
            .into_iter()
            .map(|mut v| {
                v.file = config.relative(&v.file);
                v
            })
            .collect();

        Self {
            name: name.to_string(),
            rule,
            passed: violations.is_empty(),
            violations,
        }
    }
}

pub type CheckFn = fn(&LinterConfig) -> CheckResult;

/// Every rule id with its run-level entry point, in execution order.
pub const ALL_CHECKS: &[(&str, CheckFn)] = &[
    (no_cross_feature_imports::RULE, no_cross_feature_imports::check),
    (no_import_from_pages::RULE, no_import_from_pages::check),
    (kebab_case::RULE, kebab_case::check),
];
