//! Kebab-case naming for every file and folder under `src`.
//!
//! The tree is walked once per run, on the first file inspected. Each issue
//! is then reported by the first inspected file it applies to: a file issue
//! by that file, a folder issue by any file inside the folder. The first
//! inspection that still leaves issues pending also reports every pending
//! non-markdown issue once, as a fallback for names no inspected file reaches.

use crate::checks::{CheckResult, Violation};
use crate::config::{self, LinterConfig, ProjectLayout};
use crate::resolver::normalize;
use crate::walker;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

pub const RULE: &str = "enforce-kebab-casing";

static KEBAB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

pub fn is_kebab_case(name: &str) -> bool {
    KEBAB_PATTERN.is_match(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    File,
    Folder,
}

impl IssueKind {
    fn label(self) -> &'static str {
        match self {
            IssueKind::File => "file",
            IssueKind::Folder => "folder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingIssue {
    pub kind: IssueKind,
    /// Relative to `src`, forward slashes.
    pub relative_path: String,
    pub absolute_path: String,
    pub name: String,
}

impl NamingIssue {
    fn message(&self) -> String {
        format!(
            "Use kebab-case for {} inside src: \"{}\"",
            self.kind.label(),
            self.relative_path
        )
    }

    fn has_extension(&self, extension: &str) -> bool {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == extension)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    Pending,
    Spent,
}

/// Naming state for one lint run. Create one per run and pass every
/// inspected file through [`KebabSession::check`].
#[derive(Debug)]
pub struct KebabSession {
    layout: ProjectLayout,
    issues: Option<Vec<NamingIssue>>,
    reported: HashSet<String>,
    fallback: Fallback,
}

impl KebabSession {
    pub fn new(layout: &ProjectLayout) -> Self {
        Self {
            layout: layout.clone(),
            issues: None,
            reported: HashSet::new(),
            fallback: Fallback::Pending,
        }
    }

    /// Issues found by the walk, collecting them on first use.
    pub fn issues(&mut self) -> &[NamingIssue] {
        let layout = &self.layout;
        self.issues.get_or_insert_with(|| collect_issues(layout))
    }

    /// Issues not yet surfaced in this run.
    pub fn pending(&mut self) -> Vec<NamingIssue> {
        self.issues();
        let reported = &self.reported;
        self.issues
            .iter()
            .flatten()
            .filter(|issue| !reported.contains(&issue.relative_path))
            .cloned()
            .collect()
    }

    /// Report the naming issues that inspecting `filename` surfaces.
    pub fn check(&mut self, filename: &str) -> Vec<Violation> {
        let filename = normalize(filename);
        if !filename.starts_with(&format!("{}/", self.layout.src_dir)) {
            return Vec::new();
        }

        let mut surfaced: Vec<NamingIssue> = Vec::new();

        for issue in self.pending() {
            let hit = match issue.kind {
                IssueKind::File => filename == issue.absolute_path,
                IssueKind::Folder => filename.starts_with(&format!("{}/", issue.absolute_path)),
            };
            if hit {
                self.reported.insert(issue.relative_path.clone());
                surfaced.push(issue);
            }
        }

        if self.fallback == Fallback::Pending {
            let docs_extension = self.layout.docs_extension.clone();
            let unreached: Vec<NamingIssue> = self
                .pending()
                .into_iter()
                .filter(|issue| !issue.has_extension(&docs_extension))
                .collect();
            if !unreached.is_empty() {
                for issue in &unreached {
                    self.reported.insert(issue.relative_path.clone());
                }
                self.fallback = Fallback::Spent;
                surfaced.extend(unreached);
            }
        }

        surfaced
            .into_iter()
            .map(|issue| Violation {
                rule: RULE,
                file: filename.clone(),
                line: 1,
                column: 0,
                message: issue.message(),
            })
            .collect()
    }
}

pub fn check(config: &LinterConfig) -> CheckResult {
    let name = "Kebab-case file and folder names";
    let files = walker::collect_source_files(&config.src_dir(), &config::skip_dirs(&[]));
    let mut session = KebabSession::new(&config.layout);
    let mut violations = Vec::new();

    for file in &files {
        violations.extend(session.check(&file.to_string_lossy()));
    }

    CheckResult::new(config, name, RULE, violations)
}

/// Walk `src` depth-first and record every name that is not kebab-case.
pub fn collect_issues(layout: &ProjectLayout) -> Vec<NamingIssue> {
    let mut issues = Vec::new();
    let src_dir = Path::new(&layout.src_dir);
    if src_dir.is_dir() {
        walk(src_dir, &layout.src_dir, &mut issues);
    }
    issues
}

fn walk(dir: &Path, src_dir: &str, issues: &mut Vec<NamingIssue>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    let mut entries: Vec<fs::DirEntry> = entries.flatten().collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let absolute_path = normalize(&path.to_string_lossy());
        let relative_path = absolute_path
            .strip_prefix(src_dir)
            .map(|rest| rest.trim_start_matches('/').to_string())
            .unwrap_or_else(|| absolute_path.clone());

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            if !is_kebab_case(&name) {
                issues.push(NamingIssue {
                    kind: IssueKind::Folder,
                    relative_path,
                    absolute_path,
                    name,
                });
            }
            walk(&path, src_dir, issues);
        } else {
            let base_name = name.split('.').next().unwrap_or("");
            if !is_kebab_case(base_name) {
                issues.push(NamingIssue {
                    kind: IssueKind::File,
                    relative_path,
                    absolute_path,
                    name,
                });
            }
        }
    }
}
