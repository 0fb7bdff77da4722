use std::fs;
use std::path::Path;

use boundary_lint::checks::kebab_case::{self, IssueKind, KebabSession};
use boundary_lint::config::{LinterConfig, ProjectLayout};

fn path_str(root: &Path, rel: &str) -> String {
    root.join(rel).to_string_lossy().replace('\\', "/")
}

#[test]
fn walk_collects_folders_before_their_contents() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/UserProfile/avatar-card.tsx"));
    touch(&root.path().join("src/UserProfile/EditForm.tsx"));
    touch(&root.path().join("src/fooBar.ts"));
    touch(&root.path().join("src/app/routing/main.ts"));
    touch(&root.path().join("src/app/routing/routes/authenticated/editor.route.ts"));

    let layout = ProjectLayout::from_root(root.path());
    let issues = kebab_case::collect_issues(&layout);

    let found: Vec<(IssueKind, &str)> = issues
        .iter()
        .map(|i| (i.kind, i.relative_path.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (IssueKind::Folder, "UserProfile"),
            (IssueKind::File, "UserProfile/EditForm.tsx"),
            (IssueKind::File, "fooBar.ts"),
        ]
    );
    assert_eq!(issues[0].name, "UserProfile");
}

#[test]
fn missing_src_yields_no_issues() {
    let root = tempfile::tempdir().unwrap();
    let layout = ProjectLayout::from_root(root.path());
    assert!(kebab_case::collect_issues(&layout).is_empty());
}

#[test]
fn folder_issue_is_reported_once_across_nested_files() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/UserProfile/index.ts"));
    touch(&root.path().join("src/UserProfile/avatar.ts"));

    let layout = ProjectLayout::from_root(root.path());
    let mut session = KebabSession::new(&layout);

    let first = session.check(&path_str(root.path(), "src/UserProfile/avatar.ts"));
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].message, "Use kebab-case for folder inside src: \"UserProfile\"");
    assert_eq!((first[0].line, first[0].column), (1, 0));

    let second = session.check(&path_str(root.path(), "src/UserProfile/index.ts"));
    assert!(second.is_empty());
}

#[test]
fn file_issue_is_reported_by_the_file_itself_and_never_twice() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/fooBar.ts"));

    let layout = ProjectLayout::from_root(root.path());
    let mut session = KebabSession::new(&layout);
    let file = path_str(root.path(), "src/fooBar.ts");

    let first = session.check(&file);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].message, "Use kebab-case for file inside src: \"fooBar.ts\"");

    assert!(session.check(&file).is_empty());
    assert!(session.pending().is_empty());
}

#[test]
fn fallback_drains_every_unreached_issue_in_one_pass() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/assets/CompanyLogo.svg"));
    touch(&root.path().join("src/assets/Hero_Image.png"));
    touch(&root.path().join("src/styles/Global.css"));
    touch(&root.path().join("src/docs/API_NOTES.md"));
    touch(&root.path().join("src/main.tsx"));
    touch(&root.path().join("src/hooks/use-redux-app.tsx"));

    let layout = ProjectLayout::from_root(root.path());
    let mut session = KebabSession::new(&layout);

    let first = session.check(&path_str(root.path(), "src/hooks/use-redux-app.tsx"));
    let messages: Vec<&str> = first.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Use kebab-case for file inside src: \"assets/CompanyLogo.svg\"",
            "Use kebab-case for file inside src: \"assets/Hero_Image.png\"",
            "Use kebab-case for file inside src: \"styles/Global.css\"",
        ]
    );
    assert!(first.iter().all(|v| v.file.ends_with("src/hooks/use-redux-app.tsx")));

    let second = session.check(&path_str(root.path(), "src/main.tsx"));
    assert!(second.is_empty());

    let pending = session.pending();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].relative_path, "docs/API_NOTES.md");
}

#[test]
fn direct_matches_still_report_after_the_fallback_is_spent() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/README.md"));
    touch(&root.path().join("src/assets/CompanyLogo.svg"));
    touch(&root.path().join("src/main.tsx"));

    let layout = ProjectLayout::from_root(root.path());
    let mut session = KebabSession::new(&layout);

    assert_eq!(session.check(&path_str(root.path(), "src/main.tsx")).len(), 1);

    // Markdown issues are exempt from the fallback but not from a direct visit.
    let direct = session.check(&path_str(root.path(), "src/README.md"));
    assert_eq!(direct.len(), 1);
    assert_eq!(direct[0].message, "Use kebab-case for file inside src: \"README.md\"");
    assert!(session.pending().is_empty());
}

#[test]
fn markdown_issues_are_not_surfaced_by_the_fallback() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/README.md"));
    touch(&root.path().join("src/main.tsx"));

    let layout = ProjectLayout::from_root(root.path());
    let mut session = KebabSession::new(&layout);

    assert!(session.check(&path_str(root.path(), "src/main.tsx")).is_empty());
    assert_eq!(session.pending().len(), 1);
}

#[test]
fn fallback_skips_markdown_and_takes_next_issue() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/CHANGELOG.md"));
    touch(&root.path().join("src/Styles.css"));
    touch(&root.path().join("src/main.tsx"));

    let layout = ProjectLayout::from_root(root.path());
    let mut session = KebabSession::new(&layout);

    let reported = session.check(&path_str(root.path(), "src/main.tsx"));
    assert_eq!(reported.len(), 1);
    assert!(reported[0].message.contains("Styles.css"));
}

#[test]
fn files_outside_src_are_ignored_without_walking() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/fooBar.ts"));
    touch(&root.path().join("vite.config.ts"));

    let layout = ProjectLayout::from_root(root.path());
    let mut session = KebabSession::new(&layout);

    assert!(session.check(&path_str(root.path(), "vite.config.ts")).is_empty());
    assert!(session.check(&path_str(root.path(), "srcx/a.ts")).is_empty());
}

#[test]
fn walk_happens_once_per_session() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/main.tsx"));

    let layout = ProjectLayout::from_root(root.path());
    let mut session = KebabSession::new(&layout);
    assert!(session.check(&path_str(root.path(), "src/main.tsx")).is_empty());

    // Created after the walk: invisible to this run, visible to the next.
    touch(&root.path().join("src/LateFile.ts"));
    assert!(session.check(&path_str(root.path(), "src/LateFile.ts")).is_empty());

    let mut next_run = KebabSession::new(&layout);
    assert_eq!(next_run.check(&path_str(root.path(), "src/LateFile.ts")).len(), 1);
}

#[test]
fn run_level_check_reports_each_issue_once() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("src/UserProfile/index.ts"));
    touch(&root.path().join("src/UserProfile/avatar.ts"));
    touch(&root.path().join("src/fooBar.ts"));
    touch(&root.path().join("src/main.tsx"));
    touch(&root.path().join("src/docs/README.md"));

    let config = LinterConfig::from_root(root.path());
    let result = kebab_case::check(&config);

    assert!(!result.passed);
    let mut messages: Vec<&str> = result.violations.iter().map(|v| v.message.as_str()).collect();
    messages.sort();
    assert_eq!(
        messages,
        vec![
            "Use kebab-case for file inside src: \"fooBar.ts\"",
            "Use kebab-case for folder inside src: \"UserProfile\"",
        ]
    );
    assert!(result.violations.iter().all(|v| v.file.starts_with("src/")));
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}
