use crate::config;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Recursively collect the files the rules inspect, sorted by path.
pub fn collect_source_files(dir: &Path, skip_dirs: &HashSet<&str>) -> Vec<PathBuf> {
    let mut results = Vec::new();
    collect_source_files_inner(dir, skip_dirs, &mut results);
    results.sort();
    results
}

fn collect_source_files_inner(dir: &Path, skip_dirs: &HashSet<&str>, results: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if path.is_dir() {
                if !skip_dirs.contains(name) {
                    collect_source_files_inner(&path, skip_dirs, results);
                }
            } else if path.is_file() && is_source_file(&path) {
                results.push(path);
            }
        }
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config::SOURCE_EXTENSIONS.contains(&ext))
}
