//! File discovery: explicit files, recursive directory walks and glob patterns

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension and exclusion filter applied to every candidate file
#[derive(Debug, Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    exclude: Vec<String>,
}

impl FileFilter {
    /// Create a filter; extensions may be given with or without a leading dot
    pub fn new(extensions: &[String], exclude: &[String]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            exclude: exclude
                .iter()
                .filter(|pattern| !pattern.is_empty())
                .cloned()
                .collect(),
        }
    }

    /// Whether `path` has an accepted extension
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Whether any exclusion substring occurs in `path`
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.exclude.iter().any(|pattern| path.contains(pattern.as_str()))
    }

    /// Whether `path` should be processed
    pub fn accepts(&self, path: &Path) -> bool {
        self.matches_extension(path) && !self.is_excluded(path)
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(&['*', '?', '['][..])
}

/// Resolve files, directories and glob patterns into a sorted, de-duplicated
/// list of files accepted by `filter`.
///
/// Paths that do not exist are reported and skipped. An empty result is not an
/// error.
pub fn collect_files(inputs: &[String], filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if is_glob_pattern(input) && !Path::new(input).exists() {
            let paths = glob(input).map_err(|e| CliError::InvalidPattern(format!("{input}: {e}")))?;
            for path_result in paths {
                let path =
                    path_result.with_context(|| format!("Error resolving pattern: {input}"))?;
                collect_path(&path, filter, &mut files);
            }
        } else {
            let path = Path::new(input);
            if !path.exists() {
                log::warn!("Path does not exist: {input}");
                continue;
            }
            collect_path(path, filter, &mut files);
        }
    }

    files.sort();
    files.dedup();
    log::debug!("Discovered {} files", files.len());

    Ok(files)
}

fn collect_path(path: &Path, filter: &FileFilter, files: &mut Vec<PathBuf>) {
    if path.is_file() {
        if filter.accepts(path) {
            files.push(path.to_path_buf());
        }
        return;
    }

    for entry in WalkDir::new(path).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };
        if entry.file_type().is_file() && filter.accepts(entry.path()) {
            files.push(entry.into_path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn filter(exts: &[&str], exclude: &[&str]) -> FileFilter {
        let exts: Vec<String> = exts.iter().map(|s| s.to_string()).collect();
        let exclude: Vec<String> = exclude.iter().map(|s| s.to_string()).collect();
        FileFilter::new(&exts, &exclude)
    }

    fn touch(dir: &Path, rel: &str) -> PathBuf {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "// x\n").unwrap();
        path
    }

    fn as_strings(dir: &Path) -> Vec<String> {
        vec![dir.to_string_lossy().to_string()]
    }

    #[test]
    fn test_extension_matching() {
        let f = filter(&["cpp", ".h"], &[]);
        assert!(f.accepts(Path::new("a/b.cpp")));
        assert!(f.accepts(Path::new("a/b.h")));
        assert!(f.accepts(Path::new("a/B.CPP")));
        assert!(!f.accepts(Path::new("a/b.hpp")));
        assert!(!f.accepts(Path::new("a/Makefile")));
    }

    #[test]
    fn test_exclusion_is_substring() {
        let f = filter(&["cpp"], &["externals"]);
        assert!(f.is_excluded(Path::new("engine/externals/imgui/imgui.cpp")));
        assert!(f.is_excluded(Path::new("my_externals_copy/x.cpp")));
        assert!(!f.is_excluded(Path::new("engine/src/x.cpp")));
    }

    #[test]
    fn test_empty_exclusion_ignored() {
        let f = filter(&["cpp"], &[""]);
        assert!(f.accepts(Path::new("x.cpp")));
    }

    #[test]
    fn test_walks_directories_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let a = touch(root, "a.cpp");
        let b = touch(root, "sub/deep/b.h");
        touch(root, "sub/readme.md");
        touch(root, "externals/lib/c.cpp");

        let files = collect_files(&as_strings(root), &filter(&["cpp", "h"], &["externals"])).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_explicit_file_still_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let txt = touch(temp_dir.path(), "notes.txt");
        let cpp = touch(temp_dir.path(), "main.cpp");

        let inputs = vec![
            txt.to_string_lossy().to_string(),
            cpp.to_string_lossy().to_string(),
        ];
        let files = collect_files(&inputs, &filter(&["cpp"], &[])).unwrap();
        assert_eq!(files, vec![cpp]);
    }

    #[test]
    fn test_glob_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let a = touch(temp_dir.path(), "a.cpp");
        let b = touch(temp_dir.path(), "b.cpp");
        touch(temp_dir.path(), "c.h");

        let pattern = format!("{}/*.cpp", temp_dir.path().display());
        let files = collect_files(&[pattern], &filter(&["cpp", "h"], &[])).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let err = collect_files(&["src/[".to_string()], &filter(&["cpp"], &[])).unwrap_err();
        assert!(err.to_string().contains("Invalid file pattern"));
    }

    #[test]
    fn test_missing_path_is_skipped() {
        let files =
            collect_files(&["/nonexistent/dir".to_string()], &filter(&["cpp"], &[])).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_duplicates_removed() {
        let temp_dir = TempDir::new().unwrap();
        let a = touch(temp_dir.path(), "a.cpp");
        let mut inputs = as_strings(temp_dir.path());
        inputs.push(a.to_string_lossy().to_string());

        let files = collect_files(&inputs, &filter(&["cpp"], &[])).unwrap();
        assert_eq!(files, vec![a]);
    }

    #[test]
    fn test_existing_path_with_brackets_is_not_a_glob() {
        let temp_dir = TempDir::new().unwrap();
        let a = touch(temp_dir.path(), "Engine[old]/src/a.cpp");
        let dir = temp_dir.path().join("Engine[old]");

        let files = collect_files(&as_strings(&dir), &filter(&["cpp"], &[])).unwrap();
        assert_eq!(files, vec![a]);
    }
}
