use crate::errors::{Error, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Directories the Go toolchain never treats as part of a package tree
const SKIPPED_DIRS: &[&str] = &["vendor", "testdata"];

pub struct FileWalker {
    root: PathBuf,
    include_tests: bool,
    ignore_patterns: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            include_tests: true,
            ignore_patterns: vec![],
        }
    }

    pub fn with_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = include_tests;
        self
    }

    /// Skip paths matching any of `patterns`, matched against both the full
    /// path and the path relative to the root. An invalid pattern is an error.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore_patterns = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    /// Collect the `.go` files under the root, sorted by path
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(if self.should_process(&self.root) {
                vec![self.root.clone()]
            } else {
                vec![]
            });
        }
        if !self.root.exists() {
            return Err(Error::io(
                &self.root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "path does not exist"),
            ));
        }

        let mut files = Vec::new();
        let root = self.root.clone();
        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir
                    && entry.path() != root
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| SKIPPED_DIRS.contains(&name)))
            })
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if path.extension().and_then(|ext| ext.to_str()) != Some("go") {
            return false;
        }

        let is_test = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with("_test.go"));
        if is_test && !self.include_tests {
            return false;
        }

        // Patterns may be written relative to the walk root or as full paths
        let full = path.to_string_lossy();
        let relative = path
            .strip_prefix(&self.root)
            .map(|rel| rel.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default();
        !self
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.matches(&full) || pattern.matches(&relative))
    }
}

pub fn find_go_files(root: &Path, include_tests: bool, exclude: &[String]) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_tests(include_tests)
        .with_ignore_patterns(exclude)?
        .walk()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "package p\n").unwrap();
    }

    fn relative(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
        files
            .into_iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_walk_collects_go_files_sorted() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b/b.go");
        touch(temp.path(), "a/a.go");
        touch(temp.path(), "a/README.md");

        let files = find_go_files(temp.path(), true, &[]).unwrap();
        assert_eq!(relative(temp.path(), files), vec!["a/a.go", "b/b.go"]);
    }

    #[test]
    fn test_walk_skips_vendor_testdata_and_hidden() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "main.go");
        touch(temp.path(), "vendor/dep/dep.go");
        touch(temp.path(), "testdata/fixture.go");
        touch(temp.path(), ".cache/gen.go");

        let files = find_go_files(temp.path(), true, &[]).unwrap();
        assert_eq!(relative(temp.path(), files), vec!["main.go"]);
    }

    #[test]
    fn test_walk_tests_toggle() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "req.go");
        touch(temp.path(), "req_test.go");

        assert_eq!(find_go_files(temp.path(), true, &[]).unwrap().len(), 2);
        let without = find_go_files(temp.path(), false, &[]).unwrap();
        assert_eq!(relative(temp.path(), without), vec!["req.go"]);
    }

    #[test]
    fn test_walk_exclude_patterns() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "api/req.go");
        touch(temp.path(), "gen/models.go");

        let files = find_go_files(temp.path(), true, &["gen/**".to_string()])
            .unwrap();
        assert_eq!(relative(temp.path(), files), vec!["api/req.go"]);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let temp = TempDir::new().unwrap();
        let err = find_go_files(temp.path(), true, &["[".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let err = find_go_files(&temp.path().join("absent"), true, &[]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
