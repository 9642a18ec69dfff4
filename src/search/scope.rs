//! Which files an operation looks at.

use glob_match::glob_match;
use std::path::{Component, Path, PathBuf};

/// Glob-scoped set of files under a root directory.
///
/// Globs are matched against paths relative to the root with `/`
/// separators, and support `**` and `{a,b}` alternatives. Top-level entries
/// named in the exclusion list are never visited, nor are skipped
/// directories (the backup directory) at any depth.
#[derive(Debug, Clone)]
pub struct FileScope {
    root: PathBuf,
    glob: String,
    excluded: Vec<String>,
    skipped_dirs: Vec<PathBuf>,
}

impl FileScope {
    pub fn new(root: impl Into<PathBuf>, glob: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            glob: glob.into(),
            excluded: Vec::new(),
            skipped_dirs: Vec::new(),
        }
    }

    /// Excludes top-level entries with these names.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(names.into_iter().map(Into::into));
        self
    }

    /// Never descends into `dir`.
    pub fn skip_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skipped_dirs.push(dir.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// Tests a root-relative, `/`-separated path against the glob.
    pub fn matches(&self, relative: &str) -> bool {
        glob_match(&self.glob, relative)
            || self
                .glob
                .strip_prefix("**/")
                .is_some_and(|rest| glob_match(rest, relative))
    }

    /// Regular files in scope, sorted by path.
    pub fn files(&self) -> Vec<PathBuf> {
        let root = self.root.clone();
        let excluded = self.excluded.clone();
        let skipped = self.skipped_dirs.clone();

        let walker = ignore::WalkBuilder::new(&self.root)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_exclude(false)
            .git_global(false)
            .parents(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |e| {
                let path = e.path();
                if skipped.iter().any(|dir| path == dir) {
                    return false;
                }
                match path.strip_prefix(&root).ok().and_then(|r| r.components().next()) {
                    Some(Component::Normal(first)) => !excluded
                        .iter()
                        .any(|name| first.to_str() == Some(name.as_str())),
                    _ => true,
                }
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::debug!("Skipping entry due to error: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            if self.matches(&self.relative(path)) {
                files.push(path.to_path_buf());
            }
        }

        files
    }

    /// Root-relative display form with forward slashes.
    pub fn relative(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative.to_string_lossy().replace('\\', "/")
    }
}
