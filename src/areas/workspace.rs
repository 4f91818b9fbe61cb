//! Working directory file system operations

use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Paths excluded from workspace listings, matched against every path
/// component so nested metadata directories are skipped too.
const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List every regular file under the workspace root, as paths relative
    /// to the root, excluding the version-control metadata directory at any
    /// depth. Entries come back sorted for deterministic output.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(WalkDir::new(&*self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path()))
            .collect::<Vec<_>>())
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .context(format!("Unable to read file {}", file_path.display()))?;

        Ok(Bytes::from(content))
    }

    pub fn is_regular_file(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(&self, path: &Path) -> Option<PathBuf> {
        let relative_path = path.strip_prefix(self.path.as_ref()).ok()?;

        if path.is_file() && !Self::is_ignored(relative_path) {
            Some(relative_path.to_path_buf())
        } else {
            None
        }
    }
}
