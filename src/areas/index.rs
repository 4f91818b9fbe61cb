//! Staging area (index)
//!
//! The index tracks which files should be included in the next commit. It
//! is a flat mapping from working-directory path to the blob id and mode of
//! the most recently staged content at that path, persisted as JSON in
//! `.git/index.json`.
//!
//! A missing side-file means an empty index. An unparsable side-file is a
//! recoverable condition: the index loads as empty and the caller is told
//! so it can warn — previously staged state is silently discarded in that
//! case.

use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::Context;
use fake::rand;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of loading the index side-file from disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Loaded normally (including the empty/missing-file case)
    Clean,
    /// Side-file was present but unparsable; the index starts empty
    Recovered,
}

/// Staging area persisted as a JSON side-file
///
/// Entries live in a `BTreeMap`, so iteration is always sorted by path.
/// The type works fully in memory until `rehydrate`/`write_updates` touch
/// disk, which lets tests substitute an unloaded instance.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.git/index.json`)
    path: Box<Path>,
    entries: BTreeMap<PathBuf, IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing side-file yields an empty index. A present but unparsable
    /// side-file also yields an empty index, reported as
    /// `LoadOutcome::Recovered` so callers can surface a warning.
    pub fn rehydrate(&mut self) -> anyhow::Result<LoadOutcome> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(LoadOutcome::Clean);
        }

        let content = std::fs::read(&self.path)
            .context(format!("Unable to read index file {}", self.path.display()))?;

        if content.is_empty() {
            return Ok(LoadOutcome::Clean);
        }

        match serde_json::from_slice::<BTreeMap<PathBuf, IndexEntry>>(&content) {
            Ok(entries) => {
                self.entries = entries;
                Ok(LoadOutcome::Clean)
            }
            Err(_) => Ok(LoadOutcome::Recovered),
        }
    }

    /// Persist the full mapping
    ///
    /// The serialized index is written to a temp file in the same directory
    /// and renamed into place, so a reader never observes a partially
    /// written side-file.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let index_dir = self
            .path
            .parent()
            .context(format!("Invalid index path {}", self.path.display()))?;
        let temp_index_path = index_dir.join(Self::generate_temp_name());

        let content = serde_json::to_vec_pretty(&self.entries)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_index_path)
            .context(format!(
                "Unable to open index file {}",
                temp_index_path.display()
            ))?;
        file.write_all(&content).context(format!(
            "Unable to write index file {}",
            temp_index_path.display()
        ))?;

        std::fs::rename(&temp_index_path, &self.path).context(format!(
            "Unable to rename index file to {}",
            self.path.display()
        ))?;
        self.changed = false;

        Ok(())
    }

    /// Stage an entry, overwriting any previous record for the same path
    pub fn add(&mut self, path: PathBuf, entry: IndexEntry) {
        self.entries.insert(path, entry);
        self.changed = true;
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate entries sorted by path
    pub fn entries(&self) -> impl Iterator<Item = (&Path, &IndexEntry)> {
        self.entries.iter().map(|(path, entry)| (path.as_path(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn generate_temp_name() -> String {
        format!("tmp-index-{}", rand::random::<u32>())
    }
}
