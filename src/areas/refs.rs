//! References (HEAD and the branch pointer)
//!
//! `HEAD` is a symbolic pointer naming the active branch
//! (`ref: refs/heads/master`). The branch file itself holds either empty
//! content (no commits yet) or the id of the latest commit on the branch.
//! Overwriting the branch file is the only mutable pointer operation in
//! the system; everything else is append-only content addressing.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

pub const DEFAULT_BRANCH: &str = "master";

/// Reference manager rooted at the metadata directory (typically `.git`)
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    /// Seed `HEAD` with the default branch pointer and create the empty
    /// branch file. Existing files are left untouched, so re-running init
    /// never rewinds a branch.
    pub fn init_head(&self) -> anyhow::Result<()> {
        if !self.head_path().exists() {
            std::fs::write(
                self.head_path(),
                format!("ref: refs/heads/{DEFAULT_BRANCH}\n"),
            )
            .context("Failed to create HEAD")?;
        }

        let branch_path = self.heads_path().join(DEFAULT_BRANCH);
        if !branch_path.exists() {
            std::fs::write(&branch_path, b"").context("Failed to create default branch file")?;
        }

        Ok(())
    }

    /// Resolve the path of the branch file `HEAD` points at
    ///
    /// A missing `HEAD` resolves to the default branch path, so reads on a
    /// freshly created directory behave like an empty repository.
    pub fn current_ref_path(&self) -> anyhow::Result<PathBuf> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(self.heads_path().join(DEFAULT_BRANCH));
        }

        let content = std::fs::read_to_string(&head_path)
            .context(format!("Unable to read HEAD at {}", head_path.display()))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        match symref_match {
            Some(symref_match) => Ok(self.path.join(&symref_match[1])),
            None => Err(anyhow::anyhow!(
                "HEAD does not name a branch: {content:?}"
            )),
        }
    }

    /// Read the current branch tip
    ///
    /// Returns `None` when the branch file is missing or empty, which means
    /// no commits have been made yet.
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let ref_path = self.current_ref_path()?;
        if !ref_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .context(format!("Unable to read ref file {}", ref_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string())?))
        }
    }

    /// Advance the current branch to a new tip
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the ref file during the update.
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let ref_path = self.current_ref_path()?;

        std::fs::create_dir_all(ref_path.parent().context(format!(
            "Invalid ref path {}",
            ref_path.display()
        ))?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&ref_path)
            .context(format!("Unable to open ref file {}", ref_path.display()))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(oid.as_ref().as_bytes())?;

        Ok(())
    }
}
