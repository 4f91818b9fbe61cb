//! Tree object
//!
//! A tree is a point-in-time snapshot of the index: a flat list of
//! `{mode, path, oid}` records, one per staged path. There is no directory
//! nesting; paths are recorded verbatim.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<json entries>`
//!
//! Entries are sorted by path before serialization so that a tree id is a
//! pure function of the staged content, independent of staging order.

use crate::artifacts::index::index_entry::{FileMode, IndexEntry};
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// A single staged path inside a tree snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct TreeEntry {
    pub mode: FileMode,
    pub path: PathBuf,
    pub oid: ObjectId,
}

/// Tree object representing a snapshot of the staging area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Build a tree from index entries
    ///
    /// Accepts entries in any order; they are sorted by path so two equal
    /// mappings always produce the same object id.
    pub fn build<'e>(entries: impl Iterator<Item = (&'e Path, &'e IndexEntry)>) -> Self {
        let mut entries = entries
            .map(|(path, entry)| {
                TreeEntry::new(entry.mode, path.to_path_buf(), entry.oid.clone())
            })
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content_bytes = serde_json::to_vec_pretty(&self.entries)?;

        let mut tree_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        tree_bytes.write_all(header.as_bytes())?;
        tree_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(tree_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let entries: Vec<TreeEntry> = serde_json::from_reader(reader)?;

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
