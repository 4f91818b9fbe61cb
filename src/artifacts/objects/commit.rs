//! Commit object
//!
//! Commits link a tree snapshot to history. Each commit references a tree
//! object, an optional parent commit, author metadata, and a message;
//! together they form a singly-linked list walked via `parent`.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::io::{BufRead, Write};

const DEFAULT_AUTHOR_NAME: &str = "Anonymous";
const DEFAULT_AUTHOR_EMAIL: &str = "anonymous@localhost";

/// Author information: name, email, and timestamp with timezone.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    /// Create a new author stamped with the current wall-clock time
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Load author information from `GIT_AUTHOR_NAME`/`GIT_AUTHOR_EMAIL`,
    /// falling back to fixed defaults when unset.
    pub fn load_from_env() -> Self {
        let name =
            std::env::var("GIT_AUTHOR_NAME").unwrap_or_else(|_| DEFAULT_AUTHOR_NAME.to_string());
        let email =
            std::env::var("GIT_AUTHOR_EMAIL").unwrap_or_else(|_| DEFAULT_AUTHOR_EMAIL.to_string());

        Author::new(name, email)
    }

    /// Format the full author line: `Name <email> <unix-ts> <tz>`
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Format: "name <email> timestamp timezone"
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(anyhow::anyhow!("Invalid author format"));
        }

        let timezone = parts[0];
        let unix_timestamp = parts[1];
        let name_email_part = parts[2];

        let email_start = name_email_part
            .find('<')
            .context("Invalid author format: missing '<'")?;
        let email_end = name_email_part
            .find('>')
            .context("Invalid author format: missing '>'")?;

        let name = name_email_part[..email_start].trim().to_string();
        let email = name_email_part[email_start + 1..email_end].to_string();

        let timestamp = chrono::DateTime::parse_from_str(
            &format!("{unix_timestamp} {timezone}"),
            "%s %z",
        )
        .context("Invalid author timestamp")?;

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }
}

/// Commit object linking a tree to the chain of history
///
/// Commits are immutable once stored; history only grows by appending a new
/// commit whose parent is the previous branch tip.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit ID (None for the root commit)
    parent: Option<ObjectId>,
    /// Tree object ID representing the staged snapshot
    tree_oid: ObjectId,
    author: Author,
    message: String,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        tree_oid: ObjectId,
        author: Author,
        message: String,
    ) -> Self {
        Commit {
            parent,
            tree_oid,
            author,
            message,
        }
    }

    /// First line of the commit message, for short-form display
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        object_content.push(format!("tree {}", self.tree_oid.as_ref()));
        if let Some(parent) = &self.parent {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        object_content.push(format!("author {}", self.author.display()));
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let content_bytes = object_content.join("\n").into_bytes();

        let mut commit_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let tree_line = lines
            .next()
            .context("Invalid commit object: missing tree line")?;
        let tree_oid = tree_line
            .strip_prefix("tree ")
            .context("Invalid commit object: invalid tree line")?
            .to_string();
        let tree_oid = ObjectId::try_parse(tree_oid)?;

        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing author line")?;

        let mut parent = None;
        if let Some(parent_oid) = next_line.strip_prefix("parent ") {
            parent = Some(ObjectId::try_parse(parent_oid.to_string())?);
            next_line = lines
                .next()
                .context("Invalid commit object: missing author line")?;
        }

        let author = next_line
            .strip_prefix("author ")
            .context("Invalid commit object: invalid author line")?;
        let author = Author::try_from(author)?;

        // skip the blank separator line
        lines.next();

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new(parent, tree_oid, author, message))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
