//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. There are
//! three types:
//!
//! - **Blob**: file content (raw bytes)
//! - **Tree**: flat snapshot of staged paths, modes, and object IDs
//! - **Commit**: snapshot with metadata (author, message, parent, tree)
//!
//! All objects serialize to the format `<type> <size>\0<content>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
