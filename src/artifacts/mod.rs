//! Core data structures
//!
//! - `index`: staging area entry records
//! - `objects`: object types (blob, tree, commit)
//! - `status`: working tree status inspection

pub mod index;
pub mod objects;
pub mod status;
