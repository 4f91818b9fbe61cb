//! Core repository components
//!
//! - `database`: content-addressed object store
//! - `index`: staging area persisted as a JSON side-file
//! - `refs`: HEAD and branch ref management
//! - `repository`: high-level composition of the above
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
