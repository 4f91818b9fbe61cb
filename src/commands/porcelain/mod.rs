//! User-facing commands
//!
//! - `init`: initialize a new repository
//! - `add`: stage files for commit
//! - `commit`: create a new commit and advance the branch ref
//! - `status`: show working tree status
//! - `sync_github`: push the repository via the external `git` tool

pub mod add;
pub mod commit;
pub mod init;
pub mod status;
pub mod sync_github;
