//! Working tree status inspection
//!
//! Compares the working directory against the index to classify every
//! regular file as staged, modified, or untracked.
//!
//! - `inspector`: core classification logic
//! - `report`: aggregated result and display types

pub mod inspector;
pub mod report;
