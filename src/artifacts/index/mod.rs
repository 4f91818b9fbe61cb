//! Staging area entry records

pub mod index_entry;
