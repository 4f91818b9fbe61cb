//! Command implementations
//!
//! All user-facing commands live under `porcelain`, each implemented as an
//! `impl Repository` block so they share the repository's stores and
//! output writer.

pub mod porcelain;
