use colored::Colorize;
use std::path::PathBuf;

/// Classification of a single workspace file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileClass {
    Staged,
    Modified,
    Untracked,
}

impl From<&FileClass> for &str {
    fn from(class: &FileClass) -> Self {
        match class {
            FileClass::Staged => "A ",
            FileClass::Modified => "M ",
            FileClass::Untracked => "??",
        }
    }
}

impl std::fmt::Display for FileClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_label = match self {
            FileClass::Staged => label.green(),
            FileClass::Modified => label.red(),
            FileClass::Untracked => label.yellow(),
        };
        write!(f, "{colored_label}")
    }
}

/// Aggregated working tree status
///
/// Each bucket is sorted by path; a file appears in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub staged: Vec<PathBuf>,
    pub modified: Vec<PathBuf>,
    pub untracked: Vec<PathBuf>,
}
