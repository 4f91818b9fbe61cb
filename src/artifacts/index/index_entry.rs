use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// File mode/permission tag recorded for staged paths.
///
/// Only regular `rw-r--r--` files are modeled; directories never appear in
/// the flat index and executables are not distinguished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileMode {
    #[default]
    #[serde(rename = "100644")]
    Regular,
}

impl FileMode {
    pub fn as_str(&self) -> &str {
        match self {
            FileMode::Regular => "100644",
        }
    }
}

impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A staged file record: the blob id of the staged content plus its mode.
///
/// The index maps working-directory paths to these fixed-shape records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct IndexEntry {
    pub oid: ObjectId,
    pub mode: FileMode,
}
