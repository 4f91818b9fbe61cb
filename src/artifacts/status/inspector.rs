use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::report::StatusReport;
use derive_new::new;

/// Read-only status classifier
///
/// Borrows the workspace and index; never writes to either, and never
/// touches the object database — blob ids are recomputed from workspace
/// bytes instead of read back from storage.
#[derive(new)]
pub struct Inspector<'a> {
    workspace: &'a Workspace,
    index: &'a Index,
}

impl Inspector<'_> {
    /// Classify every regular file under the workspace root
    ///
    /// - not present in the index: untracked
    /// - present, but the recomputed blob id differs: modified
    /// - present and identical: staged
    pub fn report(&self) -> anyhow::Result<StatusReport> {
        let mut report = StatusReport::default();

        for path in self.workspace.list_files()? {
            let data = self.workspace.read_file(&path)?;
            let oid = Blob::new(data).object_id()?;

            match self.index.entry_by_path(&path) {
                None => report.untracked.push(path),
                Some(entry) if entry.oid != oid => report.modified.push(path),
                Some(_) => report.staged.push(path),
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::index::index_entry::{FileMode, IndexEntry};
    use rstest::rstest;
    use std::path::PathBuf;

    fn staged_oid(content: &[u8]) -> crate::artifacts::objects::object_id::ObjectId {
        Blob::new(bytes::Bytes::copy_from_slice(content))
            .object_id()
            .unwrap()
    }

    // In-memory index over a real temp workspace: the index side-file is
    // never written, which also demonstrates store substitution in tests.
    fn setup() -> (assert_fs::TempDir, Workspace, Index) {
        let dir = assert_fs::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());
        let index = Index::new(dir.path().join(".git/index.json").into_boxed_path());
        (dir, workspace, index)
    }

    #[rstest]
    fn classifies_staged_modified_and_untracked() {
        let (dir, workspace, mut index) = setup();
        std::fs::write(dir.path().join("staged.txt"), b"hello").unwrap();
        std::fs::write(dir.path().join("edited.txt"), b"hello!").unwrap();
        std::fs::write(dir.path().join("new.txt"), b"fresh").unwrap();

        index.add(
            PathBuf::from("staged.txt"),
            IndexEntry::new(staged_oid(b"hello"), FileMode::Regular),
        );
        // recorded oid no longer matches the workspace bytes
        index.add(
            PathBuf::from("edited.txt"),
            IndexEntry::new(staged_oid(b"hello"), FileMode::Regular),
        );

        let report = Inspector::new(&workspace, &index).report().unwrap();

        pretty_assertions::assert_eq!(report.staged, vec![PathBuf::from("staged.txt")]);
        pretty_assertions::assert_eq!(report.modified, vec![PathBuf::from("edited.txt")]);
        pretty_assertions::assert_eq!(report.untracked, vec![PathBuf::from("new.txt")]);
    }

    #[rstest]
    fn metadata_directory_never_appears_in_the_report() {
        let (dir, workspace, index) = setup();
        std::fs::create_dir_all(dir.path().join(".git/objects/ab")).unwrap();
        std::fs::write(dir.path().join(".git/objects/ab/cdef"), b"object").unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/file.txt"), b"content").unwrap();

        let report = Inspector::new(&workspace, &index).report().unwrap();

        pretty_assertions::assert_eq!(report.untracked, vec![PathBuf::from("nested/file.txt")]);
        assert!(report.staged.is_empty());
        assert!(report.modified.is_empty());
    }

    #[rstest]
    fn report_does_not_touch_index_or_database() {
        let (dir, workspace, mut index) = setup();
        std::fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        index.add(
            PathBuf::from("a.txt"),
            IndexEntry::new(staged_oid(b"hello"), FileMode::Regular),
        );

        Inspector::new(&workspace, &index).report().unwrap();

        // no blob was written for the hashed workspace file
        let objects = std::fs::read_dir(dir.path().join(".git/objects"))
            .unwrap()
            .count();
        pretty_assertions::assert_eq!(objects, 0);
        assert!(!dir.path().join(".git/index.json").exists());
    }
}
