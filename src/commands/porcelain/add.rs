use crate::areas::index::LoadOutcome;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::{FileMode, IndexEntry};
use crate::artifacts::objects::blob::Blob;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Stage the given paths
    ///
    /// Best-effort, partial-success: paths that do not name an existing
    /// regular file are skipped with a warning and the rest are staged.
    pub fn add(&self, paths: &[String]) -> anyhow::Result<()> {
        let mut index = self.index();

        if index.rehydrate()? == LoadOutcome::Recovered {
            writeln!(
                self.writer(),
                "warning: index file is unreadable, starting from an empty index"
            )?;
        }

        for path in paths {
            let path = Path::new(path);

            if !self.workspace().is_regular_file(path) {
                writeln!(
                    self.writer(),
                    "warning: {} is not a regular file, skipping",
                    path.display()
                )?;
                continue;
            }

            let data = self.workspace().read_file(path)?;
            let blob = Blob::new(data);
            let oid = self.database().store(&blob)?;

            index.add(path.to_path_buf(), IndexEntry::new(oid.clone(), FileMode::Regular));

            writeln!(self.writer(), "added {} ({})", path.display(), oid.to_short_oid())?;
        }

        index.write_updates()?;

        Ok(())
    }
}
