use crate::areas::index::LoadOutcome;
use crate::areas::repository::Repository;
use crate::artifacts::status::inspector::Inspector;
use crate::artifacts::status::report::FileClass;
use std::io::Write;

impl Repository {
    /// Classify every workspace file as staged, modified, or untracked
    ///
    /// Read-only: neither the index nor the object database is written.
    pub fn status(&self) -> anyhow::Result<()> {
        let mut index = self.index();

        if index.rehydrate()? == LoadOutcome::Recovered {
            writeln!(
                self.writer(),
                "warning: index file is unreadable, reporting against an empty index"
            )?;
        }

        let report = Inspector::new(self.workspace(), &index).report()?;

        for path in &report.staged {
            writeln!(self.writer(), "{} {}", FileClass::Staged, path.display())?;
        }
        for path in &report.modified {
            writeln!(self.writer(), "{} {}", FileClass::Modified, path.display())?;
        }
        for path in &report.untracked {
            writeln!(self.writer(), "{} {}", FileClass::Untracked, path.display())?;
        }

        Ok(())
    }
}
