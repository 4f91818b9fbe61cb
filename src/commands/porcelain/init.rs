use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create refs/heads directory")?;

        self.refs()
            .init_head()
            .context("Failed to create initial HEAD reference")?;

        // seed an empty JSON index unless one already exists
        let index = self.index();
        if !index.path().exists() {
            fs::write(index.path(), b"{}").context("Failed to create index file")?;
        }

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
