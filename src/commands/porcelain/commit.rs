use crate::areas::index::LoadOutcome;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::tree::Tree;
use std::io::Write;

impl Repository {
    /// Snapshot the index into a tree, chain a commit onto the branch tip,
    /// and advance the ref to the new commit.
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        let mut index = self.index();

        if index.rehydrate()? == LoadOutcome::Recovered {
            writeln!(
                self.writer(),
                "warning: index file is unreadable, starting from an empty index"
            )?;
        }

        let tree = Tree::build(index.entries());
        let tree_oid = self.database().store(&tree)?;

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let author = Author::load_from_env();
        let message = message.trim().to_string();

        let commit = Commit::new(parent, tree_oid, author, message);
        let commit_oid = self.database().store(&commit)?;
        self.refs().update_head(&commit_oid)?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_oid.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
