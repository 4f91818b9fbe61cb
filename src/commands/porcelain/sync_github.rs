use crate::areas::repository::Repository;
use std::io::Write;
use std::process::Command;

const SYNC_COMMIT_MESSAGE: &str = "sync";

impl Repository {
    /// Push the working directory to a remote via the external `git` tool
    ///
    /// This is a boundary delegate: every step is a subprocess invocation
    /// and its exit code is treated as an opaque success/failure signal.
    /// The first failing step is reported through the writer and the sync
    /// ends without retry.
    pub fn sync_github(&self, remote_url: &str) -> anyhow::Result<()> {
        // init-if-absent: a real git repository keeps its config here
        if !self.path().join(".git/config").exists()
            && !self.run_git_step(&["init"])?
        {
            return Ok(());
        }

        let steps: &[&[&str]] = &[
            &["add", "-A"],
            &["commit", "-m", SYNC_COMMIT_MESSAGE],
            &["branch", "-M", "master"],
            &["remote", "add", "origin", remote_url],
            &["push", "-u", "origin", "master"],
        ];

        for step in steps {
            if !self.run_git_step(step)? {
                return Ok(());
            }
        }

        writeln!(self.writer(), "Synced with {remote_url}")?;

        Ok(())
    }

    fn run_git_step(&self, args: &[&str]) -> anyhow::Result<bool> {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output();

        match output {
            Ok(output) if output.status.success() => Ok(true),
            Ok(output) => {
                writeln!(
                    self.writer(),
                    "sync-github: `git {}` failed: {}",
                    args.join(" "),
                    String::from_utf8_lossy(&output.stderr).trim()
                )?;
                Ok(false)
            }
            Err(error) => {
                writeln!(
                    self.writer(),
                    "sync-github: unable to run `git {}`: {error}",
                    args.join(" ")
                )?;
                Ok(false)
            }
        }
    }
}
