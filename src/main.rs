use anyhow::Result;
use clap::{Parser, Subcommand};
use grit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "grit",
    version = "0.1.0",
    about = "A minimal version-control core",
    long_about = "A minimal version-control core: a content-addressed object store, \
    a staging index, and a linear commit chain. It is not a replacement for git, \
    but a small tool for understanding how its data structures work.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "Initialize a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "Stage the given files. Paths that are not regular files are skipped with a warning."
    )]
    Add {
        #[arg(required = true, help = "The files to stage")]
        files: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message"
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show staged, modified, and untracked files"
    )]
    Status,
    #[command(
        name = "sync-github",
        about = "Push the repository to a remote using the external git tool"
    )]
    SyncGithub {
        #[arg(index = 1, help = "The remote URL to push to")]
        remote_url: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::Add { files } => {
            let pwd = std::env::current_dir()?;
            let repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.add(files)?
        }
        Commands::Commit { message } => {
            let pwd = std::env::current_dir()?;
            let repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.commit(message.as_str())?
        }
        Commands::Status => {
            let pwd = std::env::current_dir()?;
            let repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.status()?
        }
        Commands::SyncGithub { remote_url } => {
            let pwd = std::env::current_dir()?;
            let repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.sync_github(remote_url)?
        }
    }

    Ok(())
}
