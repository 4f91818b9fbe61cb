#![allow(dead_code)]

use assert_cmd::Command;
use grit::areas::database::Database;
use grit::artifacts::objects::object_id::ObjectId;
use grit::artifacts::objects::object_type::ObjectType;
use std::path::Path;

/// Build a `grit` command rooted in the given directory, with colored
/// output disabled so assertions can match plain text.
pub fn grit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("grit").expect("grit binary should build");
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

pub fn init_repo(dir: &Path) {
    grit(dir).arg("init").assert().success();
}

/// Read the current branch tip from the ref file ("" means no commits)
pub fn branch_tip(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".git/refs/heads/master"))
        .expect("branch ref file should exist")
        .trim()
        .to_string()
}

/// Load and decompress an object through the database read-back path
pub fn load_object(dir: &Path, oid: &str) -> (ObjectType, Vec<u8>) {
    let database = Database::new(dir.join(".git/objects").into_boxed_path());
    let oid = ObjectId::try_parse(oid.to_string()).expect("oid should be valid");
    let (object_type, payload) = database.load(&oid).expect("object should load");
    (object_type, payload.to_vec())
}

pub fn index_json(dir: &Path) -> serde_json::Value {
    let content =
        std::fs::read(dir.join(".git/index.json")).expect("index side-file should exist");
    serde_json::from_slice(&content).expect("index side-file should be valid JSON")
}

/// Recursively list every file under a directory, relative to it
pub fn list_files_under(dir: &Path) -> Vec<String> {
    let mut files = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .unwrap()
                .display()
                .to_string()
        })
        .collect::<Vec<_>>();
    files.sort();
    files
}
