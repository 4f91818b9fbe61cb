mod common;

use assert_fs::prelude::{FileWriteStr, PathChild};
use grit::artifacts::objects::object_type::ObjectType;
use predicates::prelude::predicate;

#[test]
fn add_stages_a_file_and_stores_its_blob() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());
    dir.child("a.txt").write_str("hello")?;

    common::grit(dir.path())
        .arg("add")
        .arg("a.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("added a.txt"));

    let index = common::index_json(dir.path());
    let entry = &index["a.txt"];
    assert_eq!(entry["mode"], "100644");

    let oid = entry["oid"].as_str().expect("oid should be a string");
    assert_eq!(oid.len(), 40);

    let (object_type, payload) = common::load_object(dir.path(), oid);
    assert_eq!(object_type, ObjectType::Blob);
    assert_eq!(payload, b"hello");

    Ok(())
}

#[test]
fn staging_an_unchanged_file_twice_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());
    dir.child("a.txt").write_str("hello")?;

    common::grit(dir.path())
        .arg("add")
        .arg("a.txt")
        .assert()
        .success();
    let first_index = std::fs::read(dir.child(".git/index.json").path())?;

    common::grit(dir.path())
        .arg("add")
        .arg("a.txt")
        .assert()
        .success();
    let second_index = std::fs::read(dir.child(".git/index.json").path())?;

    pretty_assertions::assert_eq!(first_index, second_index);

    // the file still reads as staged, not modified
    common::grit(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("A  a.txt"));

    Ok(())
}

#[test]
fn staging_a_non_file_path_is_skipped_with_a_warning() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());
    std::fs::create_dir(dir.child("some_dir").path())?;
    dir.child("real.txt").write_str("content")?;

    common::grit(dir.path())
        .arg("add")
        .arg("some_dir")
        .arg("missing.txt")
        .arg("real.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: some_dir is not a regular file, skipping",
        ))
        .stdout(predicate::str::contains(
            "warning: missing.txt is not a regular file, skipping",
        ))
        .stdout(predicate::str::contains("added real.txt"));

    let index = common::index_json(dir.path());
    assert!(index.get("real.txt").is_some());
    assert!(index.get("some_dir").is_none());
    assert!(index.get("missing.txt").is_none());

    Ok(())
}

#[test]
fn restaging_a_changed_file_updates_its_oid() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());
    dir.child("a.txt").write_str("hello")?;

    common::grit(dir.path())
        .arg("add")
        .arg("a.txt")
        .assert()
        .success();
    let first_oid = common::index_json(dir.path())["a.txt"]["oid"].clone();

    dir.child("a.txt").write_str("hello!")?;
    common::grit(dir.path())
        .arg("add")
        .arg("a.txt")
        .assert()
        .success();
    let second_oid = common::index_json(dir.path())["a.txt"]["oid"].clone();

    assert_ne!(first_oid, second_oid);

    Ok(())
}

#[test]
fn corrupt_index_recovers_with_a_warning() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_repo(dir.path());
    std::fs::write(dir.child(".git/index.json").path(), b"{ not json")?;
    dir.child("a.txt").write_str("hello")?;

    common::grit(dir.path())
        .arg("add")
        .arg("a.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: index file is unreadable"));

    let index = common::index_json(dir.path());
    assert!(index.get("a.txt").is_some());

    Ok(())
}
