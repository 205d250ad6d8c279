use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn scanset_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scanset").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_init_then_candidates() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("app.deps.json"),
        r#"{
  "runtimeTarget": { "name": "net8.0" },
  "targets": {
    "net8.0": {
      "App/1.0.0": { "dependencies": { "Mapper": "1.0.0" } },
      "Mapper/1.0.0": {}
    }
  },
  "libraries": {
    "App/1.0.0": { "type": "project" },
    "Mapper/1.0.0": { "type": "package" }
  }
}"#,
    )
    .unwrap();

    scanset_cmd(&home)
        .current_dir(tmp.path())
        .args(["init", "--reference", "Mapper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized scanset project"));

    let manifest = fs::read_to_string(tmp.path().join("Scanset.toml")).unwrap();
    assert!(manifest.contains("deps-file = \"app.deps.json\""), "got: {manifest}");

    scanset_cmd(&home)
        .current_dir(tmp.path())
        .args(["candidates"])
        .assert()
        .success()
        .stdout("App 1.0.0\n");
}

#[test]
fn test_init_twice_fails() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(tmp.path())
        .args(["init", "-r", "Mapper"])
        .assert()
        .success();
    scanset_cmd(&home)
        .current_dir(tmp.path())
        .args(["init", "-r", "Mapper"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_requires_reference_flag() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(tmp.path())
        .args(["init"])
        .assert()
        .failure();
}
