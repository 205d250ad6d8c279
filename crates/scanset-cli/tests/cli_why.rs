use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn shop_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures/shop")
}

#[allow(deprecated)]
fn scanset_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scanset").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_why_candidate_prints_path() {
    let home = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(shop_dir())
        .args(["why", "shop.web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop.web is a candidate:"))
        .stdout(predicate::str::contains("Shop.Web/1.0.0\n  AutoMapper/12.0.1"));
}

#[test]
fn test_why_reference() {
    let home = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(shop_dir())
        .args(["why", "AutoMapper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AutoMapper is a reference library."));
}

#[test]
fn test_why_not_candidate() {
    let home = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(shop_dir())
        .args(["why", "Serilog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Serilog is not a candidate"));
}

#[test]
fn test_why_unknown_library() {
    let home = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(shop_dir())
        .args(["why", "Newtonsoft.Json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found in the dependency manifest"));
}
