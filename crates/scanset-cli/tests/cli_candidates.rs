use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
}

#[allow(deprecated)]
fn scanset_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scanset").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_candidates_lists_shop_candidates_in_order() {
    let home = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(fixtures_dir().join("shop"))
        .args(["candidates"])
        .assert()
        .success()
        .stdout("Shop.Web 1.0.0\nShop.Mapping 1.0.0\nAutoMapper.Collection 9.0.0\n")
        .stderr(predicate::str::contains("3 of 7 libraries to scan"));
}

#[test]
fn test_candidates_kind_filter() {
    let home = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(fixtures_dir().join("shop"))
        .args(["candidates", "--kind", "project"])
        .assert()
        .success()
        .stdout("Shop.Web 1.0.0\nShop.Mapping 1.0.0\n");
}

#[test]
fn test_candidates_json() {
    let home = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(fixtures_dir().join("shop"))
        .args(["candidates", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"AutoMapper.Collection\""))
        .stdout(predicate::str::contains("\"classification\": \"candidate\""))
        .stdout(predicate::str::contains("\"kind\": \"package\""));
}

#[test]
fn test_candidates_json_from_global_config() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".scanset")).unwrap();
    std::fs::write(
        home.path().join(".scanset/config.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();
    scanset_cmd(&home)
        .current_dir(fixtures_dir().join("shop"))
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_candidates_found_from_subdirectory() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    std::fs::copy(
        fixtures_dir().join("shop/shop.deps.json"),
        project.path().join("shop.deps.json"),
    )
    .unwrap();
    std::fs::copy(
        fixtures_dir().join("shop/Scanset.toml"),
        project.path().join("Scanset.toml"),
    )
    .unwrap();
    let nested = project.path().join("src").join("Shop.Web");
    std::fs::create_dir_all(&nested).unwrap();

    scanset_cmd(&home)
        .current_dir(&nested)
        .args(["candidates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shop.Mapping"));
}

#[test]
fn test_candidates_without_manifest_fails() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(tmp.path())
        .args(["candidates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find Scanset.toml"));
}

#[test]
fn test_candidates_duplicate_library_fails() {
    let home = TempDir::new().unwrap();
    scanset_cmd(&home)
        .current_dir(fixtures_dir().join("duplicate"))
        .args(["candidates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate library 'mapper'"));
}
