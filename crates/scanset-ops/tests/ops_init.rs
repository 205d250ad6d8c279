use scanset_core::manifest::Manifest;
use scanset_ops::ops_init::init;
use tempfile::TempDir;

#[test]
fn test_init_writes_parseable_manifest() {
    let tmp = TempDir::new().unwrap();
    let path = init(tmp.path(), &["AutoMapper".to_string()]).unwrap();
    let manifest = Manifest::from_path(&path).unwrap();
    assert_eq!(manifest.scan.references, vec!["AutoMapper"]);
    assert!(manifest.scan.deps_file.is_none());
}

#[test]
fn test_init_picks_up_deps_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Shop.Web.deps.json"), "{}").unwrap();
    let path = init(tmp.path(), &["AutoMapper".to_string()]).unwrap();
    let manifest = Manifest::from_path(&path).unwrap();
    assert_eq!(manifest.scan.deps_file.as_deref(), Some("Shop.Web.deps.json"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Scanset.toml"), "# keep").unwrap();
    let err = init(tmp.path(), &["AutoMapper".to_string()]).unwrap_err();
    assert!(err.to_string().contains("already exists"), "got: {err}");
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("Scanset.toml")).unwrap(),
        "# keep"
    );
}

#[test]
fn test_init_requires_reference() {
    let tmp = TempDir::new().unwrap();
    assert!(init(tmp.path(), &[]).is_err());
    assert!(!tmp.path().join("Scanset.toml").exists());
}
