use scanset_core::config::{dirs_path, GlobalConfig, OutputFormat};
use tempfile::TempDir;

#[test]
fn test_global_config_defaults() {
    let config = GlobalConfig::default();
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.scan.extra_references.is_empty());
}

#[test]
fn test_global_config_parse_from_toml() {
    let toml = r#"
[output]
format = "json"

[scan]
extra-references = ["Microsoft.Extensions.DependencyInjection"]
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(
        config.scan.extra_references,
        vec!["Microsoft.Extensions.DependencyInjection"]
    );
}

#[test]
fn test_global_config_empty_toml_is_default() {
    let config: GlobalConfig = toml::from_str("").unwrap();
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn test_load_from_missing_file_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&tmp.path().join("config.toml")).unwrap();
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn test_load_from_invalid_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"), "got: {err}");
}

#[test]
fn test_dirs_path_contains_scanset() {
    assert!(dirs_path().ends_with(".scanset"));
}
