use scanset_core::config::GlobalConfig;
use scanset_ops::load_project_with;
use scanset_ops::ops_why::{explain, Explanation};
use std::path::PathBuf;

fn shop_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures/shop")
}

#[test]
fn test_explain_candidate_path() {
    let project = load_project_with(&shop_dir(), GlobalConfig::default()).unwrap();
    assert_eq!(
        explain(&project.resolved, "shop.mapping"),
        Explanation::Candidate {
            path: vec!["Shop.Mapping/1.0.0".to_string(), "AutoMapper/12.0.1".to_string()]
        }
    );
}

#[test]
fn test_explain_reference_and_non_candidates() {
    let project = load_project_with(&shop_dir(), GlobalConfig::default()).unwrap();
    assert_eq!(explain(&project.resolved, "AutoMapper"), Explanation::Reference);
    assert_eq!(explain(&project.resolved, "Serilog"), Explanation::NotCandidate);
    assert_eq!(explain(&project.resolved, "System.Runtime"), Explanation::NotFound);
}
