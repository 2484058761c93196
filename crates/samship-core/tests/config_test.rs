use samship_core::SamshipConfig;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = SamshipConfig::load(tmp.path()).unwrap();

    assert_eq!(config.sam.binary, "sam");
    assert_eq!(config.sam.template, Path::new("template.yaml"));
    assert_eq!(config.paths.environments_dir, Path::new("environments"));
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[sam]
binary = "/opt/sam/bin/sam"
template = "infra/template.yaml"

[paths]
environments_dir = "infra/environments"
"#;
    std::fs::write(tmp.path().join("samship.toml"), toml).unwrap();

    let config = SamshipConfig::load(tmp.path()).unwrap();

    assert_eq!(config.sam.binary, "/opt/sam/bin/sam");
    assert_eq!(config.sam.template, Path::new("infra/template.yaml"));
    assert_eq!(
        config.paths.environments_dir,
        Path::new("infra/environments")
    );
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("samship.toml"),
        "[sam]\nbinary = \"sam-beta\"\n",
    )
    .unwrap();

    let config = SamshipConfig::load(tmp.path()).unwrap();

    assert_eq!(config.sam.binary, "sam-beta");
    assert_eq!(config.sam.template, Path::new("template.yaml"));
    assert_eq!(config.paths.environments_dir, Path::new("environments"));
}

#[test]
fn load_invalid_toml_returns_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("samship.toml"), "[sam\nbinary = ").unwrap();

    let err = SamshipConfig::load(tmp.path()).unwrap_err();
    assert!(
        matches!(err, samship_core::Error::ConfigParse { .. }),
        "got: {err}"
    );
}
