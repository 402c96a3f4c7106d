//! Unit tests for configuration module

use model_bundle_gateway::config::Settings;
use std::fs;

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.bundle.root_dir, ".");
    assert_eq!(settings.bundle.proxy_script, "JSNetProxy.js");
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn test_settings_validation_valid() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validation_invalid_port() {
    let mut settings = Settings::default();
    settings.server.port = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_zero_body_limit() {
    let mut settings = Settings::default();
    settings.http.max_body_bytes = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = Settings::load_from_path(tmp.path().join("gateway.yaml")).unwrap();

    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.http.max_body_bytes, 10 * 1024 * 1024);
    assert!(settings.http.cors_enabled);
    assert!(settings.bundle.model_id.is_none());
}

#[test]
fn test_yaml_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("gateway.yaml");
    fs::write(
        &path,
        r#"
server:
  port: 9123
bundle:
  root_dir: /srv/showcase
  model_id: SxQL3iGyoDo
http:
  cors_enabled: false
logging:
  format: text
"#,
    )
    .unwrap();

    let settings = Settings::load_from_path(&path).unwrap();
    assert_eq!(settings.server.port, 9123);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.bundle.model_id.as_deref(), Some("SxQL3iGyoDo"));
    assert_eq!(settings.model_override(), Some("SxQL3iGyoDo"));
    assert!(!settings.http.cors_enabled);
    assert_eq!(settings.logging.format, "text");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_env_overrides_take_precedence() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("gateway.yaml");
    fs::write(&path, "server:\n  port: 9123\nbundle:\n  model_id: from-file\n").unwrap();

    let mut settings = Settings::load_from_path(&path).unwrap();
    settings
        .apply_env_overrides(Some("7000"), Some("from-env"))
        .unwrap();

    assert_eq!(settings.server.port, 7000);
    assert_eq!(settings.model_override(), Some("from-env"));
}

#[test]
fn test_invalid_port_override() {
    let mut settings = Settings::default();
    assert!(settings.apply_env_overrides(Some("70000"), None).is_err());
}
