use ai_tools_analyzer::InferenceStrategy;
use ai_tools_common::config::SystemConfig;
use ai_tools_common::error::ToolsError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_load_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("test_config.toml");

    let config_content = r#"
[server]
host = "127.0.0.1"
port = 8080
cors_allowed_origins = ["http://localhost:3000"]

[gemini]
model = "gemini-1.5-pro"
timeout_secs = 30

[limits]
max_code_chars = 20000

[analyzer]
fallback_enabled = false
inference_strategy = "classification"
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = SystemConfig::load(&config_path).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.cors_allowed_origins, vec!["http://localhost:3000"]);
    assert_eq!(config.gemini.model, "gemini-1.5-pro");
    assert_eq!(config.gemini.timeout_secs, 30);
    assert_eq!(config.limits.max_code_chars, 20_000);
    assert_eq!(config.limits.max_resume_chars, 10_000);
    assert!(!config.analyzer.fallback_enabled);
    assert_eq!(config.analyzer.inference_strategy, InferenceStrategy::Classification);
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = SystemConfig::from_toml_str("").unwrap();
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.gemini.base_url, "https://generativelanguage.googleapis.com/v1beta");
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.analyzer.inference_strategy, InferenceStrategy::RawSignals);
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = SystemConfig::from_toml_str("[server]\nport = 0\n").unwrap_err();
    assert!(
        matches!(err, ToolsError::ConfigValidation { ref field, .. } if field == "server.port")
    );

    let err =
        SystemConfig::from_toml_str("[gemini]\nbase_url = \"ftp://example.com\"\n").unwrap_err();
    assert!(
        matches!(err, ToolsError::ConfigValidation { ref field, .. } if field == "gemini.base_url")
    );

    let err = SystemConfig::from_toml_str("[limits]\nmax_code_chars = 0\n").unwrap_err();
    assert!(matches!(
        err,
        ToolsError::ConfigValidation { ref field, .. } if field == "limits.max_code_chars"
    ));
}

#[test]
fn test_unknown_strategy_is_a_parse_error() {
    let err =
        SystemConfig::from_toml_str("[analyzer]\ninference_strategy = \"vibes\"\n").unwrap_err();
    assert!(matches!(err, ToolsError::TomlError(_)));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = SystemConfig::load_or_default(temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.server.port, 5000);

    assert!(SystemConfig::load(temp_dir.path().join("absent.toml")).is_err());
}
