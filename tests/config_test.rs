//! Configuration layering tests

use people_services_wiki::config::Config;
use people_services_wiki::error::AppError;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_override_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.search.quick_results_limit, 6);
    assert_eq!(config.clipboard.command, "xclip");
    assert_eq!(config.clipboard.feedback_duration(), Duration::from_secs(2));
}

#[test]
fn test_override_file_replaces_only_given_keys() {
    let file = config_file(
        r#"
[search]
quick_results_limit = 3

[clipboard]
command = "wl-copy"
args = []
"#,
    );
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.search.quick_results_limit, 3);
    assert_eq!(config.clipboard.command, "wl-copy");
    assert!(config.clipboard.args.is_empty());
    assert_eq!(config.clipboard.feedback_millis, 2000);
    assert!(!config.observability.json_logs);
}

#[test]
fn test_zero_limit_is_rejected() {
    let file = config_file("[search]\nquick_results_limit = 0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn test_unknown_language_is_rejected() {
    let file = config_file("[display]\ndefault_language = \"fr\"\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
}

#[test]
fn test_malformed_file_is_rejected() {
    let file = config_file("[search\nquick_results_limit = ");
    assert!(Config::load_from(file.path()).is_err());
}

#[test]
fn test_environment_overrides_file() {
    let file = config_file("[display]\ndefault_language = \"es\"\n");
    std::env::set_var("PS_WIKI__DISPLAY__DEFAULT_LANGUAGE", "pt");
    let config = Config::load_from(file.path());
    std::env::remove_var("PS_WIKI__DISPLAY__DEFAULT_LANGUAGE");

    let config = config.unwrap();
    assert_eq!(
        config.display.default_language,
        people_services_wiki::models::Language::Pt
    );
}

#[test]
fn test_effective_config_renders_as_toml() {
    let file = config_file("[observability]\nlog_level = \"debug\"\n");
    let config = Config::load_from(file.path()).unwrap();
    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("[observability]"));
    assert!(rendered.contains("log_level = \"debug\""));
    assert!(rendered.contains("quick_results_limit = 6"));
}
