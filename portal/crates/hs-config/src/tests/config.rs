use crate::tests::{EnvGuard, setup_config_dir};
use crate::{CONFIG_DIR_ENV, CONFIG_FILENAME, Config, ConfigError, DEFAULT_CONFIG_DIR};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.api.base_url.as_str(),
        eq(crate::DEFAULT_API_BASE_URL)
    );
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_API_TIMEOUT_SECS));
    assert_that!(
        config.storage.session_file.as_str(),
        eq(crate::DEFAULT_SESSION_FILENAME)
    );
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("heritage");
    let _guard = EnvGuard::set(CONFIG_DIR_ENV, nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(CONFIG_FILENAME),
        r#"
              [api]
              base_url = "https://api.heritageshipping.com"
              timeout_secs = 10

              [storage]
              session_file = "state/session.json"

              [logging]
              level = "debug"
              colored = false
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://api.heritageshipping.com")
    );
    assert_that!(config.api.timeout_secs, eq(10));
    assert_that!(
        config.storage.session_file.as_str(),
        eq("state/session.json")
    );
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_partial_toml_when_load_then_missing_sections_use_defaults() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join(CONFIG_FILENAME), "[api]\ntimeout_secs = 5").unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(5));
    assert_that!(
        config.api.base_url.as_str(),
        eq(crate::DEFAULT_API_BASE_URL)
    );
    assert!(config.logging.file.is_none());
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(CONFIG_FILENAME),
        "[api]\nbase_url = \"http://toml:8000\"",
    )
    .unwrap();
    let _url = EnvGuard::set("HS_API_BASE_URL", "http://env:9000");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://env:9000"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("HS_API_TIMEOUT_SECS", "45");
    let _file = EnvGuard::set("HS_STORAGE_SESSION_FILE", "other.json");
    let _level = EnvGuard::set("HS_LOG_LEVEL", "trace");
    let _colored = EnvGuard::set("HS_LOG_COLORED", "false");
    let _log_file = EnvGuard::set("HS_LOG_FILE", "heritage.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(45));
    assert_that!(config.storage.session_file.as_str(), eq("other.json"));
    assert_that!(*config.logging.level, eq(LevelFilter::Trace));
    assert_that!(config.logging.colored, eq(false));
    assert_eq!(config.logging.file.as_deref(), Some("heritage.log"));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_previous_value() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("HS_API_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_API_TIMEOUT_SECS));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join(CONFIG_FILENAME), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_log_file_with_parent_dir_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _log_file = EnvGuard::set("HS_LOG_FILE", "../escape.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

// =========================================================================
// Path Tests
// =========================================================================

#[test]
#[serial]
fn given_config_dir_env_when_session_path_then_joined_under_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.session_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("session.json"));
}

#[test]
#[serial]
fn given_no_log_file_when_log_file_path_then_none() {
    let _temp = setup_config_dir();
    let config = Config::load().unwrap();

    assert!(config.log_file_path().unwrap().is_none());
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_under_log_dir() {
    let (temp, _guard) = setup_config_dir();
    let _log_file = EnvGuard::set("HS_LOG_FILE", "portal.log");
    let config = Config::load().unwrap();

    let path = config.log_file_path().unwrap().unwrap();
    assert_eq!(path, temp.path().join("log").join("portal.log"));
}

#[test]
#[serial]
fn given_no_env_when_config_dir_then_relative_to_cwd() {
    let _guard = EnvGuard::remove(CONFIG_DIR_ENV);

    let dir = Config::config_dir().unwrap();

    assert!(dir.ends_with(DEFAULT_CONFIG_DIR));
}
