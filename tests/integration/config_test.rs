//! Configuration layering: defaults, TOML file, environment

use std::io::Write;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serial_test::serial;
use tempfile::NamedTempFile;

use cosmos_explorer::egui_app::Config;
use cosmos_explorer::shared::config::{AppConfigBuilder, ConfigError, DEFAULT_APOD_URL};

const ENV_KEYS: [&str; 5] = [
    "NASA_API_KEY",
    "COSMOS_APOD_URL",
    "COSMOS_IMAGES_URL",
    "COSMOS_DATA_DIR",
    "COSMOS_HTTP_TIMEOUT_SECS",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_file_values_override_defaults() {
    clear_env();
    let file = toml_file(
        r#"
        api_key = "FILE_KEY"
        data_dir = "/tmp/cosmos-test"
        bcrypt_cost = 6

        [image_query]
        topic = "nebula"
        media_type = "image"
        page_size = 5
        year_start = 2020
        "#,
    );

    let builder = AppConfigBuilder::from_toml_file(file.path()).unwrap().with_env().unwrap();
    let config = Config::with_builder(builder).unwrap();

    assert_eq!(config.app().api_key, "FILE_KEY");
    assert_eq!(config.app().apod_url, DEFAULT_APOD_URL);
    assert_eq!(config.app().image_query.topic, "nebula");
    assert_eq!(config.bcrypt_cost(), 6);
    assert_eq!(
        config.storage_path(),
        std::path::PathBuf::from("/tmp/cosmos-test/storage.db")
    );
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    let file = toml_file(r#"api_key = "FILE_KEY""#);
    std::env::set_var("NASA_API_KEY", "ENV_KEY");
    std::env::set_var("COSMOS_HTTP_TIMEOUT_SECS", "7");

    let builder = AppConfigBuilder::from_toml_file(file.path()).unwrap().with_env().unwrap();
    let config = builder.build().unwrap();
    clear_env();

    assert_eq!(config.api_key, "ENV_KEY");
    assert_eq!(config.http_timeout_secs, 7);
}

#[test]
#[serial]
fn test_invalid_env_url_rejected() {
    clear_env();
    std::env::set_var("COSMOS_APOD_URL", "not a url");

    let result = AppConfigBuilder::default().with_env().and_then(|builder| builder.build());
    clear_env();

    assert_matches!(result, Err(ConfigError::InvalidUrl(_)));
}

#[test]
#[serial]
fn test_unparseable_timeout_env_rejected() {
    clear_env();
    std::env::set_var("COSMOS_HTTP_TIMEOUT_SECS", "soon");

    let result = AppConfigBuilder::default().with_env();
    clear_env();

    assert_matches!(
        result,
        Err(ConfigError::InvalidEnv { key: "COSMOS_HTTP_TIMEOUT_SECS", ref value }) if value == "soon"
    );
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = toml_file("api_key = ");
    assert_matches!(
        AppConfigBuilder::from_toml_file(file.path()),
        Err(ConfigError::Parse(_))
    );
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("config.toml");
    assert_matches!(AppConfigBuilder::from_toml_file(&missing), Err(ConfigError::Read(_)));
}
