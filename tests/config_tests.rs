use std::io::Write;

use bedrock_codegen::error::{ConfigError, Error};
use bedrock_codegen::infrastructure::config::response::ResponseMode;
use bedrock_codegen::infrastructure::config::settings::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_from_file() {
    let file = write_temp_config(
        r#"
response_mode = "legacy"

[logging]
level = "warn"
format = "pretty"

[storage]
bucket = "another-bucket"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.response_mode, ResponseMode::Legacy);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.storage.bucket, "another-bucket");
    assert_eq!(config.inference.model_id, "anthropic.claude-v2");
}

#[test]
fn config_rejects_invalid_read_timeout() {
    let file = write_temp_config("[inference]\nread_timeout_secs = 0\n");

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "read_timeout_secs",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid read timeout error, got {err}"),
        Ok(config) => panic!(
            "Expected zero read timeout to be rejected, got {}",
            config.inference.read_timeout_secs
        ),
    }
}

#[test]
fn config_rejects_malformed_toml() {
    let file = write_temp_config("[inference\nmodel_id = ");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.storage.bucket, "bedrock-code-generation-project");
    assert_eq!(config.response_mode, ResponseMode::Structured);
}

#[test]
fn config_load_or_default_still_validates_existing_file() {
    let file = write_temp_config("[inference]\nmodel_id = \"\"\n");

    assert!(matches!(
        Config::load_or_default(file.path()),
        Err(Error::Config(ConfigError::MissingField { field: "model_id" }))
    ));
}
