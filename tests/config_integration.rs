//! Configuration loading from disk and from the environment override

use serial_test::serial;
use std::io::Write;
use superhet_rs::analysis::WindowFunction;
use superhet_rs::config::{config_path, AppConfig, CONFIG_ENV_VAR};
use superhet_rs::i18n::Language;
use superhet_rs::{PipelineInput, SuperhetError};

struct EnvGuard;

impl EnvGuard {
    fn set(value: &std::path::Path) -> Self {
        std::env::set_var(CONFIG_ENV_VAR, value);
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(CONFIG_ENV_VAR);
    }
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[parameters]
signal_frequency_hz = 5
heterodyne_frequency_hz = 110
noise_amplitude_percent = 35

[ui]
dark_mode = false
language = "ru"
spectrum_window = "Blackman"
"#,
    );

    let config = AppConfig::load_from(file.path()).unwrap();
    assert_eq!(
        config.parameters.to_input().unwrap(),
        PipelineInput::new(5, 110, 35).unwrap()
    );
    assert!(!config.ui.dark_mode);
    assert_eq!(config.ui.language, Language::Russian);
    assert_eq!(config.ui.spectrum_window, WindowFunction::Blackman);
    assert!(config.ui.show_grid);
}

#[test]
fn test_missing_file_is_an_error_for_load_from() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load_from(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read config file"));
    match err {
        SuperhetError::WithContext { source, .. } => match *source {
            SuperhetError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected an IO error, got {:?}", other),
        },
        other => panic!("expected context, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let file = write_config("[parameters\nsignal_frequency_hz = ");
    let err = AppConfig::load_from(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_env_var_selects_config_file() {
    let file = write_config("[parameters]\nsignal_frequency_hz = 12\n");
    let _guard = EnvGuard::set(file.path());

    assert_eq!(config_path().as_deref(), Some(file.path()));
    let config = AppConfig::load().unwrap();
    assert_eq!(config.parameters.signal_frequency_hz, 12);
    assert_eq!(config.parameters.heterodyne_frequency_hz, 90);
}

#[test]
#[serial]
fn test_env_var_pointing_at_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let _guard = EnvGuard::set(&dir.path().join("config.toml"));

    assert_eq!(AppConfig::load().unwrap(), AppConfig::default());
}

#[test]
#[serial]
fn test_load_or_default_sanitizes_out_of_range_values() {
    let file = write_config(
        r#"
[parameters]
signal_frequency_hz = 45
heterodyne_frequency_hz = 95
noise_amplitude_percent = 50

[ui]
font_scale = 12.0
"#,
    );
    let _guard = EnvGuard::set(file.path());

    let config = AppConfig::load_or_default();
    assert_eq!(config.parameters.signal_frequency_hz, 15);
    assert_eq!(config.parameters.heterodyne_frequency_hz, 90);
    assert_eq!(config.parameters.noise_amplitude_percent, 50);
    assert_eq!(config.ui.font_scale, 1.0);
}

#[test]
#[serial]
fn test_load_or_default_survives_malformed_file() {
    let file = write_config("not = [valid");
    let _guard = EnvGuard::set(file.path());

    assert_eq!(AppConfig::load_or_default(), AppConfig::default());
}
