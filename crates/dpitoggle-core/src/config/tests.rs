use std::path::PathBuf;

use super::loader::parse;
use super::template::generate_config;
use super::*;

#[test]
fn default_config_targets_visual_studio() {
    let config = Config::default();

    assert_eq!(config.target.image, "devenv.exe");
    assert_eq!(config.target.executable, None);
    assert!(config.restart.enabled);
    assert_eq!(config.restart.shutdown_timeout_secs, 30);
    assert!(config.ui.dialogs);
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[target]\nimage = \"code.exe\"\n";

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.target.image, "code.exe");
    assert!(config.restart.enabled);
    assert_eq!(config.logging, crate::log::LogConfig::default());
}

#[test]
fn executable_path_is_read() {
    let toml_str = "[target]\nexecutable = 'C:\\Tools\\app.exe'\n";

    let config = parse(toml_str).unwrap();

    assert_eq!(
        config.target.executable,
        Some(PathBuf::from("C:\\Tools\\app.exe"))
    );
    assert_eq!(config.target.image, "devenv.exe");
}

#[test]
fn validate_clamps_timeout_and_restores_blank_image() {
    let mut config = Config {
        target: TargetConfig {
            image: "   ".into(),
            executable: None,
        },
        restart: RestartConfig {
            enabled: false,
            shutdown_timeout_secs: 0,
        },
        ..Default::default()
    };

    config.validate();

    assert_eq!(config.target.image, "devenv.exe");
    assert_eq!(config.restart.shutdown_timeout_secs, 1);

    config.restart.shutdown_timeout_secs = 10_000;
    config.validate();
    assert_eq!(config.restart.shutdown_timeout_secs, 600);
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(parse("[restart]\nenabled = \"sometimes\"\n").is_err());
}

#[test]
fn template_parses_to_defaults() {
    // Act
    let config = parse(&generate_config()).unwrap();

    // Assert
    assert_eq!(config, Config::default());
}

#[test]
fn image_that_breaks_out_of_the_key_line_falls_back_to_default() {
    // Arrange
    let toml_str = r#"[target]
image = "devenv.exe]\r\n[HKEY_LOCAL_MACHINE\\SOFTWARE\\Evil]\r\n\"Debugger\"=\"cmd.exe\""
"#;

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.target.image, "devenv.exe");
    let target = crate::RegistryTarget::new(config.target.image.as_str()).unwrap();
    let script = crate::RegistryScript::new(&target, crate::DpiAwarenessFlag::Aware).render();
    assert_eq!(script.matches("[HKEY_LOCAL_MACHINE").count(), 1);
    assert!(!script.contains("Debugger"));
}

#[test]
fn relative_image_path_falls_back_to_default() {
    let config = parse("[target]\nimage = '..\\Winlogon'\n").unwrap();

    assert_eq!(config.target.image, "devenv.exe");
}

#[test]
fn validate_caps_log_file_size() {
    let mut config = Config::default();
    config.logging.max_file_mb = u64::MAX;

    config.validate();

    assert_eq!(config.logging.max_file_mb, 1024);
}
