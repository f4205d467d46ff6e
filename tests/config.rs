use listkeeper::config::Config;
use listkeeper::constants::SIDEBAR_DEFAULT_WIDTH;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.sidebar_width, SIDEBAR_DEFAULT_WIDTH);
    assert!(config.display.show_item_counts);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    config.ui.sidebar_width = 80;
    assert!(config.validate().is_err());

    config.ui.sidebar_width = 35;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("sidebar_width = 30"));
    assert!(toml_str.contains("show_item_counts = true"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 35

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.sidebar_width, 35);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert!(config.display.show_item_counts);
}

#[test]
fn test_empty_config_deserialization() {
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.sidebar_width, default_config.ui.sidebar_width);
    assert_eq!(config.display.show_item_counts, default_config.display.show_item_counts);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("listkeeper_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Listkeeper Configuration File"));
    assert!(content.contains("sidebar_width = 30"));

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;
    use std::io::Write;

    let temp_dir = std::env::temp_dir().join("listkeeper_test_invalid_config");
    let _ = fs::create_dir_all(&temp_dir);
    let config_path = temp_dir.join("config.toml");

    let mut file = fs::File::create(&config_path).unwrap();
    writeln!(file, "[ui]\nsidebar_width = 5").unwrap();

    assert!(Config::load_from_file(&config_path).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}
