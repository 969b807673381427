//! Tests for config loading and the precedence chain.

use super::*;
use serial_test::serial;
use std::fs;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("whirl_config_tests");
    let _ = fs::create_dir_all(&dir);
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_is_not_an_error() {
    let result = load_config_file("/nonexistent/whirl/config.toml");
    assert!(matches!(result, Ok(None)));
}

#[test]
fn empty_file_parses_to_all_none() {
    let path = temp_config("empty.toml", "");
    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config, ConfigFile::default());
    let _ = fs::remove_file(path);
}

#[test]
fn full_file_parses_all_fields() {
    let path = temp_config(
        "full.toml",
        r#"
items = 4
loop = true
center = true
rewind = false
margin = 8.0
stage_padding = 16.0
merge = true
auto_width = false
rtl = true
smart_speed = 300
drag_end_speed = 150
half_turn_bias = "short"
log_file_path = "/tmp/whirl-test.log"

[responsive.80]
items = 2
margin = 4.0
"#,
    );
    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config.items, Some(4));
    assert_eq!(config.looping, Some(true));
    assert_eq!(config.center, Some(true));
    assert_eq!(config.margin, Some(8.0));
    assert_eq!(config.stage_padding, Some(16.0));
    assert_eq!(config.rtl, Some(true));
    assert_eq!(config.smart_speed, Some(300));
    assert_eq!(config.drag_end_speed, Some(150));
    assert_eq!(config.half_turn_bias, Some(HalfTurnBias::Short));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/whirl-test.log"))
    );
    let responsive = config.responsive.unwrap();
    assert_eq!(responsive["80"].items, Some(2));
    assert_eq!(responsive["80"].margin, Some(4.0));
    let _ = fs::remove_file(path);
}

#[test]
fn merge_parses_breakpoint_keys_and_skips_bad_ones() {
    let mut responsive = BTreeMap::new();
    responsive.insert(
        "80".to_string(),
        ResponsiveOverrides {
            items: Some(2),
            ..ResponsiveOverrides::default()
        },
    );
    responsive.insert("wide".to_string(), ResponsiveOverrides::default());
    let config = ConfigFile {
        responsive: Some(responsive),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config));
    assert_eq!(resolved.options.responsive.len(), 1);
    assert_eq!(resolved.options.responsive[&80].items, Some(2));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let path = temp_config("broken.toml", "items = [not toml");
    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    let _ = fs::remove_file(path);
}

#[test]
fn unknown_fields_are_rejected() {
    let path = temp_config("unknown.toml", "does_not_exist = 1");
    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    let _ = fs::remove_file(path);
}

#[test]
fn merge_none_uses_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved.options.base, Settings::default());
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn merge_applies_set_fields_and_keeps_defaults_elsewhere() {
    let config = ConfigFile {
        items: Some(5),
        looping: Some(true),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(config));
    assert_eq!(resolved.options.base.items, 5);
    assert!(resolved.options.base.looping);
    // Unset fields keep defaults
    assert_eq!(resolved.options.base.margin, 0.0);
    assert_eq!(resolved.options.base.smart_speed, 250);
}

#[test]
fn cli_overrides_win_over_file_values() {
    let config = ConfigFile {
        items: Some(5),
        margin: Some(2.0),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(config));
    let resolved = apply_cli_overrides(
        resolved,
        CliOverrides {
            items: Some(2),
            margin: None,
            ..CliOverrides::default()
        },
    );
    assert_eq!(resolved.options.base.items, 2, "CLI should beat the file");
    assert_eq!(resolved.options.base.margin, 2.0, "unset CLI flags leave file values");
}

#[test]
#[serial(whirl_env)]
fn env_override_sets_items() {
    std::env::set_var("WHIRL_ITEMS", "7");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.options.base.items, 7);
    std::env::remove_var("WHIRL_ITEMS");
}

#[test]
#[serial(whirl_env)]
fn unparseable_env_override_is_ignored() {
    std::env::set_var("WHIRL_ITEMS", "not-a-number");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.options.base.items, Settings::default().items);
    std::env::remove_var("WHIRL_ITEMS");
}

#[test]
fn default_log_path_ends_with_whirl_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("whirl.log"),
        "Default log path should end with 'whirl.log', got: {:?}",
        path
    );
}

#[test]
fn config_file_log_path_overrides_default() {
    let config = ConfigFile {
        log_file_path: Some(PathBuf::from("/custom/path/app.log")),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(config));
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/path/app.log"));
}
