//! End-to-end reconcile tests
//!
//! Loads the YAML fixtures, reconciles a hand-edited file against its
//! defaults and compares the saved text with the golden output.

mod fixtures;

use std::sync::Arc;

use fixtures::{read_yaml, EXPECTED_WITH_DEFAULT, INVALID, PLUGIN_RESOURCE, USER_EDITED};
use layercfg::config::parse_header;
use layercfg::{FileConfiguration, PathAccess, Value};
use layercfg_document::{DocumentProvider, YamlProvider};

fn defaults() -> Arc<FileConfiguration> {
    let mut defaults = FileConfiguration::new();
    defaults
        .load_str(&read_yaml(PLUGIN_RESOURCE), None)
        .expect("Failed to load defaults fixture");
    Arc::new(defaults)
}

fn user_config() -> FileConfiguration {
    let mut config = FileConfiguration::new();
    config
        .load_str(&read_yaml(USER_EDITED), Some(defaults()))
        .expect("Failed to load user fixture");
    config
}

#[test]
fn test_reconcile_matches_golden() {
    let mut config = user_config();
    config.options_mut().set_copy_defaults(true);

    let saved = config.save_to_string().unwrap();
    assert_eq!(saved, read_yaml(EXPECTED_WITH_DEFAULT));
}

#[test]
fn test_reconcile_overwrites_mistyped_value() {
    let mut config = user_config();
    assert_eq!(
        config.get("wrong-type.level.c"),
        Some(&Value::String("100.001".to_string()))
    );

    config.options_mut().set_copy_defaults(true);
    config.save_to_string().unwrap();

    assert_eq!(config.get_bool("wrong-type.level.c"), Some(true));
    assert_eq!(config.get_string("wrong-type.level.b"), Some("ok".to_string()));
    assert_eq!(config.get_int("wrong-place.first"), Some(10));
}

#[test]
fn test_reconcile_is_stable() {
    let mut config = user_config();
    config.options_mut().set_copy_defaults(true);
    let first = config.save_to_string().unwrap();

    let mut reloaded = FileConfiguration::new();
    reloaded.load_str(&first, Some(defaults())).unwrap();
    reloaded.options_mut().set_copy_defaults(true);
    let second = reloaded.save_to_string().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_save_without_defaults_keeps_user_tree() {
    let mut config = user_config();
    config.options_mut().set_copy_header(false);

    let saved = config.save_to_string().unwrap();
    assert!(
        saved.starts_with("# My old header\n\n"),
        "unexpected header in {:?}",
        saved
    );

    let saved_tree = YamlProvider.parse(&saved).unwrap();
    let user_tree = YamlProvider.parse(&read_yaml(USER_EDITED)).unwrap();
    assert_eq!(saved_tree, user_tree);

    let keys: Vec<&str> = config.keys().collect();
    assert_eq!(keys, vec!["wrong-type", "custom", "name", "wrong-place"]);
}

#[test]
fn test_defaults_header_round_trips() {
    let mut config = user_config();
    let saved = config.save_to_string().unwrap();

    assert_eq!(
        parse_header(&saved),
        "Default configuration\nShipped with version 2\n"
    );
    assert_eq!(
        defaults().options().header(),
        Some("Default configuration\nShipped with version 2\n")
    );
}

#[test]
fn test_invalid_fixture_rejected() {
    let mut config = user_config();
    let err = config.load_str(&read_yaml(INVALID), None).unwrap_err();

    assert!(err.is_invalid());
    assert_eq!(config.get_string("name"), Some("mine".to_string()));
    assert!(config.defaults().is_some());
    assert_eq!(config.options().header(), Some("My old header\n"));
}

#[test]
fn test_defaults_fill_reads() {
    let config = user_config();

    assert_eq!(config.get_int_list("test-lists.numbers"), vec![1, 2]);
    assert!(config.root().get("test-lists").is_none());
    assert_eq!(config.get_int("wrong-type.level.a"), Some(1));
    assert!(config.contains("wrong-place.second"));
}
