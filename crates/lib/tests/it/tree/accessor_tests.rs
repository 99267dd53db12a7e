use cfgtree::{Config, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_string_accessors() {
    let config = setup_config();

    assert_eq!(config.get_string("name"), "app");
    assert_eq!(config.get_string("db.port"), "5432");
    assert_eq!(config.get_string("debug"), "true");
    assert_eq!(config.get_string("missing"), "");
    assert_eq!(config.get_string_or("missing", "fallback"), "fallback");
    assert_eq!(config.get_string_or("nothing", "fallback"), "fallback");
    assert_eq!(config.get_string("db"), r#"{"host":"localhost","port":5432}"#);
    assert_eq!(config.get_string("list"), r#"["x","y"]"#);
}

#[test]
fn test_int_accessors() {
    let config = config_from_json(json!({
        "port": 8080,
        "text_port": " 9090 ",
        "ratio": 2.75,
        "flag": true,
        "name": "app",
    }));

    assert_eq!(config.get_int("port"), 8080);
    assert_eq!(config.get_int("text_port"), 9090);
    assert_eq!(config.get_int("ratio"), 2);
    assert_eq!(config.get_int("flag"), 1);
    // An uncastable value falls back to the caller's default, not to 0
    assert_eq!(config.get_int_or("name", 7), 7);
    assert_eq!(config.get_int_or("missing", 3), 3);
    assert_eq!(config.get_int("missing"), 0);
}

#[test]
fn test_float_accessors() {
    let config = setup_config();

    assert_eq!(config.get_float("ratio"), 0.5);
    assert_eq!(config.get_float("db.port"), 5432.0);
    assert_eq!(config.get_float_or("name", 1.5), 1.5);
    assert_eq!(config.get_float("missing"), 0.0);
}

#[test]
fn test_bool_accessors() {
    let config = config_from_json(json!({
        "debug": true,
        "yes": "yes",
        "off": "OFF",
        "zero": 0,
        "name": "app",
    }));

    assert!(config.get_bool("debug"));
    assert!(config.get_bool("yes"));
    assert!(!config.get_bool_or("off", true));
    assert!(!config.get_bool_or("zero", true));
    assert!(config.get_bool_or("name", true));
    assert!(!config.get_bool_or("name", false));
    assert!(config.get_bool_or("missing", true));
    assert!(!config.get_bool("missing"));
}

#[test]
fn test_update_is_shallow_and_overwrites() {
    let mut config = config_from_json(json!({
        "a": {"x": 1},
        "b": 1,
    }));
    let other = config_from_json(json!({
        "a": {"y": 2},
        "c": 3,
    }));

    config.update(other);
    assert_eq!(
        Value::from(config),
        value(json!({"a": {"y": 2}, "b": 1, "c": 3}))
    );
}

#[test]
fn test_update_by_path() {
    let mut config = config_from_json(json!({
        "env": {"prod": {"db": "prod-db", "replicas": 3}},
        "db": "dev-db",
    }));

    config.update_by_path("env.prod");
    assert_eq!(config.get_string("db"), "prod-db");
    assert_eq!(config.get_int("replicas"), 3);
    assert!(config.contains_key("env.prod"));
}

#[test]
fn test_update_by_path_ignores_non_objects() {
    let mut config = setup_config();
    let before = config.clone();

    config
        .update_by_path("missing")
        .update_by_path("name")
        .update_by_path("list")
        .update_by_path("a..b");
    assert_eq!(config, before);
}

#[test]
fn test_map_helpers() {
    let config = setup_config();

    assert_eq!(config.len(), 7);
    assert!(!config.is_empty());
    assert!(config.contains_key("db.host"));
    assert!(!config.contains_key("nothing"));
    assert!(!config.contains_key("db.user"));

    let mut keys: Vec<&String> = config.keys().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["db", "debug", "list", "name", "nothing", "ratio", "users"]
    );

    assert!(Config::new().is_empty());
}

#[test]
fn test_display_is_sorted_json() {
    let config = Config::new().with("b", 1).with("a.c", "x");
    assert_eq!(config.to_string(), r#"{"a":{"c":"x"},"b":1}"#);
}
