use std::borrow::Cow;

use cfgtree::{Config, TreeError, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_direct_reads() {
    let config = setup_config();

    assert_eq!(*config.get("name").unwrap(), Value::from("app"));
    assert_eq!(*config.get("db.port").unwrap(), Value::Int(5432));
    assert_eq!(*config.get("ratio").unwrap(), Value::Float(0.5));
    assert_eq!(*config.get("debug").unwrap(), Value::Bool(true));
    assert_eq!(*config.get("users.1.name").unwrap(), Value::from("b"));
    assert_eq!(*config.get("list.0").unwrap(), Value::from("x"));

    let db = config.get("db").unwrap();
    assert!(db.as_object().is_some());
}

#[test]
fn test_direct_reads_borrow_from_tree() {
    let config = setup_config();
    assert!(matches!(config.get("db.host"), Ok(Cow::Borrowed(_))));
    assert!(matches!(config.get("users.*.name"), Ok(Cow::Owned(_))));
}

#[test]
fn test_wildcard_fan_out_preserves_array_order() {
    let config = config_from_json(json!({
        "users": [{"name": "a"}, {"name": "b"}]
    }));

    let names = config.get("users.*.name").unwrap().into_owned();
    assert_eq!(names, value(json!(["a", "b"])));
}

#[test]
fn test_array_fan_out_tokens_are_synonyms() {
    let config = setup_config();
    let expected = value(json!(["a", "b"]));

    assert_eq!(config.get("users.*.name").unwrap().into_owned(), expected);
    assert_eq!(config.get("users.$.name").unwrap().into_owned(), expected);
    assert_eq!(config.get("users.+.name").unwrap().into_owned(), expected);
}

#[test]
fn test_nested_fan_out() {
    let config = setup_config();
    assert_eq!(
        config.get("users.*.roles").unwrap().into_owned(),
        value(json!([["admin", "dev"], ["dev"]]))
    );
    assert_eq!(
        config.get("users.*.roles.0").unwrap().into_owned(),
        value(json!(["admin", "dev"]))
    );
}

#[test]
fn test_fan_out_skips_failures() {
    let config = config_from_json(json!({
        "users": [{"name": "a"}, {"id": 2}, "scalar", {"name": "c"}]
    }));
    assert_eq!(
        config.get("users.*.name").unwrap().into_owned(),
        value(json!(["a", "c"]))
    );

    // Object fan-out: only `db` has a `host`; arrays reject key segments
    let config = setup_config();
    assert_eq!(
        config.get("*.host").unwrap().into_owned(),
        value(json!(["localhost"]))
    );
}

#[test]
fn test_terminal_wildcard_returns_container() {
    let config = setup_config();

    assert_eq!(config.get("list.*").unwrap().into_owned(), value(json!(["x", "y"])));
    assert_eq!(config.get("list.$").unwrap().into_owned(), value(json!(["x", "y"])));
    assert_eq!(
        config.get("db.*").unwrap().into_owned(),
        value(json!({"host": "localhost", "port": 5432}))
    );
    assert_eq!(config.get("*").unwrap().into_owned(), Value::from(config.clone()));
}

#[test]
fn test_out_of_range() {
    let config = setup_config();

    let err = config.get("list.5").unwrap_err();
    assert!(err.is_out_of_range());
    assert!(err.is_not_traversable());
    assert_eq!(err, TreeError::OutOfRange { index: 5, len: 2 });

    assert_eq!(config.get_default("list.5", "z"), Value::from("z"));
}

#[test]
fn test_not_traversable_carries_partial_value() {
    let config = setup_config();

    let err = config.get("name.first").unwrap_err();
    assert!(err.is_not_traversable());
    assert_eq!(err.partial_value(), Some(&Value::from("app")));

    let err = config.get("list.0.deeper").unwrap_err();
    assert_eq!(err.into_partial_value(), Some(Value::from("x")));
}

#[test]
fn test_missing_key() {
    let config = Config::new();
    let err = config.get("x.y").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err, TreeError::NoValue { key: "x".to_string() });

    let config = setup_config();
    assert_eq!(
        config.get("db.user").unwrap_err(),
        TreeError::NoValue {
            key: "db.user".to_string()
        }
    );
}

#[test]
fn test_null_reads_as_missing() {
    let config = setup_config();
    assert!(config.get("nothing").unwrap_err().is_not_found());
    assert!(config.get("nothing.deeper").unwrap_err().is_not_found());
    assert_eq!(config.get_default("nothing", 1), Value::Int(1));
}

#[test]
fn test_invalid_paths() {
    let config = setup_config();
    for path in ["", "a..b", ".a", "a.", "."] {
        let err = config.get(path).unwrap_err();
        assert!(err.is_invalid_path(), "Expected invalid path for {path:?}, got {err:?}");
    }
}

#[test]
fn test_digit_segments_are_keys_in_objects() {
    let config = config_from_json(json!({
        "codes": {"200": "ok", "+": "plus", "$": "dollar"}
    }));

    assert_eq!(*config.get("codes.200").unwrap(), Value::from("ok"));
    assert_eq!(*config.get("codes.+").unwrap(), Value::from("plus"));
    assert_eq!(*config.get("codes.$").unwrap(), Value::from("dollar"));
}

#[test]
fn test_key_segment_against_array() {
    let config = setup_config();
    assert!(config.get("list.first").unwrap_err().is_invalid_path());
}

#[test]
fn test_get_default_on_success() {
    let config = setup_config();
    assert_eq!(config.get_default("db.host", "other"), Value::from("localhost"));
    assert_eq!(config.get_default("db.missing", "other"), Value::from("other"));
    assert_eq!(config.get_default("a..b", 0), Value::Int(0));
}
