//! Loading configs from JSON, YAML and XML

use std::io::Write;

use cfgtree::{Config, DecodeError, Format, Value, decode::decode};
use serde_json::json;

use crate::helpers::*;

const JSON_DOC: &str = r#"{
    "name": "app",
    "db": {"host": "localhost", "port": 5432, "replica": null},
    "users": [{"name": "a"}, {"name": "b"}],
    "ratio": 0.5
}"#;

const YAML_DOC: &str = "
name: app
db:
  host: localhost
  port: 5432
  replica: ~
users:
  - name: a
  - name: b
ratio: 0.5
";

const XML_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<config env="dev">
  <name>app</name>
  <db>
    <host>localhost</host>
    <port>5432</port>
  </db>
  <users><name>a</name></users>
  <users><name>b</name></users>
  <empty/>
</config>"#;

#[test]
fn test_json_and_yaml_agree() {
    let from_json = Config::from_slice(JSON_DOC.as_bytes(), Format::Json).unwrap();
    let from_yaml = Config::from_slice(YAML_DOC.as_bytes(), Format::Yaml).unwrap();

    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json.get_int("db.port"), 5432);
    assert_eq!(from_json.get_float("ratio"), 0.5);
    assert_eq!(
        from_json.get("users.*.name").unwrap().into_owned(),
        value(json!(["a", "b"]))
    );
}

#[test]
fn test_nulls_are_kept_explicitly() {
    let config = Config::from_slice(JSON_DOC.as_bytes(), Format::Json).unwrap();
    let db = config.get("db").unwrap();
    let db = db.as_object().unwrap();

    assert_eq!(db.get("replica"), Some(&Value::Null));
    assert!(config.get("db.replica").unwrap_err().is_not_found());
}

#[test]
fn test_xml_mapping() {
    let config = Config::from_slice(XML_DOC.as_bytes(), Format::Xml).unwrap();

    assert_eq!(config.len(), 1);
    assert_eq!(config.get_string("config.env"), "dev");
    assert_eq!(config.get_string("config.name"), "app");
    // XML scalars are text, the typed accessors still cast them
    assert_eq!(*config.get("config.db.port").unwrap(), Value::from("5432"));
    assert_eq!(config.get_int("config.db.port"), 5432);
    assert_eq!(
        config.get("config.users.*.name").unwrap().into_owned(),
        value(json!(["a", "b"]))
    );
    assert!(config.get("config.empty").unwrap_err().is_not_found());
}

#[test]
fn test_from_data_tags() {
    let config = Config::from_data(JSON_DOC.as_bytes(), "JSON").unwrap();
    assert_eq!(config.get_string("name"), "app");

    let config = Config::from_data(YAML_DOC.as_bytes(), "yml").unwrap();
    assert_eq!(config.get_string("db.host"), "localhost");

    let err = Config::from_data(JSON_DOC.as_bytes(), "toml").unwrap_err();
    assert!(err.is_invalid_format());
    assert!(matches!(
        err,
        DecodeError::InvalidConfigFormat { ref format } if format == "toml"
    ));
}

#[test]
fn test_malformed_input() {
    assert!(matches!(
        Config::from_slice(b"{\"a\": ", Format::Json),
        Err(DecodeError::Json(_))
    ));
    assert!(matches!(
        Config::from_slice(b"a: [1, 2", Format::Yaml),
        Err(DecodeError::Yaml(_))
    ));
    assert!(
        Config::from_slice(b"<a><b></a>", Format::Xml)
            .unwrap_err()
            .is_syntax_error()
    );
    assert!(matches!(
        Config::from_slice(b"\"just a string\"", Format::Json),
        Err(DecodeError::NotAnObject { found: "text" })
    ));
    assert!(matches!(
        Config::from_slice(b"- 1\n- 2\n", Format::Yaml),
        Err(DecodeError::NotAnObject { found: "array" })
    ));
}

#[test]
fn test_yaml_specifics() {
    let config = Config::from_slice(
        b"1: one\ntrue: yes\nnested:\n  key: !custom 42\n",
        Format::Yaml,
    )
    .unwrap();

    assert_eq!(config.get_string("1"), "one");
    assert_eq!(config.get_string("true"), "yes");
    assert_eq!(config.get_int("nested.key"), 42);
}

#[test]
fn test_decode_returns_any_shape() {
    assert_eq!(decode(b"[1, 2]", Format::Json).unwrap(), value(json!([1, 2])));
    assert_eq!(decode(b"3", Format::Yaml).unwrap(), Value::Int(3));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(YAML_DOC.as_bytes()).unwrap();

    let format = Format::from_extension(file.path()).unwrap();
    assert_eq!(format, Format::Yaml);

    let config = Config::from_file(file.path(), format).unwrap();
    assert_eq!(config.get_string("users.1.name"), "b");
}

#[test]
fn test_from_file_errors() {
    let dir = tempfile::tempdir().unwrap();

    let err = Config::from_file(dir.path().join("missing.json"), Format::Json).unwrap_err();
    assert!(err.is_io_error());
    assert!(err.is_not_found());

    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json").unwrap();
    let err = Config::from_file(&path, Format::Json).unwrap_err();
    assert!(err.is_decode_error());
}
