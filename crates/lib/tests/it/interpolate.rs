//! Template interpolation through `Config::prepare`

use cfgtree::{Config, Delimiters, Interpolator, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_single_hop() {
    let mut config = config_from_json(json!({"a": "1", "b": "{{a}}"}));
    config.prepare(&Delimiters::default()).unwrap();

    assert_eq!(*config.get("b").unwrap(), Value::from("1"));
    assert_eq!(*config.get("a").unwrap(), Value::from("1"));
}

#[test]
fn test_cycles_do_not_converge() {
    // One pass over a snapshot: each side picks up the other's raw text
    let mut config = config_from_json(json!({"a": "{{b}}", "b": "{{a}}"}));
    config.prepare(&Delimiters::default()).unwrap();

    assert_eq!(config.get_string("a"), "{{a}}");
    assert_eq!(config.get_string("b"), "{{b}}");
}

#[test]
fn test_multi_hop_chains_resolve_one_hop() {
    let mut config = config_from_json(json!({
        "host": "db",
        "addr": "{{host}}:5432",
        "url": "pg://{{addr}}",
    }));
    config.prepare(&Delimiters::default()).unwrap();

    assert_eq!(config.get_string("addr"), "db:5432");
    assert_eq!(config.get_string("url"), "pg://{{host}}:5432");

    // A second pass finishes the chain
    config.prepare(&Delimiters::default()).unwrap();
    assert_eq!(config.get_string("url"), "pg://db:5432");
}

#[test]
fn test_references_resolve_from_root() {
    let mut config = config_from_json(json!({
        "name": "app",
        "services": [
            {"log": "/var/log/{{name}}/{{services.1.id}}.log", "id": "web"},
            {"id": "worker", "tags": ["{{name}}-{{services.0.id}}"]},
        ],
        "deep": {"nested": {"ref": "{{services.*.id}}"}},
    }));
    config.prepare(&Delimiters::default()).unwrap();

    assert_eq!(config.get_string("services.0.log"), "/var/log/app/worker.log");
    assert_eq!(config.get_string("services.1.tags.0"), "app-web");
    assert_eq!(config.get_string("deep.nested.ref"), r#"["web","worker"]"#);
}

#[test]
fn test_non_text_values_are_untouched() {
    let mut config = config_from_json(json!({
        "port": 8080,
        "debug": false,
        "nothing": null,
        "msg": "port={{port}} debug={{debug}} missing=[{{missing}}] null=[{{nothing}}]",
    }));
    config.prepare(&Delimiters::default()).unwrap();

    assert_eq!(*config.get("port").unwrap(), Value::Int(8080));
    assert_eq!(*config.get("debug").unwrap(), Value::Bool(false));
    assert_eq!(
        config.get_string("msg"),
        "port=8080 debug=false missing=[] null=[]"
    );
}

#[test]
fn test_custom_delimiters() {
    let mut config = config_from_json(json!({
        "user": "root",
        "a": "${user}",
        "b": "{{user}}",
        "c": "(user)",
    }));
    config.prepare(&Delimiters::new("${", "}")).unwrap();
    assert_eq!(config.get_string("a"), "root");
    assert_eq!(config.get_string("b"), "{{user}}");

    // Regex metacharacters are taken literally
    config.prepare(&Delimiters::new("(", ")")).unwrap();
    assert_eq!(config.get_string("c"), "root");
}

#[test]
fn test_interpolator_reports_changed_leaves() {
    let interpolator = Interpolator::new(&Delimiters::default()).unwrap();
    let mut config = config_from_json(json!({
        "a": "x",
        "b": "{{a}}",
        "c": ["{{a}}", "{{missing}}", "plain"],
        "d": "{{d}}",
    }));

    // b, c.0 and c.1 change; d resolves to its own text
    assert_eq!(interpolator.interpolate(&mut config), 3);
    assert_eq!(
        config.get("c").unwrap().into_owned(),
        value(json!(["x", "", "plain"]))
    );

    let source = Config::new().with("who", "world");
    assert_eq!(interpolator.render("hello {{who}}", &source), "hello world");
}
