//! Tests for dotted-path lookup and JSON file loading.

use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use super::*;

#[test]
fn nested_value_found() {
    let data = json!({"user": {"name": "x"}});
    assert_eq!(get_property(&data, "user.name"), Some(&json!("x")));
    assert_eq!(get_property(&data, "  user.name  "), Some(&json!("x")));
}

#[test]
fn missing_segment_gives_none() {
    let data = json!({"user": {"name": "x"}});
    assert_eq!(get_property(&data, "user.missing"), None);
    assert_eq!(get_property(&data, "nope.name"), None);
}

#[test]
fn falsy_intermediate_stops_the_walk() {
    for falsy in [json!(0), json!(""), json!(false), Value::Null] {
        let data = json!({"user": {"name": falsy}});
        assert_eq!(get_property(&data, "user.name.sub"), None, "intermediate {falsy}");
    }
}

#[test]
fn falsy_terminal_value_is_returned() {
    let data = json!({"user": {"name": 0, "active": false}});
    assert_eq!(get_property(&data, "user.name"), Some(&json!(0)));
    assert_eq!(get_property(&data, "user.active"), Some(&json!(false)));
}

#[test]
fn arrays_are_indexed_by_segment() {
    let data = json!({"servers": [{"host": "a"}, {"host": "b"}]});
    assert_eq!(get_property(&data, "servers.1.host"), Some(&json!("b")));
    assert_eq!(get_property(&data, "servers.9.host"), None);
    assert_eq!(get_property(&data, "servers.first"), None);
}

#[test]
fn blank_path_or_falsy_root_gives_none() {
    let data = json!({"a": 1});
    assert_eq!(get_property(&data, "   "), None);
    assert_eq!(get_property(&Value::Null, "a"), None);
}

#[test]
fn truthiness() {
    assert!(!is_truthy(&json!(0.0)));
    assert!(is_truthy(&json!(-1)));
    assert!(is_truthy(&json!("0")));
    assert!(is_truthy(&json!([])));
    assert!(is_truthy(&json!({})));
}

#[test]
fn missing_arguments_are_errors() {
    let data = json!({"a": 1});
    assert!(matches!(
        get_json_prop(&data, ""),
        Err(UtilError::MissingArgument(_))
    ));
    assert!(matches!(
        get_json_prop("", "a"),
        Err(UtilError::MissingArgument(_))
    ));
    assert!(matches!(
        get_json_prop(&Value::Null, "a"),
        Err(UtilError::MissingArgument(_))
    ));
}

#[test]
fn non_container_source_gives_none() {
    assert_eq!(get_json_prop(&json!("text"), "length").unwrap(), None);
    assert_eq!(get_json_prop(&json!(42), "a").unwrap(), None);
}

#[test]
fn in_memory_lookup_clones_value() {
    let data = json!({"db": {"pool": {"size": 8}}});
    assert_eq!(
        get_json_prop(&data, "db.pool").unwrap(),
        Some(json!({"size": 8}))
    );
}

fn write_config(dir: &Path) {
    fs::write(
        dir.join("app-config.json"),
        r#"{"user": {"name": "istanbul"}}"#,
    )
    .unwrap();
    fs::write(dir.join("broken.json"), "module.exports = {").unwrap();
}

#[test]
fn file_lookup_relative_to_root() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path());
    let loader = JsonLoader::new(Some(dir.path().to_path_buf()));
    assert_eq!(loader.root(), Some(dir.path()));

    assert_eq!(
        loader.get_json_prop("app-config.json", "user.name").unwrap(),
        Some(json!("istanbul"))
    );
}

#[test]
fn file_lookup_soft_failures() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path());
    let loader = JsonLoader::new(Some(dir.path().to_path_buf()));

    assert_eq!(loader.get_json_prop("missing.json", "user.name").unwrap(), None);
    assert_eq!(loader.get_json_prop("broken.json", "user.name").unwrap(), None);

    let rootless = JsonLoader::default();
    assert_eq!(rootless.get_json_prop("app-config.json", "user.name").unwrap(), None);
}

#[test]
fn absolute_path_ignores_root() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path());
    let absolute = dir.path().join("app-config.json");
    assert_eq!(
        get_json_prop(absolute.as_path(), "user.name").unwrap(),
        Some(json!("istanbul"))
    );
}

#[test]
fn load_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path());
    let loader = JsonLoader::new(Some(dir.path().to_path_buf()));

    assert!(matches!(
        loader.load(Path::new("missing.json")),
        Err(UtilError::Io { .. })
    ));
    assert!(matches!(
        loader.load(Path::new("broken.json")),
        Err(UtilError::Json { .. })
    ));
    assert!(matches!(
        JsonLoader::default().load(Path::new("app-config.json")),
        Err(UtilError::NoRoot(_))
    ));
}
