//! End-to-end workflows over real manifest and settings files.

use std::fs;

use tempfile::tempdir;
use tomlet::{from_file, from_str, to_file, to_string, tomlet, Document, Value};

const APP_MANIFEST: &str = r#"# application manifest
[tools]
env_create_tool="python3 -m venv"
env_name=env
env_lib_installer="python3 -m pip"

[project]
name="demo"
version=0.1.0
description="A demo application"
readme="README.md"
requires_python=">=3.10"
dependencies=[]
local_dependencies=[]

[executable]
demo="demo.cli:run"
"#;

#[test]
fn test_load_and_inspect_manifest() {
    let doc = from_str(APP_MANIFEST).unwrap();

    assert_eq!(doc.len(), 3);
    let sections: Vec<&String> = doc.keys().collect();
    assert_eq!(sections, ["tools", "project", "executable"]);

    assert_eq!(
        doc.get_path(&["tools", "env_create_tool"])
            .and_then(Value::as_str),
        Some("python3 -m venv")
    );
    assert_eq!(
        doc.get_path(&["project", "version"]).and_then(Value::as_bare),
        Some("0.1.0")
    );
    assert_eq!(
        doc.get_path(&["executable", "demo"]).and_then(Value::as_str),
        Some("demo.cli:run")
    );
}

#[test]
fn test_add_dependency_and_rewrite() {
    let mut doc = from_str(APP_MANIFEST).unwrap();

    let deps = doc
        .ensure_table("project")
        .get_mut("dependencies")
        .and_then(Value::as_list_mut)
        .unwrap();
    deps.push(tomlet!({
        "name": "requests",
        "new_packages": ["urllib3", "idna"],
    }));

    let text = to_string(&doc).unwrap();
    println!("rewritten manifest:\n{text}");
    assert!(text.contains(
        "dependencies=[{name=\"requests\", new_packages=[\"urllib3\", \"idna\"]}]"
    ));

    // The rewritten file reads back to the same document.
    let back = from_str(&text).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_remove_dependency() {
    let mut doc = from_str(APP_MANIFEST).unwrap();
    let deps = doc
        .ensure_table("project")
        .get_mut("dependencies")
        .and_then(Value::as_list_mut)
        .unwrap();
    deps.push(tomlet!({"name": "requests", "new_packages": []}));
    deps.push(tomlet!({"name": "rich", "new_packages": []}));

    deps.retain(|entry| {
        entry
            .as_table()
            .and_then(|t| t.get("name"))
            .and_then(Value::as_str)
            != Some("requests")
    });

    assert_eq!(deps.len(), 1);
    let text = to_string(&doc).unwrap();
    assert!(!text.contains("requests"));
    assert!(text.contains("rich"));
}

#[test]
fn test_build_manifest_from_scratch() {
    let mut doc = Document::new();

    let tools = doc.ensure_table("tools");
    tools.insert("env_create_tool".to_string(), Value::from("python3 -m venv"));
    tools.insert("env_name".to_string(), Value::Bare("env".to_string()));

    let project = doc.ensure_table("project");
    project.insert("name".to_string(), Value::from("fresh"));
    project.insert("version".to_string(), Value::Bare("0.1.0".to_string()));
    project.insert("local".to_string(), Value::from(true));
    project.insert("dependencies".to_string(), Value::List(vec![]));

    let text = to_string(&doc).unwrap();
    assert_eq!(
        text,
        "[tools]\nenv_create_tool=\"python3 -m venv\"\nenv_name=env\n\n\
         [project]\nname=\"fresh\"\nversion=0.1.0\nlocal=True\ndependencies=[]\n"
    );
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.toml");

    let doc = from_str(APP_MANIFEST).unwrap();
    to_file(&path, &doc).unwrap();

    let back = from_file(&path).unwrap();
    assert_eq!(back, doc);

    // Key order survives the disk round trip too.
    let sections: Vec<&String> = back.keys().collect();
    assert_eq!(sections, ["tools", "project", "executable"]);
}

#[test]
fn test_failed_write_leaves_existing_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[keep]\nme=1\n").unwrap();

    // A document the writer must refuse: top-level value is not a table.
    let mut bad = Document::new();
    bad.insert("loose".to_string(), Value::from("text"));

    assert!(to_file(&path, &bad).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[keep]\nme=1\n");
}

#[test]
fn test_failed_write_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.toml");

    let mut bad = Document::new();
    bad.ensure_table("s")
        .insert("k".to_string(), Value::from("both \" and '"));

    assert!(to_file(&path, &bad).is_err());
    assert!(!path.exists());
}

#[test]
fn test_from_file_missing_path_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match from_file(&path) {
        Err(tomlet::Error::Io(_)) => {}
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_tokenize_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tokens.toml");
    fs::write(&path, "# comment\n[s]\nk=1\n").unwrap();

    let tokens = tomlet::tokenize_file(&path).unwrap();
    // The comment line is gone but still counted: `[` sits on line 2.
    assert_eq!(tokens[0].kind, tomlet::TokenKind::LBracket);
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn test_settings_file_workflow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[settings]\napps_dir=\"~/.apps\"\n").unwrap();

    let mut doc = from_file(&path).unwrap();
    doc.ensure_table("settings")
        .insert("bin_dir".to_string(), Value::from("~/.local/bin"));
    to_file(&path, &doc).unwrap();

    let back = from_file(&path).unwrap();
    assert_eq!(
        back.get_path(&["settings", "apps_dir"]).and_then(Value::as_str),
        Some("~/.apps")
    );
    assert_eq!(
        back.get_path(&["settings", "bin_dir"]).and_then(Value::as_str),
        Some("~/.local/bin")
    );
}

#[test]
fn test_parse_via_from_str_trait() {
    let doc: Document = APP_MANIFEST.parse().unwrap();
    assert!(doc.contains_key("project"));
}

#[test]
fn test_document_converts_to_json() {
    let doc = from_str("[project]\nname=\"demo\"\nversion=0.1.0\nlocal=True\n").unwrap();
    let json = serde_json::to_string(&doc).unwrap();

    // Everything is text on the JSON side; bare words carry no type.
    assert_eq!(
        json,
        r#"{"project":{"name":"demo","version":"0.1.0","local":"True"}}"#
    );
}

#[test]
fn test_json_converts_to_document() {
    let doc: Document =
        serde_json::from_str(r#"{"project":{"name":"demo","count":3,"ok":true}}"#).unwrap();

    assert_eq!(
        doc.get_path(&["project", "name"]),
        Some(&Value::Str("demo".to_string()))
    );
    assert_eq!(
        doc.get_path(&["project", "count"]),
        Some(&Value::Bare("3".to_string()))
    );
    assert_eq!(
        doc.get_path(&["project", "ok"]),
        Some(&Value::Bare("True".to_string()))
    );

    // And the imported document writes out as a manifest.
    let text = to_string(&doc).unwrap();
    assert!(text.contains("ok=True"));
}

#[test]
fn test_manifest_survives_many_cycles() {
    let mut text = APP_MANIFEST.to_string();
    let first = from_str(&text).unwrap();

    for _ in 0..3 {
        let doc = from_str(&text).unwrap();
        text = to_string(&doc).unwrap();
    }

    assert_eq!(from_str(&text).unwrap(), first);
}
