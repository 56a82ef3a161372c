//! Loading a manifest and walking its entries.
//!
//! Run with: cargo run --example read_manifest

use std::error::Error;

use tomlet::{from_str, Value};

const MANIFEST: &str = r#"# application manifest
[tools]
env_create_tool="python3 -m venv"
env_name=env

[project]
name="demo"
version=0.1.0
requires_python=">=3.10"
dependencies=[{name="requests", new_packages=["urllib3", "idna"]}]

[executable]
demo="demo:run"
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_str(MANIFEST)?;

    // Sections come back in file order.
    println!("Sections:");
    for name in doc.keys() {
        println!("  [{name}]");
    }
    println!();

    // Targeted lookups never create anything.
    let name = doc
        .get_path(&["project", "name"])
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>");
    let version = doc
        .get_path(&["project", "version"])
        .and_then(Value::as_bare)
        .unwrap_or("0.0.0");
    println!("Project: {name} {version}\n");

    // Dependency entries are inline tables inside a list.
    if let Some(deps) = doc
        .get_path(&["project", "dependencies"])
        .and_then(Value::as_list)
    {
        println!("Dependencies:");
        for dep in deps {
            let Some(table) = dep.as_table() else { continue };
            let dep_name = table.get("name").and_then(Value::as_str).unwrap_or("?");
            let extras = table
                .get("new_packages")
                .and_then(Value::as_list)
                .map_or(0, <[Value]>::len);
            println!("  {dep_name} (+{extras} packages)");
        }
        println!();
    }

    // Every value is text; walk a whole section generically.
    if let Some(tools) = doc.get("tools").and_then(Value::as_table) {
        println!("Tool settings:");
        for (key, value) in tools {
            println!("  {key} = {value}");
        }
    }

    Ok(())
}
