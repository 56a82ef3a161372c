//! Building an application manifest from scratch.
//!
//! Run with: cargo run --example build_manifest

use std::error::Error;

use tomlet::{to_string, tomlet, Document, Value};

fn main() -> Result<(), Box<dyn Error>> {
    let app_name = "demo";

    let mut doc = Document::new();

    // Tool settings the manifest carries along for environment handling.
    let tools = doc.ensure_table("tools");
    tools.insert("env_create_tool".to_string(), Value::from("python3 -m venv"));
    tools.insert("env_activate_tool".to_string(), Value::from("source bin/activate"));
    tools.insert("env_deactivate_tool".to_string(), Value::from("deactivate"));
    tools.insert("env_name".to_string(), Value::Bare("env".to_string()));
    tools.insert("env_lib_installer".to_string(), Value::from("pip3 install"));

    // The project section. Version numbers stay bare text on purpose.
    let project = doc.ensure_table("project");
    project.insert("name".to_string(), Value::from(app_name));
    project.insert("version".to_string(), Value::Bare("0.1.0".to_string()));
    project.insert("readme".to_string(), Value::from("README.md"));
    project.insert("license".to_string(), Value::from("LICENSE.txt"));
    project.insert("description".to_string(), Value::from(""));
    project.insert("requires_python".to_string(), Value::from(">=3.10"));
    project.insert("type".to_string(), Value::from("application"));
    project.insert("dependencies".to_string(), Value::List(vec![]));

    let executable = doc.ensure_table("executable");
    executable.insert(app_name.to_string(), Value::from(format!("{app_name}:run")));

    println!("Fresh manifest:\n{}", to_string(&doc)?);

    // Adding a dependency entry later is a list push, not text editing.
    let deps = doc
        .ensure_table("project")
        .get_mut("dependencies")
        .and_then(Value::as_list_mut)
        .expect("dependencies was just created as a list");
    deps.push(tomlet!({
        "name": "requests",
        "new_packages": ["urllib3", "idna"],
    }));

    println!("After adding a dependency:\n{}", to_string(&doc)?);

    Ok(())
}
