//! Editing a settings file in place: load, change, save.
//!
//! The tool's own configuration lives under a reserved `[settings]` section;
//! every other top-level section is one tracked application record.
//!
//! Run with: cargo run --example tool_settings

use std::error::Error;
use std::fs;

use tomlet::{from_file, to_file, Value};

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join("tomlet_settings.toml");

    // Seed a settings file the way a first run would.
    fs::write(
        &path,
        "# tool configuration\n[settings]\napps_dir=\"~/.apps\"\nenv_name=env\n",
    )?;

    let mut doc = from_file(&path)?;
    println!("Loaded:\n{}", tomlet::to_string(&doc)?);

    // Update a setting and record a freshly installed application.
    let settings = doc.ensure_table("settings");
    settings.insert("bin_dir".to_string(), Value::from("~/.local/bin"));

    let app = doc.ensure_table("demo");
    app.insert("version".to_string(), Value::Bare("0.1.0".to_string()));
    app.insert("installed".to_string(), Value::from(true));

    // The whole document is formatted before the file is touched, so a
    // refused document cannot truncate the settings on disk.
    to_file(&path, &doc)?;

    let back = from_file(&path)?;
    println!("Saved and re-read:\n{}", tomlet::to_string(&back)?);

    let installed = back
        .get_path(&["demo", "installed"])
        .and_then(Value::as_bool)
        .unwrap_or(false);
    println!("demo installed: {installed}");

    fs::remove_file(&path)?;
    Ok(())
}
