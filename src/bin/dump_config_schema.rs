//! Prints the JSON schema of the sketchpad configuration file.
//!
//! Usage: `dump_config_schema [OUTPUT]`; writes to stdout when no path is given.

use anyhow::{Context, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let schema = serde_json::to_string_pretty(&sketchpad::Config::json_schema())?;

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::write(&path, schema + "\n")
            .with_context(|| format!("Failed to write schema to {}", path.display()))?,
        None => println!("{schema}"),
    }
    Ok(())
}
