use crate::sources::{registry_from_dir, registry_from_embedded};
use anyhow::{Context, Result};
use std::env;

/// Binary entrypoint: aggregate the snapshot directory named on the command
/// line, or the embedded baseline when no directory is given, and print the
/// merged registry as pretty JSON.
pub fn run() -> Result<()> {
    let registry = match env::args().nth(1) {
        Some(dir) => registry_from_dir(&dir)
            .with_context(|| format!("aggregating snapshot directory {dir}"))?,
        None => registry_from_embedded().context("loading embedded baseline")?,
    };
    let rendered = serde_json::to_string_pretty(&registry)?;
    println!("{rendered}");
    Ok(())
}
