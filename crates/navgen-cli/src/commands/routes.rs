use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::Manifest;
use crate::processor::Processor;

/// Prints `route -> pattern` for every screen, in manifest order.
pub fn execute(manifest_path: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;

    for outcome in Processor::new(&manifest).process(&manifest.screens) {
        match outcome.result {
            Ok(file) => println!("{} -> {}", outcome.route, file.route_pattern),
            Err(err) => println!("{} -> {}", outcome.route, err.to_string().red()),
        }
    }
    Ok(())
}
