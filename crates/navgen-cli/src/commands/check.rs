use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Manifest;
use crate::processor::Processor;

/// Classifies every screen without writing anything.
pub fn execute(manifest_path: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let outcomes = Processor::new(&manifest).process(&manifest.screens);

    for outcome in &outcomes {
        match &outcome.result {
            Ok(_) => println!("  {}: {} ({})", "ok".green(), outcome.function, outcome.route),
            Err(err) => println!("  {}: {}", "error".red(), err),
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        bail!("{failed} of {} screen(s) failed", outcomes.len());
    }
    println!("{}", "All screens are valid".green().bold());
    Ok(())
}
