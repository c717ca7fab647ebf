use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Manifest;
use crate::processor::Processor;
use crate::util::{write_if_changed, WriteStatus};

pub fn execute(manifest_path: &Path, out_dir: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let outcomes = Processor::new(&manifest).process(&manifest.screens);

    let mut failed = 0;
    for outcome in &outcomes {
        let file = match &outcome.result {
            Ok(file) => file,
            Err(err) => {
                failed += 1;
                println!("  {}: {}", "error".red(), err);
                continue;
            }
        };

        let path = out_dir.join(&file.relative_path);
        match write_if_changed(&path, &file.contents)? {
            WriteStatus::Created => println!("  {}: {}", "create".green(), path.display()),
            WriteStatus::Updated => println!("  {}: {}", "update".cyan(), path.display()),
            WriteStatus::Unchanged => println!("  {}: {}", "skip".dimmed(), path.display()),
        }
    }

    if failed > 0 {
        bail!("{failed} of {} screen(s) failed", outcomes.len());
    }
    Ok(())
}
