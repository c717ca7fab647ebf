use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Updated,
    Unchanged,
}

/// Write a file only if its contents differ from what is on disk.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteStatus> {
    let status = match fs::read_to_string(path) {
        Ok(existing) if existing == content => return Ok(WriteStatus::Unchanged),
        Ok(_) => WriteStatus::Updated,
        Err(_) => WriteStatus::Created,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create dir {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(status)
}
