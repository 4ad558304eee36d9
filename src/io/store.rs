use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;
use crate::parse::{decode_task, encode_task};

/// Error type for task-file storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read the full task list from the file, one task per line.
///
/// A missing file reads as an empty list. Lines that do not decode are
/// returned separately as dropped lines so the caller can report them;
/// they never abort the load.
pub fn read_all(path: &Path) -> Result<(Vec<Task>, Vec<String>), StoreError> {
    if !path.exists() {
        return Ok((Vec::new(), Vec::new()));
    }
    let content = fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut tasks = Vec::new();
    let mut dropped = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_task(line) {
            Some(task) => tasks.push(task),
            None => dropped.push(line.to_string()),
        }
    }
    Ok((tasks, dropped))
}

/// Overwrite the file with the full task list.
pub fn write_all(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let mut content = String::new();
    for task in tasks {
        content.push_str(&encode_task(task));
        content.push('\n');
    }
    atomic_write(path, content.as_bytes()).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write via a temp file in the target directory, then rename over the
/// destination.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
