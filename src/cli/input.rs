//! Task list file loading
//!
//! Accepts the two shapes upstream responses come in: a bare JSON array of
//! tasks, or an object wrapping the array in a "tasks" field.

use crate::plan::TaskRecord;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("file '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("file '{path}' is not UTF-8 encoded")]
    NotUtf8 { path: PathBuf },

    #[error("IO error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' does not contain a task list: {reason}")]
    UnrecognizedShape { path: PathBuf, reason: String },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TaskListDocument {
    List(Vec<TaskRecord>),
    Envelope { tasks: Vec<TaskRecord> },
}

/// Load a JSON task list from disk.
pub fn load_task_file(path: &Path) -> Result<Vec<TaskRecord>, InputError> {
    debug!("loading task list from {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::InvalidData => InputError::NotUtf8 {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    records_from_json(&content).map_err(|reason| InputError::UnrecognizedShape {
        path: path.to_path_buf(),
        reason,
    })
}

fn records_from_json(content: &str) -> Result<Vec<TaskRecord>, String> {
    match serde_json::from_str::<TaskListDocument>(content) {
        Ok(TaskListDocument::List(records)) => Ok(records),
        Ok(TaskListDocument::Envelope { tasks }) => Ok(tasks),
        Err(source) => Err(source.to_string()),
    }
}
