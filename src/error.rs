//! Error types for recording conversion and export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the upstream recording collection or its nodes.
///
/// The converter never catches these; they fail the export that hit them.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Recording {recording_id}: call node {node_id} cannot be resolved")]
    MissingNode { recording_id: i32, node_id: i64 },

    #[error("Failed to render recorded object: {message}")]
    Render { message: String },

    #[error("Recording {id} is not open for writing")]
    UnknownRecording { id: i32 },

    #[error("Recording {id} is already published")]
    AlreadyPublished { id: i32 },

    #[error("Recording {id} is already open for writing")]
    AlreadyPending { id: i32 },

    #[error("Recording {id} has no root call")]
    MissingRoot { id: i32 },

    #[error("Recording {id}: call node {node_id} was already added")]
    DuplicateNode { id: i32, node_id: i64 },

    #[error("Recording {id}: call node {node_id} is reached more than once from the root")]
    CyclicNode { id: i32, node_id: i64 },
}

/// Failures of an export call. Every variant names the destination.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to serialize JSON for '{}': {source}", path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to convert {} for '{}': {source}", describe_recording(*recording_id), path.display())]
    Convert {
        path: PathBuf,
        recording_id: Option<i32>,
        source: SourceError,
    },

    #[error("Recording {id} is not published")]
    RecordingNotFound { id: i32 },

    #[error("Invalid configuration in '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid capture file '{}': {message}", path.display())]
    Capture { path: PathBuf, message: String },
}

fn describe_recording(id: Option<i32>) -> String {
    match id {
        Some(id) => format!("recording {}", id),
        None => "recordings".to_string(),
    }
}
