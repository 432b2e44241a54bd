//! Capture dumps: a JSON listing of recordings and their flat node tables.
//!
//! ```json
//! {
//!   "recordings": [
//!     {
//!       "id": 1,
//!       "threadName": "main",
//!       "startTimeEpochMs": 1700000000000,
//!       "rootId": 0,
//!       "nodes": [
//!         {"id": 0, "ownerClass": "App", "methodName": "main", "durationNanos": 1200, "childIds": [1]},
//!         {"id": 1, "ownerClass": "App", "methodName": "work", "args": ["42"], "thrown": true}
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ExportError, SourceError};
use crate::source::RecordingMetadata;
use crate::store::{CallRecordTree, StoredNode};

#[derive(Debug, Clone, Deserialize)]
pub struct CaptureFile {
    pub recordings: Vec<CapturedRecording>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedRecording {
    pub id: i32,
    #[serde(default)]
    pub thread_name: Option<String>,
    #[serde(default)]
    pub start_time_epoch_ms: Option<i64>,
    pub root_id: i64,
    pub nodes: Vec<StoredNode>,
}

impl CaptureFile {
    /// Write every recording into a fresh collection and publish it, in file order.
    pub fn into_tree(self) -> Result<CallRecordTree, SourceError> {
        let tree = CallRecordTree::new();
        for recording in self.recordings {
            let metadata = RecordingMetadata {
                thread_name: recording.thread_name,
                start_time_epoch_ms: recording.start_time_epoch_ms,
            };
            tree.begin(recording.id, metadata, recording.root_id)?;
            for node in recording.nodes {
                tree.add_node(recording.id, node)?;
            }
            tree.publish(recording.id)?;
        }
        Ok(tree)
    }
}

/// Read a capture dump and publish its recordings into a new collection.
pub fn load_capture(path: &Path) -> Result<CallRecordTree, ExportError> {
    let capture_error = |message: String| ExportError::Capture {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| capture_error(e.to_string()))?;
    let capture: CaptureFile =
        serde_json::from_str(&content).map_err(|e| capture_error(e.to_string()))?;
    capture.into_tree().map_err(|e| capture_error(e.to_string()))
}
