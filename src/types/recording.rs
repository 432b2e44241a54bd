//! Document types for recordings and their call trees.
//!
//! Field names follow the viewer's camelCase contract. Optional fields are
//! always written, as `null` when unknown; they are never skipped.

use serde::{Deserialize, Serialize};

/// One node of a recording's call tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeJson {
    pub node_id: Option<i64>,
    pub owner_class: Option<String>,
    pub method_name: Option<String>,
    pub args: Vec<String>,
    pub return_value: Option<String>,
    pub thrown: bool,
    pub duration_nanos: u64,
    pub children: Vec<NodeJson>,
}

impl NodeJson {
    /// Count this node and all of its descendants.
    pub fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(NodeJson::count_nodes).sum::<usize>()
    }
}

/// Summary metadata plus the full call tree of one recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingJson {
    pub id: i32,
    pub thread_name: Option<String>,
    pub start_time_epoch_ms: Option<i64>,
    pub duration_millis: u64,
    pub total_calls: u64,
    pub root: NodeJson,
}

/// Every published recording in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllRecordingsJson {
    pub count: usize,
    pub recordings: Vec<RecordingJson>,
}

impl AllRecordingsJson {
    pub fn new(recordings: Vec<RecordingJson>) -> Self {
        Self {
            count: recordings.len(),
            recordings,
        }
    }
}
