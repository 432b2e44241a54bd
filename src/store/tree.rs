use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SourceError;
use crate::source::{CallNode, Recording, RecordingMetadata, RecordingSource};
use crate::store::RecordedObject;

/// A call node as held by the store. Children are referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNode {
    pub id: i64,
    #[serde(default)]
    pub owner_class: Option<String>,
    #[serde(default)]
    pub method_name: Option<String>,
    #[serde(default)]
    pub args: Vec<RecordedObject>,
    #[serde(default)]
    pub return_value: Option<RecordedObject>,
    #[serde(default)]
    pub thrown: bool,
    #[serde(default)]
    pub duration_nanos: u64,
    #[serde(default)]
    pub child_ids: Vec<i64>,
}

/// Frozen contents of a published recording.
#[derive(Debug)]
pub struct RecordingData {
    id: i32,
    metadata: RecordingMetadata,
    root_id: i64,
    nodes: Vec<StoredNode>,
    index: HashMap<i64, usize>,
    total_calls: u64,
}

impl RecordingData {
    fn node(&self, node_id: i64) -> Result<usize, SourceError> {
        self.index
            .get(&node_id)
            .copied()
            .ok_or(SourceError::MissingNode {
                recording_id: self.id,
                node_id,
            })
    }
}

/// Handle to a published recording.
#[derive(Debug, Clone)]
pub struct StoredRecording {
    data: Arc<RecordingData>,
}

/// Handle to one node of a published recording; children resolve on demand.
#[derive(Debug, Clone)]
pub struct CallRecord {
    data: Arc<RecordingData>,
    position: usize,
}

impl CallRecord {
    fn stored(&self) -> &StoredNode {
        // positions only come from RecordingData::node
        &self.data.nodes[self.position]
    }
}

impl Recording for StoredRecording {
    type Node = CallRecord;

    fn id(&self) -> i32 {
        self.data.id
    }

    fn metadata(&self) -> &RecordingMetadata {
        &self.data.metadata
    }

    fn root(&self) -> Result<CallRecord, SourceError> {
        let position = self.data.node(self.data.root_id)?;
        Ok(CallRecord {
            data: Arc::clone(&self.data),
            position,
        })
    }

    fn total_calls(&self) -> u64 {
        self.data.total_calls
    }
}

impl CallNode for CallRecord {
    type Object = RecordedObject;

    fn id(&self) -> Option<i64> {
        Some(self.stored().id)
    }

    fn owner_class(&self) -> Option<&str> {
        self.stored().owner_class.as_deref()
    }

    fn method_name(&self) -> Option<&str> {
        self.stored().method_name.as_deref()
    }

    fn args(&self) -> &[RecordedObject] {
        &self.stored().args
    }

    fn return_value(&self) -> Option<&RecordedObject> {
        self.stored().return_value.as_ref()
    }

    fn has_thrown(&self) -> bool {
        self.stored().thrown
    }

    fn duration_nanos(&self) -> u64 {
        self.stored().duration_nanos
    }

    fn children(&self) -> Result<Vec<CallRecord>, SourceError> {
        self.stored()
            .child_ids
            .iter()
            .map(|&child_id| {
                let position = self.data.node(child_id)?;
                Ok(CallRecord {
                    data: Arc::clone(&self.data),
                    position,
                })
            })
            .collect()
    }
}

#[derive(Debug)]
struct PendingRecording {
    metadata: RecordingMetadata,
    root_id: i64,
    nodes: Vec<StoredNode>,
    index: HashMap<i64, usize>,
}

impl PendingRecording {
    /// Count the calls reachable from the root, rejecting any node that is
    /// reached twice (a cycle or a shared child).
    ///
    /// Child ids with no node are skipped here; they fail when resolved.
    fn reachable_calls(&self, id: i32) -> Result<u64, SourceError> {
        let mut visited = HashSet::from([self.root_id]);
        let mut stack = vec![self.index[&self.root_id]];
        while let Some(position) = stack.pop() {
            for &child_id in &self.nodes[position].child_ids {
                if !visited.insert(child_id) {
                    return Err(SourceError::CyclicNode { id, node_id: child_id });
                }
                if let Some(&child) = self.index.get(&child_id) {
                    stack.push(child);
                }
            }
        }
        Ok(self.index.keys().filter(|node_id| visited.contains(node_id)).count() as u64)
    }
}

#[derive(Debug, Default)]
struct TreeState {
    pending: HashMap<i32, PendingRecording>,
    published: Vec<StoredRecording>,
}

impl TreeState {
    fn is_published(&self, id: i32) -> bool {
        self.published.iter().any(|r| r.data.id == id)
    }
}

/// Shared, thread-safe collection of recordings.
///
/// Clones share the same state. Writers add nodes to pending recordings and
/// publish them; readers only ever see the published list.
#[derive(Debug, Clone, Default)]
pub struct CallRecordTree {
    state: Arc<RwLock<TreeState>>,
}

impl CallRecordTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a pending recording whose root call will have `root_id`.
    ///
    /// Fails if `id` is already pending or published.
    pub fn begin(&self, id: i32, metadata: RecordingMetadata, root_id: i64) -> Result<(), SourceError> {
        let mut state = self.state.write();
        if state.is_published(id) {
            return Err(SourceError::AlreadyPublished { id });
        }
        if state.pending.contains_key(&id) {
            return Err(SourceError::AlreadyPending { id });
        }
        state.pending.insert(
            id,
            PendingRecording {
                metadata,
                root_id,
                nodes: Vec::new(),
                index: HashMap::new(),
            },
        );
        Ok(())
    }

    /// Append a node to a pending recording.
    pub fn add_node(&self, id: i32, node: StoredNode) -> Result<(), SourceError> {
        let mut state = self.state.write();
        if state.is_published(id) {
            return Err(SourceError::AlreadyPublished { id });
        }
        let pending = state
            .pending
            .get_mut(&id)
            .ok_or(SourceError::UnknownRecording { id })?;
        if pending.index.contains_key(&node.id) {
            return Err(SourceError::DuplicateNode { id, node_id: node.id });
        }
        pending.index.insert(node.id, pending.nodes.len());
        pending.nodes.push(node);
        Ok(())
    }

    /// Freeze a pending recording and make it visible to readers.
    pub fn publish(&self, id: i32) -> Result<(), SourceError> {
        let mut state = self.state.write();
        if state.is_published(id) {
            return Err(SourceError::AlreadyPublished { id });
        }
        let pending = state
            .pending
            .remove(&id)
            .ok_or(SourceError::UnknownRecording { id })?;

        if !pending.index.contains_key(&pending.root_id) {
            // keep it pending so the writer can still add the root
            state.pending.insert(id, pending);
            return Err(SourceError::MissingRoot { id });
        }
        let total_calls = match pending.reachable_calls(id) {
            Ok(total_calls) => total_calls,
            Err(e) => {
                state.pending.insert(id, pending);
                return Err(e);
            }
        };

        debug!(recording_id = id, total_calls, "Published recording");
        state.published.push(StoredRecording {
            data: Arc::new(RecordingData {
                id,
                metadata: pending.metadata,
                root_id: pending.root_id,
                nodes: pending.nodes,
                index: pending.index,
                total_calls,
            }),
        });
        Ok(())
    }

    /// Look up a published recording by id.
    pub fn get(&self, id: i32) -> Option<StoredRecording> {
        self.state
            .read()
            .published
            .iter()
            .find(|r| r.data.id == id)
            .cloned()
    }
}

impl RecordingSource for CallRecordTree {
    type Recording = StoredRecording;

    fn recordings(&self) -> Vec<StoredRecording> {
        self.state.read().published.clone()
    }
}
