//! Shared test utilities for building recordings.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::source::RecordingMetadata;
use crate::store::{CallRecordTree, StoredNode};

/// Create a temporary file containing the given content.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// A childless node with no arguments or return value.
pub fn leaf_node(id: i64, owner_class: &str, method_name: &str) -> StoredNode {
    StoredNode {
        id,
        owner_class: Some(owner_class.to_string()),
        method_name: Some(method_name.to_string()),
        args: vec![],
        return_value: None,
        thrown: false,
        duration_nanos: 1_000,
        child_ids: vec![],
    }
}

/// Write and publish a recording whose root is the first node.
pub fn publish_recording(
    tree: &CallRecordTree,
    id: i32,
    metadata: RecordingMetadata,
    nodes: Vec<StoredNode>,
) {
    let root_id = nodes.first().map(|n| n.id).expect("Recording needs a root node");
    tree.begin(id, metadata, root_id).expect("Begin should succeed");
    for node in nodes {
        tree.add_node(id, node).expect("Add node should succeed");
    }
    tree.publish(id).expect("Publish should succeed");
}

/// A fresh collection holding one published recording.
pub fn published_tree(id: i32, metadata: RecordingMetadata, nodes: Vec<StoredNode>) -> CallRecordTree {
    let tree = CallRecordTree::new();
    publish_recording(&tree, id, metadata, nodes);
    tree
}
