//! Conversion of upstream recordings into documents.
//!
//! Both converters are pure functions of their input. The node converter
//! forces lazy child resolution before recursing, so the produced tree is
//! always complete. Recursion depth equals the call depth of the trace.

use std::time::Duration;

use tracing::debug;

use crate::error::SourceError;
use crate::render::{render_object, render_object_or_null};
use crate::source::{CallNode, Recording};
use crate::types::{NodeJson, RecordingJson};

/// Build the document for one recording: summary metadata plus its call tree.
pub fn to_recording_json<R: Recording>(recording: &R) -> Result<RecordingJson, SourceError> {
    let metadata = recording.metadata();
    let id = recording.id();
    let total_calls = recording.total_calls();

    let root = to_node_json(&recording.root()?)?;

    let recording_json = RecordingJson {
        id,
        thread_name: metadata.thread_name.clone(),
        start_time_epoch_ms: metadata.start_time_epoch_ms,
        duration_millis: nanos_to_millis(root.duration_nanos),
        total_calls,
        root,
    };

    debug!(recording_id = id, total_calls, "Converted recording to JSON document");
    Ok(recording_json)
}

/// Convert one call node and, recursively, all of its children in order.
pub fn to_node_json<N: CallNode>(node: &N) -> Result<NodeJson, SourceError> {
    let args = node
        .args()
        .iter()
        .map(render_object)
        .collect::<Result<Vec<_>, _>>()?;
    let return_value = render_object_or_null(node.return_value())?;

    let children = node
        .children()?
        .iter()
        .map(to_node_json)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NodeJson {
        node_id: node.id(),
        owner_class: node.owner_class().map(str::to_string),
        method_name: node.method_name().map(str::to_string),
        args,
        return_value,
        thrown: node.has_thrown(),
        duration_nanos: node.duration_nanos(),
        children,
    })
}

/// Whole milliseconds in a nanosecond duration, truncating.
fn nanos_to_millis(nanos: u64) -> u64 {
    // as_millis() is u128 but a u64 of nanos always fits back
    Duration::from_nanos(nanos).as_millis() as u64
}
