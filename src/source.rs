//! Read-only view of the upstream capture subsystem.
//!
//! The exporters only ever go through these traits. Whatever owns the trace
//! (the in-memory [`crate::store`] or a storage-backed reader) implements
//! them and guarantees that a recording handed out by
//! [`RecordingSource::recordings`] is published and no longer changes.

use crate::error::SourceError;

/// An opaque snapshot of an argument or return value.
pub trait ObjectRecord {
    /// Canonical display projection of the recorded value.
    fn render(&self) -> Result<String, SourceError>;
}

/// Thread name and start time of a recording, either may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingMetadata {
    pub thread_name: Option<String>,
    pub start_time_epoch_ms: Option<i64>,
}

/// One invocation inside a recording's call tree.
pub trait CallNode: Sized {
    type Object: ObjectRecord;

    fn id(&self) -> Option<i64>;

    fn owner_class(&self) -> Option<&str>;

    fn method_name(&self) -> Option<&str>;

    /// Recorded arguments in call order.
    fn args(&self) -> &[Self::Object];

    fn return_value(&self) -> Option<&Self::Object>;

    fn has_thrown(&self) -> bool;

    fn duration_nanos(&self) -> u64;

    /// Resolve the ordered child calls.
    ///
    /// May perform a blocking lookup; returns the complete list or fails.
    fn children(&self) -> Result<Vec<Self>, SourceError>;
}

/// One top-level trace with exactly one root call.
pub trait Recording {
    type Node: CallNode;

    fn id(&self) -> i32;

    fn metadata(&self) -> &RecordingMetadata;

    fn root(&self) -> Result<Self::Node, SourceError>;

    /// Precomputed number of calls in the whole tree.
    fn total_calls(&self) -> u64;
}

/// A live collection that exposes only its published recordings.
pub trait RecordingSource {
    type Recording: Recording;

    /// Snapshot of the published recordings in enumeration order.
    fn recordings(&self) -> Vec<Self::Recording>;
}
