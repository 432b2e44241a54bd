//! Serializable documents produced by the exporters.

mod recording;

pub use recording::{AllRecordingsJson, NodeJson, RecordingJson};
