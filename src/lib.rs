//! recording_json library - call trace export
//!
//! Converts captured method-call recordings into JSON documents for viewers
//! and downstream tooling. The upstream collection is read through the traits
//! in [`source`]; [`export`] holds the entry points.

pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod source;
pub mod store;
pub mod types;
pub mod writer;

pub use config::ExportConfig;
pub use convert::{to_node_json, to_recording_json};
pub use error::{ExportError, SourceError};
pub use export::{export_all, export_each, export_recording};
pub use source::{CallNode, ObjectRecord, Recording, RecordingMetadata, RecordingSource};
pub use types::{AllRecordingsJson, NodeJson, RecordingJson};
pub use writer::JsonWriter;

#[cfg(test)]
#[macro_use]
mod test_macros;

#[cfg(test)]
mod test_utils;
