//! In-memory implementation of the upstream recording collection.
//!
//! Used by the command-line front end (fed from a capture dump) and by tests.
//! Recordings are written while pending and become visible to readers only
//! once published, after which they never change.

mod capture;
mod object;
mod tree;

pub use capture::{load_capture, CaptureFile, CapturedRecording};
pub use object::RecordedObject;
pub use tree::{CallRecord, CallRecordTree, RecordingData, StoredNode, StoredRecording};
