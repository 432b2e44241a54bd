//! Export entry points.
//!
//! All three share the same converter and [`JsonWriter`]:
//! - [`export_recording`] writes one recording document
//! - [`export_all`] writes every published recording into one aggregate document
//! - [`export_each`] writes one file per published recording
//!
//! Every call takes a fresh snapshot of the published recordings and fully
//! replaces its output, so repeated calls during a live capture observe a
//! growing list without any state carried between calls.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::convert::to_recording_json;
use crate::error::ExportError;
use crate::source::{Recording, RecordingSource};
use crate::types::{AllRecordingsJson, RecordingJson};
use crate::writer::JsonWriter;

/// Export one recording to `path`.
pub fn export_recording<R: Recording>(
    recording: &R,
    path: &Path,
    writer: &JsonWriter,
) -> Result<RecordingJson, ExportError> {
    let document = convert(recording, path)?;
    writer.write(&document, path)?;
    info!(recording_id = document.id, path = %path.display(), "Exported recording");
    Ok(document)
}

/// Export every currently published recording of `source` into one file.
///
/// Returns the number of recordings written.
pub fn export_all<S: RecordingSource>(
    source: &S,
    path: &Path,
    writer: &JsonWriter,
) -> Result<usize, ExportError> {
    let recordings = source
        .recordings()
        .iter()
        .map(|recording| convert(recording, path))
        .collect::<Result<Vec<_>, _>>()?;

    let payload = AllRecordingsJson::new(recordings);
    writer.write(&payload, path)?;

    info!(count = payload.count, path = %path.display(), "Exported recordings");
    Ok(payload.count)
}

/// Export every currently published recording of `source` to its own file in `dir`.
///
/// Files are named `recording-<id>.json`. Returns the written paths in
/// enumeration order.
pub fn export_each<S: RecordingSource>(
    source: &S,
    dir: &Path,
    writer: &JsonWriter,
) -> Result<Vec<PathBuf>, ExportError> {
    source
        .recordings()
        .iter()
        .map(|recording| {
            let path = dir.join(recording_file_name(recording.id()));
            export_recording(recording, &path, writer)?;
            Ok(path)
        })
        .collect()
}

pub fn recording_file_name(id: i32) -> String {
    format!("recording-{}.json", id)
}

fn convert<R: Recording>(recording: &R, path: &Path) -> Result<RecordingJson, ExportError> {
    to_recording_json(recording).map_err(|source| ExportError::Convert {
        path: path.to_path_buf(),
        recording_id: Some(recording.id()),
        source,
    })
}
