use std::error::Error;

use serde::Serialize;

use super::ExportCmd;
use crate::commands::Execute;
use crate::error::ExportError;
use crate::export::export_recording;
use crate::store::load_capture;
use crate::writer::JsonWriter;

/// Result of the export command execution
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub recording_id: i32,
    pub thread_name: Option<String>,
    pub duration_millis: u64,
    pub total_calls: u64,
    pub nodes_written: usize,
    pub path: String,
}

impl Execute for ExportCmd {
    type Output = ExportResult;

    fn execute(self, writer: &JsonWriter) -> Result<Self::Output, Box<dyn Error>> {
        let tree = load_capture(&self.input)?;
        let recording = tree
            .get(self.recording)
            .ok_or(ExportError::RecordingNotFound { id: self.recording })?;

        let document = export_recording(&recording, &self.output, writer)?;

        Ok(ExportResult {
            recording_id: document.id,
            thread_name: document.thread_name,
            duration_millis: document.duration_millis,
            total_calls: document.total_calls,
            nodes_written: document.root.count_nodes(),
            path: self.output.display().to_string(),
        })
    }
}
