use std::error::Error;

use serde::Serialize;

use super::ExportAllCmd;
use crate::commands::Execute;
use crate::export::export_all;
use crate::store::load_capture;
use crate::writer::JsonWriter;

/// Result of the export-all command execution
#[derive(Debug, Serialize)]
pub struct ExportAllResult {
    pub count: usize,
    pub path: String,
}

impl Execute for ExportAllCmd {
    type Output = ExportAllResult;

    fn execute(self, writer: &JsonWriter) -> Result<Self::Output, Box<dyn Error>> {
        let tree = load_capture(&self.input)?;
        let count = export_all(&tree, &self.output, writer)?;

        Ok(ExportAllResult {
            count,
            path: self.output.display().to_string(),
        })
    }
}
