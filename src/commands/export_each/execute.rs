use std::error::Error;

use serde::Serialize;

use super::ExportEachCmd;
use crate::commands::Execute;
use crate::export::export_each;
use crate::store::load_capture;
use crate::writer::JsonWriter;

/// Result of the export-each command execution
#[derive(Debug, Serialize)]
pub struct ExportEachResult {
    pub dir: String,
    pub files: Vec<String>,
}

impl Execute for ExportEachCmd {
    type Output = ExportEachResult;

    fn execute(self, writer: &JsonWriter) -> Result<Self::Output, Box<dyn Error>> {
        let tree = load_capture(&self.input)?;
        let paths = export_each(&tree, &self.dir, writer)?;

        Ok(ExportEachResult {
            dir: self.dir.display().to_string(),
            files: paths
                .iter()
                .filter_map(|p| p.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect(),
        })
    }
}
