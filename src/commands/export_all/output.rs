//! Output formatting for export-all command results.

use super::execute::ExportAllResult;
use crate::output::Outputable;

impl Outputable for ExportAllResult {
    fn to_table(&self) -> String {
        format!("Exported {} recording(s) to {}", self.count, self.path)
    }
}
