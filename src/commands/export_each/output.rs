//! Output formatting for export-each command results.

use super::execute::ExportEachResult;
use crate::output::Outputable;

impl Outputable for ExportEachResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!(
            "Exported {} recording(s) to {}",
            self.files.len(),
            self.dir
        )];
        if !self.files.is_empty() {
            lines.push(String::new());
            lines.extend(self.files.iter().map(|f| format!("  {}", f)));
        }
        lines.join("\n")
    }
}
