//! Output formatting for export command results.

use super::execute::ExportResult;
use crate::output::Outputable;

impl Outputable for ExportResult {
    fn to_table(&self) -> String {
        let thread = self.thread_name.as_deref().unwrap_or("unknown");
        [
            format!("Exported recording {} to {}", self.recording_id, self.path),
            format!("Thread: {}", thread),
            format!("Duration: {} ms", self.duration_millis),
            format!("Calls: {} ({} nodes written)", self.total_calls, self.nodes_written),
        ]
        .join("\n")
    }
}
