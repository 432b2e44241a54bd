//! Display strings for recorded arguments and return values.

use crate::error::SourceError;
use crate::source::ObjectRecord;

/// Render a recorded object via its canonical projection.
pub fn render_object<O: ObjectRecord>(obj: &O) -> Result<String, SourceError> {
    obj.render()
}

/// Render an optional recorded object; absence stays absent.
pub fn render_object_or_null<O: ObjectRecord>(obj: Option<&O>) -> Result<Option<String>, SourceError> {
    obj.map(render_object).transpose()
}
