//! Configuration file handling for export output.
//!
//! Settings are read from `.recording_json.json` in the current directory
//! (or the path given with `--config`). The file is optional; when it is
//! absent the defaults apply.
//!
//! ```json
//! {
//!   "indent": 2,
//!   "atomicWrite": true
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

pub const DEFAULT_CONFIG_PATH: &str = ".recording_json.json";

const MAX_INDENT: usize = 16;

/// Output settings shared by every export call of a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Spaces per indentation level in the written JSON
    pub indent: usize,
    /// Write to a temporary file and rename it over the destination
    pub atomic_write: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            atomic_write: true,
        }
    }
}

impl ExportConfig {
    /// Load configuration from `path`, falling back to defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The JSON is invalid or has unknown fields
    /// - `indent` is larger than 16
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let config_error = |message: String| ExportError::Config {
            path: PathBuf::from(path),
            message,
        };

        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read file: {}", e)))?;
        let config: ExportConfig = serde_json::from_str(&content)
            .map_err(|e| config_error(format!("Invalid JSON: {}", e)))?;

        if config.indent > MAX_INDENT {
            return Err(config_error(format!(
                "indent must be at most {}, got {}",
                MAX_INDENT, config.indent
            )));
        }

        Ok(config)
    }
}
