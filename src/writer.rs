//! Pretty JSON serialization and file output.
//!
//! A [`JsonWriter`] is built once from the [`ExportConfig`] and shared by
//! reference; it carries no per-call state.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

use crate::config::ExportConfig;
use crate::error::ExportError;

#[derive(Debug, Clone)]
pub struct JsonWriter {
    indent: Vec<u8>,
    atomic: bool,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

impl JsonWriter {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            indent: vec![b' '; config.indent],
            atomic: config.atomic_write,
        }
    }

    /// Serialize `value` as indented JSON.
    pub fn to_vec<T: Serialize>(&self, value: &T) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Write `value` to `path`, creating missing parent directories and
    /// replacing any existing file.
    ///
    /// Serialization happens before the destination is touched. With atomic
    /// writes enabled the bytes go to a temporary file in the same directory
    /// which is then renamed over `path`, so readers never see a partial file.
    pub fn write<T: Serialize>(&self, value: &T, path: &Path) -> Result<(), ExportError> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;

        let bytes = self.to_vec(value).map_err(|source| ExportError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

        let write_error = |source: std::io::Error| ExportError::Write {
            path: path.to_path_buf(),
            source,
        };

        if !self.atomic {
            return fs::write(path, &bytes).map_err(write_error);
        }

        let mut tmp = NamedTempFile::new_in(parent).map_err(write_error)?;
        tmp.write_all(&bytes).map_err(write_error)?;
        if let Some(permissions) = replacement_permissions(path) {
            tmp.as_file().set_permissions(permissions).map_err(write_error)?;
        }
        tmp.as_file().sync_all().map_err(write_error)?;
        tmp.persist(path).map_err(|e| write_error(e.error))?;
        Ok(())
    }
}

/// Permissions for the file renamed over `path`: those of the file it
/// replaces, otherwise the mode a direct write gets under the usual umask.
fn replacement_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
