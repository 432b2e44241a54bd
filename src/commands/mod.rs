//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs`: the result type and the `Execute` implementation
//! - `output.rs`: table formatting of the result

mod export;
mod export_all;
mod export_each;

pub use export::ExportCmd;
pub use export_all::ExportAllCmd;
pub use export_each::ExportEachCmd;

use clap::Subcommand;
use std::error::Error;
use std::path::PathBuf;

use crate::output::{OutputFormat, Outputable};
use crate::writer::JsonWriter;

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, writer: &JsonWriter) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export one recording from a capture dump to a JSON file
    Export(ExportCmd),

    /// Export all recordings from a capture dump into one JSON file
    ExportAll(ExportAllCmd),

    /// Export each recording from a capture dump to its own JSON file
    ExportEach(ExportEachCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, writer: &JsonWriter, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Export(cmd) => {
                let result = cmd.execute(writer)?;
                Ok(result.format(format))
            }
            Command::ExportAll(cmd) => {
                let result = cmd.execute(writer)?;
                Ok(result.format(format))
            }
            Command::ExportEach(cmd) => {
                let result = cmd.execute(writer)?;
                Ok(result.format(format))
            }
        }
    }
}

pub(crate) fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}
