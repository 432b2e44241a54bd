mod execute;
mod output;

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;

/// Export all recordings from a capture dump into one JSON file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  recording_json export-all -i capture.json -o out/all.json
  RUST_LOG=debug recording_json export-all -i capture.json -o all.json")]
pub struct ExportAllCmd {
    /// Path to the capture dump JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub input: PathBuf,

    /// Destination JSON file (parent directories are created)
    #[arg(short, long)]
    pub output: PathBuf,
}
