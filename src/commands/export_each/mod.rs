mod cli_tests;
mod execute;
mod output;

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;

/// Export each recording from a capture dump to its own JSON file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  recording_json export-each -i capture.json -d out/recordings   # writes recording-<id>.json")]
pub struct ExportEachCmd {
    /// Path to the capture dump JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub input: PathBuf,

    /// Destination directory (created if missing)
    #[arg(short, long)]
    pub dir: PathBuf,
}
