mod execute;
mod output;

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;

/// Export one recording from a capture dump to a JSON file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  recording_json export -i capture.json -o out/recording-7.json -r 7
  recording_json --format json export -i capture.json -o out.json -r 1")]
pub struct ExportCmd {
    /// Path to the capture dump JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub input: PathBuf,

    /// Destination JSON file (parent directories are created)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Identity of the recording to export
    #[arg(short, long)]
    pub recording: i32,
}
