use clap::Parser;
use tracing_subscriber::EnvFilter;

use recording_json::cli::Args;
use recording_json::{ExportConfig, JsonWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ExportConfig::load(&args.config)?;
    let writer = JsonWriter::from_config(&config);
    let output = args.command.run(&writer, args.format)?;
    println!("{}", output);
    Ok(())
}
