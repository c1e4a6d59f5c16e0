//! Reservoirs Demo Binary
//!
//! Builds a few reservoirs, prints them, and writes both export formats.

use clap::Parser;
use reservoirs::config::{DEFAULT_BINARY_PATH, DEFAULT_TEXT_PATH};
use reservoirs::{Config, Reservoir, ReservoirManager};
use tracing_subscriber::{fmt, EnvFilter};

/// Separator printed after each reservoir summary
const SEPARATOR: &str = "-----------------------------";

/// Reservoirs Demo
#[derive(Parser, Debug)]
#[command(name = "reservoirs-demo")]
#[command(about = "Print sample reservoirs and export them to text and binary files")]
#[command(version)]
struct Args {
    /// Text export path
    #[arg(short, long, default_value = DEFAULT_TEXT_PATH)]
    text_path: String,

    /// Binary export path
    #[arg(short, long, default_value = DEFAULT_BINARY_PATH)]
    binary_path: String,
}

fn main() {
    // Diagnostics go to stderr so stdout carries only the summaries
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reservoirs=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Reservoirs demo v{}", reservoirs::VERSION);

    let config = Config::builder()
        .text_path(&args.text_path)
        .binary_path(&args.binary_path)
        .build();

    let mut manager = ReservoirManager::new();
    manager.add_reservoir(Reservoir::new("Ocean", 1000.0, 2000.0, 50.0));
    manager.add_reservoir(Reservoir::new("Swimming Pool", 20.0, 30.0, 2.0));
    manager.add_reservoir(Reservoir::new("Fish Pond", 10.0, 15.0, 1.0));

    for reservoir in manager.reservoirs() {
        reservoir.display_info();
        println!("{}", SEPARATOR);
    }

    // A failed export is reported and the demo carries on
    if let Err(e) = manager.save_to_text_file(&config.text_path) {
        tracing::error!("{}", e);
    }

    if let Err(e) = manager.save_to_binary_file(&config.binary_path) {
        tracing::error!("{}", e);
    }
}
