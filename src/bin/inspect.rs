//! Reservoirs Inspect Binary
//!
//! Dumps the contents of a binary reservoir export.

use std::path::PathBuf;

use clap::Parser;
use reservoirs::ReservoirManager;
use tracing_subscriber::{fmt, EnvFilter};

/// Reservoirs Inspect
#[derive(Parser, Debug)]
#[command(name = "reservoirs-inspect")]
#[command(about = "Print every reservoir stored in a binary export")]
#[command(version)]
struct Args {
    /// Binary export to read
    file: PathBuf,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let manager = match ReservoirManager::load_from_binary_file(&args.file) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    println!("{} reservoir(s) in {}", manager.len(), args.file.display());
    for reservoir in &manager {
        reservoir.display_info();
        println!("-----------------------------");
    }
}
