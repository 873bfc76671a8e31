//! Entry point for the tessel-gallery binary.

mod args;
mod tracing_setup;

use anyhow::Result;
use clap::Parser;
use tessel_dioxus::TesselConfig;

fn main() -> Result<()> {
    let args = args::Args::parse();

    // Load widget config (tessel.toml)
    let loaded = match args.config_path() {
        Some(path) => TesselConfig::load_from(path),
        None => TesselConfig::load_default(),
    };
    let config = loaded.unwrap_or_else(|err| {
        eprintln!("Warning: failed to load tessel.toml: {err}");
        eprintln!("Using default configuration");
        TesselConfig::default()
    });

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging);

    log::info!("Starting tessel-gallery");

    tessel_dioxus::launch(config)
}
