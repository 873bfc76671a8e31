//! Command-line interface.

use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tessel-gallery", about = "Dialog and switch widget gallery", version)]
/// Command-line interface for the `tessel-gallery` binary.
pub struct Args {
    /// Config file to load instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Config file, as a positional argument
    #[arg(value_name = "PATH", conflicts_with = "config")]
    config_positional: Option<PathBuf>,
}

impl Args {
    /// The explicitly requested config file, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref().or(self.config_positional.as_deref())
    }
}
