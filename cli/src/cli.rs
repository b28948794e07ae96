use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ltiforge")]
#[command(about = "Builds signed LTI 1.x launch requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON launch description to sign
    #[arg(long)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the signed launch as a browser-submittable HTML form
    Html {
        /// Where to write the HTML document
        #[arg(long)]
        output: PathBuf,
    },
    /// Print the signed launch as curl-ready shell variables
    Curl {
        /// Prefix for the emitted variable names
        #[arg(long, default_value = "LTI")]
        prefix: String,
    },
}
