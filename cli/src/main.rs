use anyhow::Result;
use clap::Parser;
use ltiforge::app;
use ltiforge::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run(cli)
}
