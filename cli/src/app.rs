use std::fs;
use std::path::Path;

use anyhow::Context;
use ltiforge_shared::signature::{sign, LaunchRequest};

use crate::cli::{Cli, Commands};
use crate::render::Renderer;

/// One-shot run: read, sign, render, emit.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let input = fs::read_to_string(&cli.file).with_context(|| {
        format!(
            "Could not read launch description [{}]",
            cli.file.display()
        )
    })?;
    let signed = sign(LaunchRequest::from_json(&input)?)?;

    match cli.command {
        Commands::Html { output } => {
            let document = Renderer::Html.render(&signed);
            write_fully(&output, &document)
                .with_context(|| format!("Could not write launch form [{}]", output.display()))
        }
        Commands::Curl { prefix } => {
            print!("{}", Renderer::ShellVars { prefix }.render(&signed));
            Ok(())
        }
    }
}

// Stages the document next to its destination and renames it into place, so
// a failed run never leaves a half-written output file behind.
fn write_fully(path: &Path, contents: &str) -> std::io::Result<()> {
    let staged = path.with_extension("staged");
    let written = fs::write(&staged, contents).and_then(|_| fs::rename(&staged, path));
    if written.is_err() {
        let _ = fs::remove_file(&staged);
    }
    written
}
