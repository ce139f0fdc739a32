use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;

pub fn run_completions(shell: Shell, output_path: Option<&Path>) -> Result<(), CliError> {
    let script = render_completions(shell);

    match output_path {
        Some(path) => {
            std::fs::write(path, &script)?;
            tracing::info!("Wrote {shell} completions to {}", path.display());
        }
        None => io::stdout().write_all(&script)?,
    }

    Ok(())
}

/// Completion script for `shell`, registered under the binary's own name.
pub fn render_completions(shell: Shell) -> Vec<u8> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    let mut script = Vec::new();
    generate(shell, &mut command, bin_name, &mut script);
    script
}
