//! Shell completion generation.

use crate::cli::Cli;
use anyhow::{bail, Result};
use clap::CommandFactory;
use clap_complete::Shell;

/// Write completions for `shell` (or the detected shell) to stdout
pub fn generate(shell: Option<Shell>) -> Result<()> {
    let Some(shell) = shell.or_else(Shell::from_env) else {
        bail!("Could not detect the shell; pass one explicitly, e.g. `scrollfocus completions zsh`");
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());

    Ok(())
}
