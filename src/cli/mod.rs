//! Command-line interface.
//!
//! With no subcommand the TUI is launched; global flags override values
//! from the config file for that run.

mod completions;

use crate::config::Config;
use crate::keymap::KeymapPreset;
use crate::styles::ColorScheme;
use crate::utils::{get_config_path, get_log_path};
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;
use std::path::PathBuf;

const AFTER_HELP: &str = indoc! {"
    Columns (left to right):
      A  scroll container, every row rendered at once
      B  virtualized list, scrolls itself to keep focus in view
      C  virtualized list, scrolling disabled, centered scroll on focus

    Focus events are logged as `handleFocus <index>`; see `scrollfocus logs`.
"};

/// Compare list scrolling and focus navigation strategies side by side
#[derive(Parser, Debug)]
#[command(name = "scrollfocus", version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Color scheme (dark, light, or system)
    #[arg(long, global = true, value_parser = parse_theme)]
    pub theme: Option<String>,

    /// Keymap preset (standard, vim, or emacs)
    #[arg(long, global = true)]
    pub keymap: Option<KeymapPreset>,

    /// Event poll interval in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub tick_rate: Option<u64>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Accept "system" or any name `ColorScheme` understands, normalized
fn parse_theme(s: &str) -> Result<String, String> {
    if s.trim().eq_ignore_ascii_case("system") {
        return Ok("system".to_string());
    }
    s.parse::<ColorScheme>().map(|scheme| scheme.name().to_string())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration
    Config {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Show where logs are written and how to follow them
    Logs,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Path of the config file this invocation reads
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(get_config_path)
    }

    /// Load the config file and apply command-line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config_path())?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme.clone_from(theme);
        }
        if let Some(preset) = self.keymap {
            config.keymap.preset = preset;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate_ms = tick_rate;
        }
    }

    /// Run a subcommand
    ///
    /// Returns `Ok(false)` when no subcommand was given and the TUI should start.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Config { json }) => {
                let config = self.load_config()?;
                println!("# {}", self.config_path().display());
                if *json {
                    println!("{}", config.to_json()?);
                } else {
                    print!("{}", config.to_toml()?);
                }
                Ok(true)
            }
            Some(Commands::Logs) => {
                let log_path = get_log_path();
                println!("Logs are written to: {}", log_path.display());
                println!("Follow them with:    tail -f {:?}", log_path);
                println!("Set RUST_LOG=debug for scroll and key details.");
                Ok(true)
            }
            Some(Commands::Completions { shell }) => {
                completions::generate(*shell)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::parse_from(["scrollfocus"]);
        assert!(cli.command.is_none());
        assert!(!cli.execute().unwrap());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::parse_from([
            "scrollfocus",
            "--theme",
            "light",
            "--keymap",
            "vim",
            "--tick-rate",
            "16",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.theme, "light");
        assert_eq!(config.keymap.preset, KeymapPreset::Vim);
        assert_eq!(config.tick_rate_ms, 16);
    }

    #[test]
    fn test_bad_keymap_is_rejected() {
        assert!(Cli::try_parse_from(["scrollfocus", "--keymap", "helix"]).is_err());
    }

    #[test]
    fn test_theme_flag_is_validated() {
        let cli = Cli::parse_from(["scrollfocus", "--theme", "Light"]);
        assert_eq!(cli.theme.as_deref(), Some("light"));

        let cli = Cli::parse_from(["scrollfocus", "--theme", "system"]);
        assert_eq!(cli.theme.as_deref(), Some("system"));

        assert!(Cli::try_parse_from(["scrollfocus", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_subcommand_with_global_flag() {
        let cli = Cli::parse_from(["scrollfocus", "config", "--json", "--theme", "dark"]);
        assert!(matches!(cli.command, Some(Commands::Config { json: true })));
        assert_eq!(cli.theme.as_deref(), Some("dark"));
    }
}
