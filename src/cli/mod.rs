//! CLI 模块

pub mod init;
pub mod themes;

use clap::{Parser, Subcommand};

use crate::store::FilterMode;

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(version)]
#[command(about = "Keyboard-driven task list for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive task list (default)
    Tui {
        /// Theme to start with (overrides config)
        #[arg(short, long)]
        theme: Option<String>,
        /// Initial filter: all, active or completed (overrides config)
        #[arg(short, long, value_parser = parse_filter)]
        filter: Option<FilterMode>,
    },
    /// List available color themes
    Themes,
    /// Write a default config file to ~/.taskflow/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn parse_filter(s: &str) -> Result<FilterMode, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tui_flags() {
        let cli = Cli::try_parse_from(["taskflow", "tui", "--theme", "mint", "-f", "active"]).unwrap();
        match cli.command {
            Some(Commands::Tui { theme, filter }) => {
                assert_eq!(theme.as_deref(), Some("mint"));
                assert_eq!(filter, Some(FilterMode::Active));
            }
            _ => panic!("expected tui command"),
        }
    }

    #[test]
    fn test_invalid_filter_rejected() {
        assert!(Cli::try_parse_from(["taskflow", "tui", "--filter", "done"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["taskflow"]).unwrap();
        assert!(cli.command.is_none());
    }
}
