//! Command-line argument parsing
//!
//! Supports:
//! - Playing a scenario file against a fresh board
//! - Overriding the configured start mode and first id
//! - Printing the board after every step
//! - Persisting the effective start mode and first id

use clap::Parser;
use std::path::PathBuf;

use crate::config::BoardConfig;
use crate::model::Mode;

/// Drag-and-drop process board
#[derive(Parser, Debug)]
#[command(name = "procboard", version, about = "Play scripted edits on a process board")]
pub struct CliArgs {
    /// Scenario file to play (YAML)
    #[arg(value_name = "SCENARIO")]
    pub scenario: Option<PathBuf>,

    /// Mode to start in (viewer or editor), overrides the config file
    #[arg(short = 'm', long, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// First id handed out by the allocator, overrides the config file
    #[arg(long, value_name = "N")]
    pub first_id: Option<u64>,

    /// Print the board after every step
    #[arg(short = 't', long)]
    pub trace: bool,

    /// Write the effective start mode and first id to the config file
    #[arg(long)]
    pub save_config: bool,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub scenario: Option<PathBuf>,
    pub mode: Mode,
    pub first_id: u64,
    pub trace: bool,
    pub save_config: bool,
}

impl CliArgs {
    /// Merge parsed CLI args over the loaded config
    pub fn into_config(self, config: &BoardConfig) -> StartupConfig {
        StartupConfig {
            scenario: self.scenario,
            mode: self.mode.unwrap_or(config.start_mode),
            first_id: self.first_id.unwrap_or(config.first_id),
            trace: self.trace,
            save_config: self.save_config,
        }
    }
}

impl StartupConfig {
    /// The config file contents these settings correspond to
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            start_mode: self.mode,
            first_id: self.first_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_args_uses_config() {
        let config = BoardConfig {
            start_mode: Mode::Editor,
            first_id: 100,
        };
        let startup = parse(&["procboard"]).into_config(&config);
        assert_eq!(startup.scenario, None);
        assert_eq!(startup.mode, Mode::Editor);
        assert_eq!(startup.first_id, 100);
        assert!(!startup.trace);
        assert!(!startup.save_config);
    }

    #[test]
    fn test_flags_override_config() {
        let startup = parse(&["procboard", "demo.yaml", "--mode", "editor", "--first-id", "7", "-t"])
            .into_config(&BoardConfig::default());
        assert_eq!(startup.scenario, Some(PathBuf::from("demo.yaml")));
        assert_eq!(startup.mode, Mode::Editor);
        assert_eq!(startup.first_id, 7);
        assert!(startup.trace);
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        assert!(CliArgs::try_parse_from(["procboard", "--mode", "admin"]).is_err());
    }

    #[test]
    fn test_save_config_keeps_overrides() {
        let startup = parse(&["procboard", "--mode", "editor", "--first-id", "40", "--save-config"])
            .into_config(&BoardConfig::default());
        assert!(startup.save_config);
        assert_eq!(
            startup.board_config(),
            BoardConfig {
                start_mode: Mode::Editor,
                first_id: 40,
            }
        );
    }
}
