pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::PuzzleId;
#[cfg(feature = "cli")]
use crate::utils::error::{PuzzleError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "puzzle-oracles")]
#[command(about = "Reference answers for small numbered puzzles")]
pub struct CliConfig {
    /// Puzzle number to solve (3, 4, 5 or 16)
    #[arg(long)]
    pub puzzle: Option<PuzzleId>,

    #[arg(long, default_value = "input.txt")]
    pub input_path: String,

    /// Run every puzzle listed in a batch TOML file instead
    #[arg(long, conflicts_with = "puzzle")]
    pub config: Option<String>,

    /// Fail unless the single run produces this answer
    #[arg(long, requires = "puzzle")]
    pub expected: Option<u64>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<String>,

    #[arg(long, help = "Log process CPU and memory per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }

        match &self.config {
            Some(config) => validate_path("config", config),
            None if self.puzzle.is_none() => Err(PuzzleError::ConfigError {
                message: "either --puzzle or --config is required".to_string(),
            }),
            None => validate_path("input_path", &self.input_path),
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_run() {
        let config = CliConfig::try_parse_from([
            "puzzle-oracles",
            "--puzzle",
            "16",
            "--input-path",
            "grid.txt",
        ])
        .unwrap();
        assert_eq!(config.puzzle, Some(PuzzleId::P16));
        assert_eq!(config.input_path, "grid.txt");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_input_path() {
        let config = CliConfig::try_parse_from(["puzzle-oracles", "--puzzle", "03"]).unwrap();
        assert_eq!(config.input_path, "input.txt");
    }

    #[test]
    fn test_unknown_puzzle_is_rejected() {
        assert!(CliConfig::try_parse_from(["puzzle-oracles", "--puzzle", "7"]).is_err());
    }

    #[test]
    fn test_requires_puzzle_or_config() {
        let config = CliConfig::try_parse_from(["puzzle-oracles"]).unwrap();
        assert!(config.validate().is_err());

        let config =
            CliConfig::try_parse_from(["puzzle-oracles", "--config", "batch.toml"]).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_puzzle_conflicts_with_config() {
        let parsed = CliConfig::try_parse_from([
            "puzzle-oracles",
            "--puzzle",
            "5",
            "--config",
            "batch.toml",
        ]);
        assert!(parsed.is_err());
    }
}
