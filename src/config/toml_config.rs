use crate::domain::model::PuzzleId;
use crate::utils::error::{PuzzleError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    #[serde(default)]
    pub runs: Vec<RunDefinition>,
    pub monitoring: Option<MonitoringConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunDefinition {
    pub puzzle: PuzzleId,
    pub input_path: String,
    pub enabled: Option<bool>,
    /// Known answer to verify against.
    pub expected: Option<u64>,
}

impl RunDefinition {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub path: String,
}

impl BatchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| PuzzleError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn enabled_runs(&self) -> impl Iterator<Item = &RunDefinition> {
        self.runs.iter().filter(|run| run.is_enabled())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn report_path(&self) -> Option<&str> {
        self.report.as_ref().map(|r| r.path.as_str())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;

        if self.runs.is_empty() {
            return Err(PuzzleError::ConfigError {
                message: "batch defines no [[runs]]".to_string(),
            });
        }

        for (index, run) in self.runs.iter().enumerate() {
            validate_path(&format!("runs[{}].input_path", index), &run.input_path)?;
        }

        if let Some(path) = self.report_path() {
            validate_path("report.path", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[batch]
name = "daily"

[[runs]]
puzzle = "03"
input_path = "03.txt"
expected = 2

[[runs]]
puzzle = "16"
input_path = "16.txt"
enabled = false

[report]
path = "out/report.json"
"#;

    #[test]
    fn test_parse_basic_batch() {
        let config = BatchConfig::from_toml_str(BASIC).unwrap();
        assert_eq!(config.batch.name, "daily");
        assert_eq!(config.runs.len(), 2);
        assert_eq!(config.runs[0].puzzle, PuzzleId::P03);
        assert_eq!(config.runs[0].expected, Some(2));
        assert_eq!(config.enabled_runs().count(), 1);
        assert!(!config.monitoring_enabled());
        assert_eq!(config.report_path(), Some("out/report.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PUZZLE_ORACLES_TEST_DIR", "/data/puzzles");

        let config = BatchConfig::from_toml_str(
            r#"
[batch]
name = "env"

[[runs]]
puzzle = "5"
input_path = "${PUZZLE_ORACLES_TEST_DIR}/05.txt"

[[runs]]
puzzle = "4"
input_path = "${PUZZLE_ORACLES_UNSET_VAR}/04.txt"
"#,
        )
        .unwrap();
        assert_eq!(config.runs[0].input_path, "/data/puzzles/05.txt");
        assert_eq!(config.runs[1].input_path, "${PUZZLE_ORACLES_UNSET_VAR}/04.txt");

        std::env::remove_var("PUZZLE_ORACLES_TEST_DIR");
    }

    #[test]
    fn test_unknown_puzzle_fails_parsing() {
        let result = BatchConfig::from_toml_str(
            r#"
[batch]
name = "bad"

[[runs]]
puzzle = "42"
input_path = "x.txt"
"#,
        );
        assert!(matches!(result, Err(PuzzleError::ConfigError { .. })));
    }

    #[test]
    fn test_validation_rejects_empty_batches_and_paths() {
        let empty = BatchConfig::from_toml_str("[batch]\nname = \"none\"\n").unwrap();
        assert!(empty.validate().is_err());

        let blank_path = BatchConfig::from_toml_str(
            "[batch]\nname = \"b\"\n\n[[runs]]\npuzzle = \"3\"\ninput_path = \"\"\n",
        )
        .unwrap();
        assert!(blank_path.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = BatchConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.batch.name, "daily");
    }
}
