use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write report {path}: {source}")]
    ReportWriteError {
        path: String,
        source: std::io::Error,
    },

    #[error("{path} does not exist")]
    InputNotFoundError { path: String },

    #[error("Parse error on line {line}: invalid integer token '{token}'")]
    ParseError { line: usize, token: String },

    #[error("Unknown puzzle: {id}")]
    UnknownPuzzleError { id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Puzzle {puzzle} answered {actual}, expected {expected}")]
    AnswerMismatchError {
        puzzle: String,
        expected: u64,
        actual: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Config,
    Output,
    Verification,
}

impl PuzzleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PuzzleError::IoError(_) | PuzzleError::InputNotFoundError { .. } => {
                ErrorCategory::Input
            }
            PuzzleError::ParseError { .. } => ErrorCategory::Parse,
            PuzzleError::UnknownPuzzleError { .. }
            | PuzzleError::ConfigError { .. }
            | PuzzleError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            PuzzleError::SerializationError(_) | PuzzleError::ReportWriteError { .. } => {
                ErrorCategory::Output
            }
            PuzzleError::AnswerMismatchError { .. } => ErrorCategory::Verification,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PuzzleError::IoError(e) => format!("Could not read or write a file: {}", e),
            PuzzleError::ParseError { line, token } => {
                format!("Line {} contains '{}', which is not an integer", line, token)
            }
            PuzzleError::UnknownPuzzleError { id } => {
                format!("There is no oracle for puzzle '{}'", id)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input path exists and is readable",
            ErrorCategory::Parse => "Make sure every line holds whitespace-separated integers",
            ErrorCategory::Config => "Check the command-line flags or the batch TOML file",
            ErrorCategory::Output => "Check that the report path is writable",
            ErrorCategory::Verification => "Compare the input file against the expected answer",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Parse => 3,
            ErrorCategory::Output => 4,
            ErrorCategory::Verification => 5,
        }
    }

    /// Logs the failure, prints a friendly message on stderr and exits with `exit_code`.
    pub fn report_and_exit(&self) -> ! {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?})",
            self,
            self.category()
        );
        eprintln!("❌ {}", self.user_friendly_message());
        eprintln!("💡 {}", self.recovery_suggestion());
        std::process::exit(self.exit_code())
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_reports_line_and_token() {
        let err = PuzzleError::ParseError {
            line: 4,
            token: "x7".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert!(err.to_string().contains("line 4"));
        assert!(err.user_friendly_message().contains("'x7'"));
    }

    #[test]
    fn test_report_write_failure_is_output_side() {
        let err = PuzzleError::ReportWriteError {
            path: "out/report.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.recovery_suggestion(), "Check that the report path is writable");
    }

    #[test]
    fn test_missing_input_message() {
        let err = PuzzleError::InputNotFoundError {
            path: "/tmp/nope.txt".to_string(),
        };
        assert_eq!(err.to_string(), "/tmp/nope.txt does not exist");
        assert_eq!(err.exit_code(), 1);
    }
}
