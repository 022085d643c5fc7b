use crate::utils::error::{PuzzleError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PuzzleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PuzzleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Fails fast when an input file is missing, naming its absolute location.
pub fn validate_input_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    Err(PuzzleError::InputNotFoundError {
        path: absolute.display().to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PuzzleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", "input.txt").is_ok());
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "   ").is_err());
        assert!(validate_path("input_path", "in\0put.txt").is_err());
    }

    #[test]
    fn test_validate_input_exists() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_input_exists(file.path()).is_ok());

        let err = validate_input_exists("definitely/not/here.txt").unwrap_err();
        let message = err.to_string();
        assert!(message.ends_with("definitely/not/here.txt does not exist"));
        assert!(Path::new(message.trim_end_matches(" does not exist")).is_absolute());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("batch.name", "daily").is_ok());
        assert!(validate_non_empty_string("batch.name", " \t").is_err());
    }
}
