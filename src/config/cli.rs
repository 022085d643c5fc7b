use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Reads inputs from the filesystem, relative to `base_path` unless absolute.
#[derive(Debug, Clone, Default)]
pub struct LocalInput {
    base_path: String,
}

impl LocalInput {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl InputSource for LocalInput {
    fn read_input(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        let content = fs::read_to_string(full_path)?;
        Ok(content)
    }
}
