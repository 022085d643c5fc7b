pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalInput, toml_config::BatchConfig};
pub use core::{batch::run_batch, engine::PuzzleEngine, report::RunReport};
pub use domain::model::{PuzzleId, Solution};
pub use utils::error::{PuzzleError, Result};
