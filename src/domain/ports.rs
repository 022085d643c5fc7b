use crate::domain::model::PuzzleId;
use crate::utils::error::Result;

/// A single-shot oracle: parse the whole input, then compute one answer.
pub trait Puzzle {
    type Input;

    fn id(&self) -> PuzzleId;
    fn parse(&self, raw: &str) -> Result<Self::Input>;
    fn solve(&self, input: &Self::Input) -> u64;
}

/// Where puzzle inputs are read from.
pub trait InputSource {
    fn read_input(&self, path: &str) -> Result<String>;
}
