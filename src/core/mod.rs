pub mod antinodes;
pub mod batch;
pub mod engine;
pub mod report;
pub mod scanner;
pub mod sequence;
pub mod tolerant;

pub use crate::domain::model::{PuzzleId, Solution};
pub use crate::domain::ports::{InputSource, Puzzle};
pub use crate::utils::error::Result;
pub use antinodes::{count_antinodes, AntinodeCounter};
pub use scanner::{sum_products, MulScanner};
pub use sequence::{is_valid, SequenceValidator};
pub use tolerant::{is_tolerantly_valid, TolerantSequenceValidator};
