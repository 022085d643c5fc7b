use crate::core::sequence::{count_valid, is_valid, parse_sequences};
use crate::domain::model::{PuzzleId, Sequence};
use crate::domain::ports::Puzzle;
use crate::utils::error::Result;

/// The original values followed by every single-deletion variant, `len + 1` in total.
pub fn candidates(values: &[i64]) -> impl Iterator<Item = Vec<i64>> + '_ {
    std::iter::once(values.to_vec()).chain((0..values.len()).map(move |skip| {
        values
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != skip)
            .map(|(_, &value)| value)
            .collect::<Vec<i64>>()
    }))
}

/// Valid as-is, or valid after removing exactly one element.
pub fn is_tolerantly_valid(values: &[i64]) -> bool {
    candidates(values).any(|candidate| is_valid(&candidate))
}

pub fn count_tolerantly_valid(sequences: &[Sequence]) -> u64 {
    sequences
        .iter()
        .filter(|s| is_tolerantly_valid(s.values()))
        .count() as u64
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TolerantSequenceValidator;

impl Puzzle for TolerantSequenceValidator {
    type Input = Vec<Sequence>;

    fn id(&self) -> PuzzleId {
        PuzzleId::P04
    }

    fn parse(&self, raw: &str) -> Result<Self::Input> {
        parse_sequences(raw)
    }

    fn solve(&self, input: &Self::Input) -> u64 {
        let strict = count_valid(input);
        let tolerant = count_tolerantly_valid(input);
        tracing::debug!("{} strictly valid, {} rescued by one removal", strict, tolerant - strict);
        tolerant
    }
}
