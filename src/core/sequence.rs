use crate::domain::model::{Direction, PuzzleId, Sequence};
use crate::domain::ports::Puzzle;
use crate::utils::error::{PuzzleError, Result};

/// Largest allowed gap between neighbouring values.
pub const MAX_GAP: u64 = 3;

/// True when the values move strictly in one direction with every gap in `1..=MAX_GAP`.
pub fn is_valid(values: &[i64]) -> bool {
    if values.len() < 2 {
        return false;
    }

    let Some(direction) = Direction::between(values[0], values[1]) else {
        return false;
    };

    values.windows(2).all(|pair| {
        let (a, b) = (pair[0], pair[1]);
        let ordered = match direction {
            Direction::Increasing => a < b,
            Direction::Decreasing => a > b,
        };
        ordered && a.abs_diff(b) <= MAX_GAP
    })
}

/// Parses one sequence per non-blank line.
pub fn parse_sequences(raw: &str) -> Result<Vec<Sequence>> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| PuzzleError::ParseError {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Sequence::from)
        })
        .collect()
}

pub fn count_valid(sequences: &[Sequence]) -> u64 {
    sequences.iter().filter(|s| is_valid(s.values())).count() as u64
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceValidator;

impl Puzzle for SequenceValidator {
    type Input = Vec<Sequence>;

    fn id(&self) -> PuzzleId {
        PuzzleId::P03
    }

    fn parse(&self, raw: &str) -> Result<Self::Input> {
        parse_sequences(raw)
    }

    fn solve(&self, input: &Self::Input) -> u64 {
        count_valid(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sequences_are_invalid() {
        assert!(!is_valid(&[]));
        assert!(!is_valid(&[7]));
    }

    #[test]
    fn test_equal_leading_pair_is_invalid() {
        assert!(!is_valid(&[4, 4]));
        assert!(!is_valid(&[4, 4, 5, 6, 7]));
    }

    #[test]
    fn test_monotonic_with_small_gaps() {
        assert!(is_valid(&[1, 2, 3, 6]));
        assert!(is_valid(&[8, 6, 4, 3]));
        assert!(is_valid(&[5, 2]));
    }

    #[test]
    fn test_direction_reversal_is_invalid() {
        assert!(!is_valid(&[1, 3, 2, 4, 5]));
        assert!(!is_valid(&[9, 7, 6, 2, 1]));
    }

    #[test]
    fn test_gap_too_large_or_flat_step() {
        assert!(!is_valid(&[1, 2, 7, 8, 9]));
        assert!(!is_valid(&[8, 6, 4, 4, 1]));
    }

    #[test]
    fn test_extreme_values_are_counted_invalid() {
        assert!(!is_valid(&[i64::MIN, i64::MAX]));
        assert!(!is_valid(&[i64::MAX, i64::MIN]));
        assert!(is_valid(&[i64::MAX - 2, i64::MAX]));
        assert!(is_valid(&[i64::MIN + 3, i64::MIN]));

        let sequences = parse_sequences(
            "-9223372036854775808 9223372036854775807\n9223372036854775807 -9223372036854775808\n",
        )
        .unwrap();
        assert_eq!(count_valid(&sequences), 0);
    }

    #[test]
    fn test_parse_and_count() {
        let raw = "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";
        let sequences = parse_sequences(raw).unwrap();
        assert_eq!(sequences.len(), 6);
        assert_eq!(count_valid(&sequences), 2);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_tolerates_extra_spaces() {
        let sequences = parse_sequences("1  2 3\n\n  -4 -5\r\n").unwrap();
        assert_eq!(sequences[0].values(), &[1, 2, 3]);
        assert_eq!(sequences[1].values(), &[-4, -5]);
    }

    #[test]
    fn test_parse_rejects_non_integer_token() {
        let err = parse_sequences("1 2 3\n4 five 6\n").unwrap_err();
        match err {
            PuzzleError::ParseError { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "five");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
