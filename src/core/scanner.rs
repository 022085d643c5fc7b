use crate::domain::model::{MulMatch, PuzzleId};
use crate::domain::ports::Puzzle;
use crate::utils::error::Result;
use regex::Regex;
use std::sync::LazyLock;

// Operands are one to three ASCII digits; `mul(,5)` never matches.
static MUL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mul\(([0-9]{1,3}),([0-9]{1,3})\)").unwrap());

/// Left-to-right, non-overlapping `mul(A,B)` hits in `text`.
pub fn find_matches(text: &str) -> impl Iterator<Item = MulMatch> + '_ {
    MUL_PATTERN.captures_iter(text).filter_map(|caps| {
        let left = caps[1].parse().ok()?;
        let right = caps[2].parse().ok()?;
        Some(MulMatch { left, right })
    })
}

pub fn sum_products(text: &str) -> u64 {
    find_matches(text).map(|m| m.product()).sum()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MulScanner;

impl Puzzle for MulScanner {
    type Input = String;

    fn id(&self) -> PuzzleId {
        PuzzleId::P05
    }

    fn parse(&self, raw: &str) -> Result<Self::Input> {
        Ok(raw.to_string())
    }

    fn solve(&self, input: &Self::Input) -> u64 {
        tracing::debug!("Scanned {} mul() matches", find_matches(input).count());
        sum_products(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_brackets_are_skipped() {
        assert_eq!(sum_products("xmul(2,4)&mul[3,7]!^mul(5,5)"), 33);
    }

    #[test]
    fn test_sample_with_noise() {
        let text = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!(sum_products(text), 161);
    }

    #[test]
    fn test_digit_limits() {
        assert_eq!(sum_products("mul(999,999)"), 998_001);
        assert_eq!(sum_products("mul(1234,2)"), 0);
        assert_eq!(sum_products("mul(,5)mul(5,)mul(,)"), 0);
    }

    #[test]
    fn test_no_sign_or_whitespace() {
        assert_eq!(sum_products("mul(-2,3)mul( 2,3)mul(2, 3)"), 0);
    }

    #[test]
    fn test_matches_in_order() {
        let found: Vec<MulMatch> = find_matches("mul(1,2)..mul(30,4)").collect();
        assert_eq!(
            found,
            vec![
                MulMatch { left: 1, right: 2 },
                MulMatch { left: 30, right: 4 }
            ]
        );
    }

    #[test]
    fn test_puzzle_agrees_with_sum_products() {
        let text = "mul(1,2)..mul(30,4)mul[9,9]mul(7,6)".to_string();
        assert_eq!(MulScanner.solve(&text), sum_products(&text));
        assert_eq!(MulScanner.solve(&text), 164);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(MulScanner.solve(&String::new()), 0);
    }
}
