use crate::utils::error::PuzzleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Numbered puzzle that has an oracle in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PuzzleId {
    /// Sequence validator.
    P03,
    /// Tolerant sequence validator.
    P04,
    /// Pattern-multiply scanner.
    P05,
    /// Grid collinearity counter.
    P16,
}

impl PuzzleId {
    pub const ALL: [PuzzleId; 4] = [PuzzleId::P03, PuzzleId::P04, PuzzleId::P05, PuzzleId::P16];

    pub fn number(self) -> u8 {
        match self {
            PuzzleId::P03 => 3,
            PuzzleId::P04 => 4,
            PuzzleId::P05 => 5,
            PuzzleId::P16 => 16,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PuzzleId::P03 => "sequence validator",
            PuzzleId::P04 => "tolerant sequence validator",
            PuzzleId::P05 => "pattern-multiply scanner",
            PuzzleId::P16 => "grid collinearity counter",
        }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.number())
    }
}

impl FromStr for PuzzleId {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || PuzzleError::UnknownPuzzleError { id: s.to_string() };
        let number: u8 = s.trim().parse().map_err(|_| unknown())?;
        PuzzleId::ALL
            .into_iter()
            .find(|id| id.number() == number)
            .ok_or_else(unknown)
    }
}

impl TryFrom<String> for PuzzleId {
    type Error = PuzzleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PuzzleId> for String {
    fn from(id: PuzzleId) -> Self {
        id.to_string()
    }
}

/// One line of integers. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(pub Vec<i64>);

impl Sequence {
    pub fn values(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// Direction implied by the first pair; `None` when the pair is equal.
    pub fn between(a: i64, b: i64) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Direction::Increasing),
            std::cmp::Ordering::Greater => Some(Direction::Decreasing),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Operands of one `mul(A,B)` hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulMatch {
    pub left: u64,
    pub right: u64,
}

impl MulMatch {
    pub fn product(&self) -> u64 {
        self.left * self.right
    }
}

/// Grid coordinate; `row` is used as x and `col` as y throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    pub rows: Vec<Vec<char>>,
    pub width: usize,
}

impl Grid {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height()).flat_map(move |row| {
            (0..self.width).map(move |col| Position::new(row as i64, col as i64))
        })
    }
}

/// Label → positions in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AntennaMap(pub BTreeMap<char, Vec<Position>>);

impl AntennaMap {
    pub fn labels(&self) -> impl Iterator<Item = (&char, &Vec<Position>)> {
        self.0.iter()
    }

    pub fn positions(&self, label: char) -> &[Position] {
        self.0.get(&label).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Answer produced by one oracle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub puzzle: PuzzleId,
    pub input_path: String,
    pub answer: u64,
    pub duration: Duration,
}
