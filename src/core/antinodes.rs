use crate::domain::model::{AntennaMap, Grid, Position, PuzzleId};
use crate::domain::ports::Puzzle;
use crate::utils::error::Result;
use std::collections::HashSet;

pub const EMPTY_CELL: char = '.';

impl Grid {
    /// Rows are input lines; trailing blank lines are dropped and the first row sets the width.
    pub fn parse(raw: &str) -> Self {
        let mut rows: Vec<Vec<char>> = raw.lines().map(|line| line.chars().collect()).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        let width = rows.first().map_or(0, Vec::len);
        Self { rows, width }
    }
}

impl AntennaMap {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut map = AntennaMap::default();
        for position in grid.cells() {
            let label = grid
                .rows
                .get(position.row as usize)
                .and_then(|row| row.get(position.col as usize));
            if let Some(&label) = label.filter(|&&c| c != EMPTY_CELL) {
                map.0.entry(label).or_default().push(position);
            }
        }
        map
    }
}

/// Cross-product test: `z` lies on the line through `p1` and `p2`.
pub fn is_collinear(p1: Position, p2: Position, z: Position) -> bool {
    (p2.row - p1.row) * (z.col - p1.col) == (z.row - p1.row) * (p2.col - p1.col)
}

/// Every grid cell collinear with at least one pair of same-labelled antennas.
pub fn antinodes(grid: &Grid) -> HashSet<Position> {
    collect_antinodes(grid, &AntennaMap::from_grid(grid))
}

pub fn collect_antinodes(grid: &Grid, antennas: &AntennaMap) -> HashSet<Position> {
    let mut found = HashSet::new();

    for (label, positions) in antennas.labels() {
        for (idx, &p1) in positions.iter().enumerate() {
            for &p2 in &positions[idx + 1..] {
                found.extend(grid.cells().filter(|&z| is_collinear(p1, p2, z)));
            }
        }
        tracing::trace!("Label '{}' done, {} antinodes so far", label, found.len());
    }

    found
}

pub fn count_antinodes(grid: &Grid) -> u64 {
    antinodes(grid).len() as u64
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AntinodeCounter;

impl Puzzle for AntinodeCounter {
    type Input = Grid;

    fn id(&self) -> PuzzleId {
        PuzzleId::P16
    }

    fn parse(&self, raw: &str) -> Result<Self::Input> {
        Ok(Grid::parse(raw))
    }

    fn solve(&self, input: &Self::Input) -> u64 {
        tracing::debug!("Grid is {}x{}", input.height(), input.width);
        count_antinodes(input)
    }
}
