use crate::core::{AntinodeCounter, MulScanner, SequenceValidator, TolerantSequenceValidator};
use crate::domain::model::{PuzzleId, Solution};
use crate::domain::ports::{InputSource, Puzzle};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::Instant;

pub struct PuzzleEngine<S: InputSource> {
    source: S,
    monitor: SystemMonitor,
}

impl<S: InputSource> PuzzleEngine<S> {
    pub fn new(source: S) -> Self {
        Self::new_with_monitoring(source, false)
    }

    pub fn new_with_monitoring(source: S, monitor_enabled: bool) -> Self {
        Self {
            source,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Reads the whole input, parses it, then solves. Nothing is returned on a partial failure.
    pub fn run<P: Puzzle>(&self, puzzle: &P, input_path: &str) -> Result<Solution> {
        let started = Instant::now();
        let id = puzzle.id();
        tracing::info!("🧩 Puzzle {} ({}) on {}", id, id.title(), input_path);

        let raw = self.source.read_input(input_path)?;
        tracing::debug!("Read {} bytes", raw.len());
        self.monitor.log_stats("read");

        let input = puzzle.parse(&raw)?;
        self.monitor.log_stats("parse");

        let answer = puzzle.solve(&input);
        self.monitor.log_stats("solve");

        let duration = started.elapsed();
        tracing::info!("✅ Puzzle {} answered {} in {:?}", id, answer, duration);
        self.monitor.log_final_stats();

        Ok(Solution {
            puzzle: id,
            input_path: input_path.to_string(),
            answer,
            duration,
        })
    }

    pub fn solve(&self, id: PuzzleId, input_path: &str) -> Result<Solution> {
        match id {
            PuzzleId::P03 => self.run(&SequenceValidator, input_path),
            PuzzleId::P04 => self.run(&TolerantSequenceValidator, input_path),
            PuzzleId::P05 => self.run(&MulScanner, input_path),
            PuzzleId::P16 => self.run(&AntinodeCounter, input_path),
        }
    }
}
