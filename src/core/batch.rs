use crate::config::toml_config::BatchConfig;
use crate::core::engine::PuzzleEngine;
use crate::core::report::RunReport;
use crate::domain::ports::InputSource;
use crate::utils::error::Result;

/// Runs every enabled entry in order. The first failing run aborts the batch.
pub fn run_batch<S: InputSource>(engine: &PuzzleEngine<S>, config: &BatchConfig) -> Result<RunReport> {
    let mut report = RunReport::new(config.batch.name.clone());
    let skipped = config.runs.len() - config.enabled_runs().count();
    if skipped > 0 {
        tracing::info!("⏭️ Skipping {} disabled run(s)", skipped);
    }

    for run in config.enabled_runs() {
        let solution = engine.solve(run.puzzle, &run.input_path)?;
        if let Some(expected) = run.expected {
            if expected == solution.answer {
                tracing::info!("🎯 Puzzle {} matches expected answer", run.puzzle);
            } else {
                tracing::warn!(
                    "❗ Puzzle {} answered {}, expected {}",
                    run.puzzle,
                    solution.answer,
                    expected
                );
            }
        }
        report.record(&solution, run.expected);
    }

    tracing::info!(
        "🎉 Batch '{}' finished {} run(s) in {}ms",
        report.name,
        report.entries.len(),
        report.total_duration_ms()
    );
    Ok(report)
}
