use clap::Parser;
use puzzle_oracles::core::report::RunReport;
use puzzle_oracles::utils::{logger, validation::Validate};
use puzzle_oracles::{run_batch, BatchConfig, CliConfig, LocalInput, PuzzleEngine, Result};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting puzzle-oracles");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        e.report_and_exit();
    }
}

fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let report = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading batch configuration from: {}", path);
            let batch = BatchConfig::from_file(path)?;
            batch.validate()?;

            let monitor = config.monitor || batch.monitoring_enabled();
            let engine = PuzzleEngine::new_with_monitoring(LocalInput::default(), monitor);
            let report = run_batch(&engine, &batch)?;

            if let Some(path) = config.report.as_deref().or(batch.report_path()) {
                report.write_to(path)?;
            }
            report
        }
        None => {
            let engine = PuzzleEngine::new_with_monitoring(LocalInput::default(), config.monitor);
            let mut report = RunReport::new("single");
            if let Some(puzzle) = config.puzzle {
                let solution = engine.solve(puzzle, &config.input_path)?;
                report.record(&solution, config.expected);
            }

            if let Some(path) = &config.report {
                report.write_to(path)?;
            }
            report
        }
    };

    for entry in &report.entries {
        println!("The solution to puzzle {} is: {}", entry.puzzle, entry.answer);
    }

    report.verify()
}
