use clap::Parser;
use puzzle_oracles::core::AntinodeCounter;
use puzzle_oracles::utils::{logger, validation::validate_input_exists};
use puzzle_oracles::{LocalInput, PuzzleEngine};

#[derive(Parser)]
#[command(name = "puzzle-16")]
#[command(about = "Count grid cells collinear with a pair of same-labelled antennas")]
struct Args {
    /// Path to input file of puzzle 16
    #[arg(long = "input_path")]
    input_path: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Log process CPU and memory per phase
    #[arg(long)]
    monitor: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    if let Err(e) = validate_input_exists(&args.input_path) {
        e.report_and_exit();
    }

    let engine = PuzzleEngine::new_with_monitoring(LocalInput::default(), args.monitor);
    match engine.run(&AntinodeCounter, &args.input_path) {
        Ok(solution) => println!("The solution to puzzle 16 is: {}", solution.answer),
        Err(e) => e.report_and_exit(),
    }
}
