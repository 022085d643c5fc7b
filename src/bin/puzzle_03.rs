use clap::Parser;
use puzzle_oracles::core::SequenceValidator;
use puzzle_oracles::utils::logger;
use puzzle_oracles::{LocalInput, PuzzleEngine};

#[derive(Parser)]
#[command(name = "puzzle-03")]
#[command(about = "Count lines that are strictly monotonic with steps of 1 to 3")]
struct Args {
    /// Input file, one whitespace-separated sequence per line
    #[arg(long, default_value = "input.txt")]
    input_path: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let engine = PuzzleEngine::new(LocalInput::default());
    match engine.run(&SequenceValidator, &args.input_path) {
        Ok(solution) => println!("{}", solution.answer),
        Err(e) => e.report_and_exit(),
    }
}
