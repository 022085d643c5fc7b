use clap::Parser;
use puzzle_oracles::core::MulScanner;
use puzzle_oracles::utils::logger;
use puzzle_oracles::{LocalInput, PuzzleEngine};

#[derive(Parser)]
#[command(name = "puzzle-05")]
#[command(about = "Sum the products of every mul(A,B) in a text")]
struct Args {
    /// Input file scanned as a single blob
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
    match engine.run(&MulScanner, &args.input_path) {
        Ok(solution) => println!("{}", solution.answer),
        Err(e) => e.report_and_exit(),
    }
}
