use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};

use skullking::calculate;

#[derive(Parser, Debug)]
#[command(
    name = "score",
    about = "Score a single Skull King round for one player."
)]
struct Args {
    /// Tricks the player bid at the start of the round
    #[arg(allow_negative_numbers = true)]
    bid: i64,

    /// Tricks the player actually won
    #[arg(allow_negative_numbers = true)]
    tricks: i64,

    /// Round number (1-based)
    #[arg(allow_negative_numbers = true)]
    round: i64,

    /// Emit the result as a JSON object instead of the summary line
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let result = calculate(args.bid, args.tricks, args.round);
    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}
