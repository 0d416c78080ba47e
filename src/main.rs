use std::fs;

use clap::Parser;
use rdcalc::{evaluate, evaluate_value};

/// rdcalc evaluates plain arithmetic expressions with `+ - * /`, unary
/// sign, decimal literals, and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a file path and read the statement from it.
    #[arg(short, long)]
    file: bool,

    /// Print the raw double-precision value instead of the rounded
    /// four-digit form.
    #[arg(short, long)]
    raw: bool,

    statement: String,
}

fn main() {
    let args = Args::parse();

    let statement = if args.file {
        fs::read_to_string(&args.statement).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.statement);
            std::process::exit(1);
        })
    } else {
        args.statement
    };

    if args.raw {
        match evaluate_value(&statement) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    } else {
        match evaluate(&statement) {
            Some(result) => println!("{result}"),
            None => {
                eprintln!("Invalid expression.");
                std::process::exit(1);
            },
        }
    }
}
