use std::process::exit;

use crate::args::{Args, Commands};
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use typed_pair::{divide, Pair};

mod args;

pub fn main() {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    match args.command {
        Commands::Divide {
            numerator,
            denominator,
        } => run_divide(numerator, denominator),
        Commands::Pair {
            first,
            second,
            other_first,
            other_second,
        } => run_pair(first, second, other_first, other_second),
    }
}

fn run_divide(numerator: i32, denominator: i32) {
    match divide(numerator, denominator) {
        Ok(quotient) => println!("{} / {} = {}", numerator, denominator, quotient),
        Err(error) => {
            log::error!("{}", error);
            exit(1);
        }
    }
}

fn run_pair(first: i64, second: f64, other_first: i64, other_second: f64) {
    let pair = Pair::new(first, second);
    let other = Pair::new(other_first, other_second);

    println!("Pair 1: {}", pair);
    println!("Pair 2: {}", other);
    println!("Pair 1 + Pair 2: {}", pair + other);
    println!("Pair 1 - Pair 2: {}", pair - other);

    if pair == other {
        println!("Pair 1 is equal to Pair 2");
    } else {
        println!("Pair 1 is not equal to Pair 2");
    }

    if pair < other {
        println!("Pair 1 is less than Pair 2");
    } else if pair > other {
        println!("Pair 1 is greater than Pair 2");
    }
}
