use clap::{command, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Turn debug logging on
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Divide two integers, reporting division by zero as an error
    Divide {
        /// Numerator
        #[arg(long, value_name = "INT", allow_hyphen_values = true)]
        numerator: i32,

        /// Denominator
        #[arg(long, value_name = "INT", allow_hyphen_values = true)]
        denominator: i32,
    },
    /// Build two pairs and show arithmetic and comparison on them
    Pair {
        /// First field of the first pair
        #[arg(long, value_name = "INT", allow_hyphen_values = true)]
        first: i64,

        /// Second field of the first pair
        #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
        second: f64,

        /// First field of the second pair
        #[arg(long, value_name = "INT", allow_hyphen_values = true)]
        other_first: i64,

        /// Second field of the second pair
        #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
        other_second: f64,
    },
}
