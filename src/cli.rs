use clap::Parser;

use crate::constants::{DEFAULT_OUTPUT, FIELD_COUNT};

#[derive(Parser, Debug)]
#[command(name = "config-bin")]
#[command(
    about = "Write seven model hyperparameters to a 28-byte binary config \
             (little-endian int32, no header)."
)]
pub struct Cli {
    /// Output file; created or truncated.
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Exactly seven integers: embedding dim, hidden dim, heads, layers, layers, vocab size,
    /// max context. Defaults to the built-in record.
    #[arg(
        short = 'v',
        long = "values",
        num_args = FIELD_COUNT,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub values: Option<Vec<i64>>,

    /// Also print a hex dump of the written bytes to stdout.
    #[arg(short = 'x', long = "hex")]
    pub hex: bool,
}
