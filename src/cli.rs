use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "carstock", about = "Browse and maintain a price-ordered car inventory")]
pub struct Args {
    /// Data file with five lines per car: brand, model, year, mileage, price
    #[arg(value_name = "FILE", default_value = "carros.txt")]
    pub file: PathBuf,

    /// Number of cars that can be inserted beyond those loaded from FILE
    #[arg(long = "extra-capacity", value_name = "N", default_value_t = 10)]
    pub extra_capacity: usize,

    /// Do not clear the terminal between commands
    #[arg(long = "no-clear")]
    pub no_clear: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
