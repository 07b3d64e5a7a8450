use std::path::PathBuf;

use crate::cli::Args;

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub data_file: PathBuf,
    pub extra_capacity: usize,
    pub clear_screen: bool,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Config {
            data_file: args.file.clone(),
            extra_capacity: args.extra_capacity,
            clear_screen: !args.no_clear,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("carros.txt"),
            extra_capacity: 10,
            clear_screen: true,
        }
    }
}
