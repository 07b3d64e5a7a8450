use std::io::{self, BufWriter};

use clap::Parser;

use carstock::cli::Args;
use carstock::config::Config;
use carstock::error::Result;
use carstock::session::{self, Session};

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

fn main() {
    setup_sigpipe();

    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("carstock: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::from_args(args);
    let inventory = session::open_inventory(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), BufWriter::new(stdout.lock()), inventory)
        .clear_screen(config.clear_screen);
    session.run()
}
