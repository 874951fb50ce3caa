use std::io;
use std::process::ExitCode;

use clap::Parser;
use hashcrack_cli::{Args, run};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    // -v wins over RUST_LOG; without either only warnings are shown
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut stdout = io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(outcome) if outcome.exhausted => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hashcrack: {e}");
            ExitCode::FAILURE
        }
    }
}
