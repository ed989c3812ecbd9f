use std::io;
use std::process::ExitCode;

use clap::Parser;
use hackdice::cli::{run, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&args, &mut out);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shdroll: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
