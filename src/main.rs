use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use exparse::evaluate;
use tracing_subscriber::EnvFilter;

/// exparse evaluates infix expressions made of numbers, single-letter
/// variables, `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exparse to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Logs each pipeline stage to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression, or a path with `--file`. Reads standard input when
    /// omitted.
    contents: Option<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "exparse=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn read_lines(args: &Args) -> io::Result<Vec<String>> {
    match &args.contents {
        Some(path) if args.file => {
            Ok(fs::read_to_string(path)?.lines().map(str::to_owned).collect())
        },
        Some(expression) => Ok(vec![expression.clone()]),
        None => io::stdin().lock().lines().collect(),
    }
}

/// Prints the result of one expression. Returns `false` on a runtime fault.
fn report(expression: &str) -> bool {
    match evaluate(expression) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) if e.is_fault() => {
            tracing::warn!(expression, error = %e, "evaluation fault");
            eprintln!("Evaluation failed: {e}");
            false
        },
        Err(e) => {
            println!("{e}");
            true
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let lines = match read_lines(&args) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            return ExitCode::FAILURE;
        },
    };

    let reads_many = args.file || args.contents.is_none();
    let mut ok = true;
    for line in lines.iter().filter(|l| !(reads_many && l.trim().is_empty())) {
        ok &= report(line);
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
