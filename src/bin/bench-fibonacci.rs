use std::process;

use anyhow::Result;
use clap::Parser;

use microbench::fibonacci;
use microbench::report;

#[derive(Parser)]
#[command(name = "bench-fibonacci", version, about = "Time recursive and iterative Fibonacci")]
struct Cli {}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let outcome = fibonacci::run(fibonacci::RECURSIVE_N, fibonacci::ITERATIVE_N);
    report::print_report(&outcome.lines())?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
