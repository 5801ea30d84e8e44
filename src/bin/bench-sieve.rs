use std::process;

use anyhow::Result;
use clap::Parser;

use microbench::sieve;
use microbench::report;

#[derive(Parser)]
#[command(name = "bench-sieve", version, about = "Count primes up to one million with a Sieve of Eratosthenes")]
struct Cli {}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let outcome = sieve::run(sieve::SIEVE_LIMIT);
    report::print_report(&outcome.lines())?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
