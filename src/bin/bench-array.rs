use std::process;

use anyhow::Result;
use clap::Parser;

use microbench::array;
use microbench::report;

#[derive(Parser)]
#[command(name = "bench-array", version, about = "Sum, reverse and re-sum a sequence of one million integers")]
struct Cli {}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let outcome = array::run(array::ARRAY_SIZE);
    report::print_report(&outcome.lines())?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
