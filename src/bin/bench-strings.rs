use std::process;

use anyhow::Result;
use clap::Parser;

use microbench::strings;
use microbench::report;

#[derive(Parser)]
#[command(name = "bench-strings", version, about = "Build a repeated string and count overlapping pattern matches")]
struct Cli {}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let outcome = strings::run(strings::UNIT, strings::REPEAT_COUNT, strings::PATTERN);
    report::print_report(&outcome.lines())?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
