use std::hint::black_box;
use std::time::Duration;

use crate::report::Line;
use crate::timing::time;

pub const SIEVE_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SieveOutcome {
    pub limit: usize,
    pub prime_count: usize,
    pub elapsed: Duration,
}

impl SieveOutcome {
    pub fn lines(&self) -> Vec<Line> {
        vec![
            Line::value(format!("Primes up to {}", self.limit), self.prime_count),
            Line::elapsed("Sieve time", self.elapsed),
        ]
    }
}

/// Sieve of Eratosthenes over `0..=limit`.
///
/// After sieving, `marks[i]` is true iff `i` is prime. Striking starts at
/// `i * i` for each prime `i`; smaller multiples were struck by smaller primes.
pub fn sieve(limit: usize) -> Vec<bool> {
    let mut marks = vec![true; limit + 1];
    marks[0] = false;
    if limit >= 1 {
        marks[1] = false;
    }

    let mut i = 2;
    while i * i <= limit {
        if marks[i] {
            for multiple in (i * i..=limit).step_by(i) {
                marks[multiple] = false;
            }
        }
        i += 1;
    }
    marks
}

pub fn count_primes(marks: &[bool]) -> usize {
    marks.iter().filter(|&&prime| prime).count()
}

/// Allocate, sieve and count, timed as one region.
pub fn run(limit: usize) -> SieveOutcome {
    let timed = time(|| count_primes(&sieve(black_box(limit))));
    SieveOutcome {
        limit,
        prime_count: timed.value,
        elapsed: timed.elapsed,
    }
}
