use std::hint::black_box;
use std::time::Duration;

use crate::report::Line;
use crate::timing::time;

pub const ARRAY_SIZE: usize = 1_000_000;

/// Results of one array benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct ArrayOutcome {
    pub sum: i64,
    pub reversed_sum: i64,
    pub elapsed: Duration,
}

impl ArrayOutcome {
    pub fn lines(&self) -> Vec<Line> {
        vec![
            Line::value("Sum", self.sum),
            Line::value("Reversed sum", self.reversed_sum),
            Line::elapsed("Array time", self.elapsed),
        ]
    }
}

/// `[0, 1, ..., n-1]`
pub fn sequence(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}

/// Reverse by swapping from both ends toward the middle; `len / 2` swaps.
pub fn reverse_in_place(values: &mut [i64]) {
    let len = values.len();
    for i in 0..len / 2 {
        values.swap(i, len - 1 - i);
    }
}

/// Build, sum, reverse and re-sum a sequence of `size` integers. The whole
/// sequence is timed as one region.
pub fn run(size: usize) -> ArrayOutcome {
    let timed = time(|| {
        let mut values = sequence(black_box(size));
        let before = sum(&values);
        reverse_in_place(black_box(&mut values));
        let after = sum(&values);
        (before, after)
    });
    let (sum, reversed_sum) = timed.value;

    ArrayOutcome {
        sum,
        reversed_sum,
        elapsed: timed.elapsed,
    }
}
