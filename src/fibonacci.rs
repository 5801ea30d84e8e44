use std::hint::black_box;
use std::time::Duration;

use crate::report::Line;
use crate::timing::time;

pub const RECURSIVE_N: u32 = 35;
pub const ITERATIVE_N: u32 = 50;

/// Both Fibonacci phases with their individual timings.
#[derive(Debug, Clone, Copy)]
pub struct FibonacciOutcome {
    pub recursive_n: u32,
    pub recursive: i64,
    pub recursive_elapsed: Duration,
    pub iterative_n: u32,
    pub iterative: i64,
    pub iterative_elapsed: Duration,
}

impl FibonacciOutcome {
    pub fn lines(&self) -> Vec<Line> {
        vec![
            Line::value(
                format!("Fibonacci recursive ({})", self.recursive_n),
                self.recursive,
            ),
            Line::elapsed("Recursive time", self.recursive_elapsed),
            Line::value(
                format!("Fibonacci iterative ({})", self.iterative_n),
                self.iterative,
            ),
            Line::elapsed("Iterative time", self.iterative_elapsed),
        ]
    }
}

/// Naive double recursion: exponential in `n`.
pub fn fib_recursive(n: u32) -> i64 {
    if n <= 1 {
        return n as i64;
    }
    fib_recursive(n - 1) + fib_recursive(n - 2)
}

/// Linear-time Fibonacci with two rolling accumulators.
pub fn fib_iterative(n: u32) -> i64 {
    if n == 0 {
        return 0;
    }
    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for _ in 1..n {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

/// Time the recursive and iterative phases independently.
pub fn run(recursive_n: u32, iterative_n: u32) -> FibonacciOutcome {
    let recursive = time(|| fib_recursive(black_box(recursive_n)));
    let iterative = time(|| fib_iterative(black_box(iterative_n)));

    FibonacciOutcome {
        recursive_n,
        recursive: recursive.value,
        recursive_elapsed: recursive.elapsed,
        iterative_n,
        iterative: iterative.value,
        iterative_elapsed: iterative.elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterative_base_cases() {
        assert_eq!(fib_iterative(0), 0);
        assert_eq!(fib_iterative(1), 1);
        assert_eq!(fib_iterative(2), 1);
    }

    #[test]
    fn recursive_base_cases() {
        assert_eq!(fib_recursive(0), 0);
        assert_eq!(fib_recursive(1), 1);
        assert_eq!(fib_recursive(2), 1);
    }

    #[test]
    fn iterative_fifty() {
        assert_eq!(fib_iterative(50), 12_586_269_025);
    }

    #[test]
    fn recursive_known_values() {
        assert_eq!(fib_recursive(10), 55);
        assert_eq!(fib_recursive(20), 6765);
    }

    #[test]
    fn iterative_largest_i64_value() {
        // fib(92) is the last value that fits in an i64
        assert_eq!(fib_iterative(92), 7_540_113_804_746_346_429);
    }

    #[test]
    fn run_reports_both_phases() {
        let outcome = run(20, 50);
        assert_eq!(outcome.recursive, 6765);
        assert_eq!(outcome.iterative, 12_586_269_025);
        assert_eq!(outcome.recursive_n, 20);
        assert_eq!(outcome.iterative_n, 50);
    }

    #[test]
    fn lines_label_inputs() {
        let outcome = FibonacciOutcome {
            recursive_n: 35,
            recursive: 9_227_465,
            recursive_elapsed: Duration::from_millis(40),
            iterative_n: 50,
            iterative: 12_586_269_025,
            iterative_elapsed: Duration::ZERO,
        };
        let rendered = crate::report::format_report(&outcome.lines());
        assert!(rendered.contains("Fibonacci recursive (35): 9227465\n"));
        assert!(rendered.contains("Fibonacci iterative (50): 12586269025\n"));
        assert!(rendered.contains("Recursive time: "));
        assert!(rendered.contains("Iterative time: "));
    }
}
