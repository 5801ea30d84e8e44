use std::time::{Duration, Instant};

/// A value paired with the wall-clock time it took to produce.
#[derive(Debug, Clone, Copy)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Runs `f`, sampling the clock immediately before and after.
pub fn time<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    Timed { value, elapsed }
}

/// Whole milliseconds, truncated.
pub fn whole_millis(elapsed: Duration) -> u128 {
    elapsed.as_millis()
}
