use std::hint::black_box;
use std::time::Duration;

use crate::report::Line;
use crate::timing::time;

pub const REPEAT_COUNT: usize = 100_000;
pub const UNIT: &str = "Hello";
pub const PATTERN: &str = "llo";

#[derive(Debug, Clone)]
pub struct StringsOutcome {
    pub pattern: String,
    pub length: usize,
    pub occurrences: usize,
    pub elapsed: Duration,
}

impl StringsOutcome {
    pub fn lines(&self) -> Vec<Line> {
        vec![
            Line::value("String length", self.length),
            Line::value(format!("Occurrences of '{}'", self.pattern), self.occurrences),
            Line::elapsed("String time", self.elapsed),
        ]
    }
}

/// `count` copies of `unit` in one string, allocated up front.
pub fn build_repeated(unit: &str, count: usize) -> String {
    let mut out = String::with_capacity(unit.len() * count);
    for _ in 0..count {
        out.push_str(unit);
    }
    out
}

/// Count matches of `pattern`, resuming one character past each match start
/// so overlapping occurrences are all counted. An empty pattern matches
/// nothing.
pub fn count_overlapping(haystack: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = haystack[pos..].find(pattern) {
        let start = pos + found;
        count += 1;
        // Step over one char, not one byte, to stay on a boundary
        let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
        pos = start + step;
    }
    count
}

/// Build the repeated string and scan it, timed as one region.
pub fn run(unit: &str, count: usize, pattern: &str) -> StringsOutcome {
    let timed = time(|| {
        let built = build_repeated(black_box(unit), black_box(count));
        let occurrences = count_overlapping(&built, pattern);
        (built.len(), occurrences)
    });
    let (length, occurrences) = timed.value;

    StringsOutcome {
        pattern: pattern.to_string(),
        length,
        occurrences,
        elapsed: timed.elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_length_is_unit_times_count() {
        assert_eq!(build_repeated("Hello", 3), "HelloHelloHello");
        assert_eq!(build_repeated("Hello", 0), "");
        assert_eq!(build_repeated("", 10), "");
    }

    #[test]
    fn build_preallocates() {
        let s = build_repeated("abc", 1000);
        assert_eq!(s.len(), 3000);
        assert!(s.capacity() >= 3000);
    }

    #[test]
    fn overlapping_matches_are_all_counted() {
        assert_eq!(count_overlapping("aaaa", "aa"), 3);
        assert_eq!(count_overlapping("abababa", "aba"), 3);
    }

    #[test]
    fn no_match() {
        assert_eq!(count_overlapping("Hello", "xyz"), 0);
        assert_eq!(count_overlapping("", "llo"), 0);
        assert_eq!(count_overlapping("ll", "llo"), 0);
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        assert_eq!(count_overlapping("Hello", ""), 0);
    }

    #[test]
    fn multibyte_haystack() {
        assert_eq!(count_overlapping("ééé", "éé"), 2);
        assert_eq!(count_overlapping("héllo héllo", "llo"), 2);
    }

    #[test]
    fn llo_once_per_hello() {
        let s = build_repeated(UNIT, 250);
        assert_eq!(count_overlapping(&s, PATTERN), 250);
    }

    #[test]
    fn run_full_workload() {
        let outcome = run(UNIT, REPEAT_COUNT, PATTERN);
        assert_eq!(outcome.length, 500_000);
        assert_eq!(outcome.occurrences, 100_000);
    }

    #[test]
    fn lines_quote_the_pattern() {
        let outcome = StringsOutcome {
            pattern: "llo".to_string(),
            length: 500_000,
            occurrences: 100_000,
            elapsed: Duration::from_millis(1),
        };
        let lines = outcome.lines();
        assert_eq!(lines[0], Line::value("String length", 500_000));
        assert_eq!(lines[1], Line::value("Occurrences of 'llo'", 100_000));
        assert_eq!(lines[2], Line::elapsed("String time", Duration::from_millis(1)));
    }
}
