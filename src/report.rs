use std::io::{self, Write};
use std::time::Duration;

use owo_colors::{OwoColorize, Stream};

use crate::errors::BenchError;
use crate::timing::whole_millis;

/// One labelled line of benchmark output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Value { label: String, value: String },
    Elapsed { label: String, elapsed: Duration },
}

impl Line {
    pub fn value(label: impl Into<String>, value: impl ToString) -> Self {
        Line::Value {
            label: label.into(),
            value: value.to_string(),
        }
    }

    pub fn elapsed(label: impl Into<String>, elapsed: Duration) -> Self {
        Line::Elapsed {
            label: label.into(),
            elapsed,
        }
    }
}

/// Format a duration as whole milliseconds, e.g. "12ms".
pub fn format_millis(elapsed: Duration) -> String {
    format!("{}ms", whole_millis(elapsed))
}

/// Render report lines as `label: value`, one per line.
pub fn format_report(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            Line::Value { label, value } => {
                out.push_str(&format!("{}: {}\n", label, value));
            }
            Line::Elapsed { label, elapsed } => {
                // Millis: yellow when stdout is a color terminal
                let millis = format_millis(*elapsed)
                    .if_supports_color(Stream::Stdout, |s| s.yellow())
                    .to_string();
                out.push_str(&format!("{}: {}\n", label, millis));
            }
        }
    }
    out
}

pub fn write_report(out: &mut impl Write, lines: &[Line]) -> Result<(), BenchError> {
    out.write_all(format_report(lines).as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn print_report(lines: &[Line]) -> Result<(), BenchError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, lines)
}
