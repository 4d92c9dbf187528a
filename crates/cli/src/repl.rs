use crate::report::render_panel;
use addend_calculator::Calculator;
use anyhow::Result;
use std::io::{BufRead, Write};

const QUIT: &str = ":quit";
const INVALID_UTF8: &str = "Input is not valid UTF-8";

/// Evaluate one input per line until EOF or `:quit`.
///
/// Every line is independent: the previous result or error is replaced, never merged.
pub fn run(
    calculator: &Calculator,
    input: impl BufRead,
    mut out: impl Write,
    prompt: bool,
) -> Result<()> {
    let mut lines = input.split(b'\n');
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(bytes) = lines.next() else {
            break;
        };
        let Ok(line) = String::from_utf8(bytes?) else {
            log::warn!("Skipping input line that is not valid UTF-8");
            writeln!(out, "{INVALID_UTF8}")?;
            continue;
        };
        let line = line.trim();
        if line == QUIT {
            break;
        }

        writeln!(out, "{}", render_panel(&calculator.outcome(line)))?;
    }
    Ok(())
}
