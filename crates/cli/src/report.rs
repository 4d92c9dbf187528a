use addend_calculator::{Evaluation, Outcome, TokenKind};
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

/// Write `text` plus a newline to stdout, tolerating a closed pipe
pub fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Serialize)]
struct AddOutput<'a> {
    #[serde(flatten)]
    outcome: &'a Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<&'a Evaluation>,
}

pub fn render_json(outcome: &Outcome, evaluation: Option<&Evaluation>) -> Result<String> {
    Ok(serde_json::to_string(&AddOutput {
        outcome,
        evaluation,
    })?)
}

/// Panel line shown by the interactive shell
pub fn render_panel(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Sum(value) => format!("Result: {value}"),
        Outcome::Rejected(_) => outcome.message().unwrap_or_default(),
    }
}

pub fn render_explain(evaluation: &Evaluation) -> String {
    let delimiters = evaluation
        .delimiters
        .iter()
        .map(|d| format!("{d:?}"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!("delimiters: {delimiters}\n");
    if evaluation.tokens.is_empty() {
        out.push_str("  (no tokens)\n");
    }

    let width = evaluation
        .tokens
        .iter()
        .map(|t| t.text.chars().count())
        .max()
        .unwrap_or(0);
    for token in &evaluation.tokens {
        let label = match token.kind {
            TokenKind::Counted(value) => format!("counted {value}"),
            TokenKind::OutOfRange(value) => format!("ignored {value} (out of range)"),
            TokenKind::Negative(value) => format!("negative {value}"),
            TokenKind::NotANumber => "ignored (not a number)".to_string(),
        };
        out.push_str(&format!("  {:<width$}  {label}\n", token.text));
    }
    out
}
