use crate::error::{join_values, CalculatorError, Result};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A trimmed, non-empty piece of input with its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token text as it appeared in the input (trimmed)
    pub text: String,

    /// How the token contributed to the result
    pub kind: TokenKind,
}

impl Token {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Classification of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TokenKind {
    /// In range, added to the sum
    Counted(i64),

    /// Above the configured maximum, ignored
    OutOfRange(i64),

    /// Below zero, rejects the whole input
    Negative(i64),

    /// No numeric prefix, ignored
    NotANumber,
}

/// Per-token breakdown of one calculator invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Delimiters that were active (defaults plus any custom one)
    pub delimiters: Vec<String>,

    /// Tokens in input order
    pub tokens: Vec<Token>,
}

impl Evaluation {
    /// Sum of all counted tokens
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.tokens
            .iter()
            .filter_map(|token| match token.kind {
                TokenKind::Counted(value) => u64::try_from(value).ok(),
                _ => None,
            })
            .fold(0u64, u64::saturating_add)
    }

    /// Negative values in encounter order
    #[must_use]
    pub fn negatives(&self) -> Vec<i64> {
        self.tokens
            .iter()
            .filter_map(|token| match token.kind {
                TokenKind::Negative(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    /// Final outcome: the sum, or the rejection if any negatives were seen
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let negatives = self.negatives();
        if negatives.is_empty() {
            Outcome::Sum(self.sum())
        } else {
            Outcome::Rejected(negatives)
        }
    }
}

/// Discriminated result of a calculation.
///
/// Serializes as `{"ok": true, "value": 6}` or
/// `{"ok": false, "negatives": [-2, -4], "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sum(u64),
    Rejected(Vec<i64>),
}

impl Outcome {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Sum(_))
    }

    /// Human-readable rejection message, if rejected
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Sum(_) => None,
            Self::Rejected(negatives) => Some(format!(
                "Negative numbers not allowed: {}",
                join_values(negatives)
            )),
        }
    }

    pub fn into_result(self) -> Result<u64> {
        match self {
            Self::Sum(value) => Ok(value),
            Self::Rejected(negatives) => Err(CalculatorError::NegativeNumbers(negatives)),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Sum(value) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("value", value)?;
                state.end()
            }
            Self::Rejected(negatives) => {
                let mut state = serializer.serialize_struct("Outcome", 3)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("negatives", negatives)?;
                state.serialize_field("message", &self.message())?;
                state.end()
            }
        }
    }
}
