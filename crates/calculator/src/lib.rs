//! # Addend Calculator
//!
//! Sums a delimited string of integers.
//!
//! ## Rules
//!
//! - Comma and newline separate numbers by default
//! - A `//<delimiter>\n` header adds one more delimiter; every character of it splits
//! - The two-character sequence `\n` counts as a newline, surrounding quotes are dropped
//! - Tokens without a numeric prefix are ignored; `12abc` counts as `12`
//! - Values above 1000 are ignored
//! - Any negative value rejects the whole input, listing every negative in order
//!
//! ## Architecture
//!
//! ```text
//! Raw input
//!     │
//!     ├──> Normalize (unescape `\n`, strip quotes, trim)
//!     │
//!     ├──> Delimiter resolution
//!     │    ├─> Defaults from config
//!     │    └─> Optional custom header
//!     │
//!     ├──> Tokenize (character-class split, trim, drop empties)
//!     │
//!     └──> Evaluate
//!          ├─> Classify each token (counted, out of range, negative, not a number)
//!          └─> Outcome: Sum(n) or Rejected(negatives)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use addend_calculator::{add, Calculator, CalculatorConfig, Outcome};
//!
//! assert_eq!(add("//;\n1;2;3").unwrap(), 6);
//! assert_eq!(add("2,1001").unwrap(), 2);
//!
//! let err = add("1,-2,3,-4").unwrap_err();
//! assert_eq!(err.to_string(), "Negative numbers not allowed: -2, -4");
//!
//! let calculator = Calculator::new(CalculatorConfig::default()).unwrap();
//! assert_eq!(calculator.outcome("1,abc,2"), Outcome::Sum(3));
//! ```

mod calculator;
mod config;
mod delimiter;
mod error;
mod number;
mod types;

pub use calculator::{add, Calculator};
pub use config::CalculatorConfig;
pub use delimiter::DelimiterSet;
pub use error::{CalculatorError, Result};
pub use number::parse_leading_int;
pub use types::{Evaluation, Outcome, Token, TokenKind};
