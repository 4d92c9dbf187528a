use crate::config::CalculatorConfig;
use crate::delimiter::{split_header, DelimiterSet};
use crate::error::Result;
use crate::number::parse_leading_int;
use crate::types::{Evaluation, Outcome, Token, TokenKind};

/// Main calculator interface
#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    base: DelimiterSet,
}

impl Calculator {
    /// Create a new calculator with configuration
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        let base = DelimiterSet::new(config.default_delimiters.clone());
        Ok(Self { config, base })
    }

    /// Configuration this calculator was built with
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Sum the numbers in `input`, failing if any are negative
    pub fn add(&self, input: &str) -> Result<u64> {
        self.outcome(input).into_result()
    }

    /// Sum the numbers in `input` as an explicit outcome
    #[must_use]
    pub fn outcome(&self, input: &str) -> Outcome {
        let outcome = self.evaluate(input).outcome();
        if let Outcome::Rejected(negatives) = &outcome {
            log::debug!("Rejected input with {} negative value(s)", negatives.len());
        }
        outcome
    }

    /// Classify every token in `input`
    #[must_use]
    pub fn evaluate(&self, input: &str) -> Evaluation {
        let text = self.normalize(input);
        if text.is_empty() {
            return Evaluation {
                delimiters: self.base.delimiters().to_vec(),
                tokens: Vec::new(),
            };
        }

        let (delimiters, data) = match split_header(&text, &self.config.header_marker) {
            Some((custom, data)) => {
                log::debug!("Custom delimiter header: {custom:?}");
                (self.base.with_custom(custom), data)
            }
            None => (self.base.clone(), text.as_str()),
        };
        log::debug!("Active delimiters: {:?}", delimiters.delimiters());

        let tokens = delimiters
            .tokenize(data)
            .into_iter()
            .map(|token| self.classify(token))
            .collect();

        Evaluation {
            delimiters: delimiters.delimiters().to_vec(),
            tokens,
        }
    }

    /// Unescape newlines, strip surrounding quotes, trim
    fn normalize(&self, input: &str) -> String {
        let unescaped = if self.config.unescape_newlines {
            input.replace("\\n", "\n")
        } else {
            input.to_string()
        };

        let mut text = unescaped.as_str();
        if self.config.strip_quotes {
            text = text.strip_prefix('"').unwrap_or(text);
            text = text.strip_suffix('"').unwrap_or(text);
        }
        text.trim().to_string()
    }

    fn classify(&self, text: &str) -> Token {
        let kind = match parse_leading_int(text) {
            None => TokenKind::NotANumber,
            Some(value) if value < 0 => TokenKind::Negative(value),
            Some(value) if value > self.config.max_value => TokenKind::OutOfRange(value),
            Some(value) => TokenKind::Counted(value),
        };
        log::trace!("Token {text:?} -> {kind:?}");
        Token::new(text, kind)
    }
}

/// Sum `input` with the default configuration
pub fn add(input: &str) -> Result<u64> {
    Calculator::new(CalculatorConfig::default())?.add(input)
}
