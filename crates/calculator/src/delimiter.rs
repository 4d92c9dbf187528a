use std::collections::BTreeSet;

/// Ordered delimiters plus the set of characters that split on them.
///
/// Every character of every delimiter is a boundary on its own: `"***"` splits on `*`
/// and `"ab"` splits on either `a` or `b`. Characters are matched literally, so no
/// delimiter carries any pattern syntax.
#[derive(Debug, Clone)]
pub struct DelimiterSet {
    delimiters: Vec<String>,
    boundaries: BTreeSet<char>,
}

impl DelimiterSet {
    /// Build a set from delimiters in order
    #[must_use]
    pub fn new(delimiters: Vec<String>) -> Self {
        let boundaries = delimiters.iter().flat_map(|d| d.chars()).collect();
        Self {
            delimiters,
            boundaries,
        }
    }

    /// Copy of this set with one more delimiter appended
    #[must_use]
    pub fn with_custom(&self, delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        let mut set = self.clone();
        set.boundaries.extend(delimiter.chars());
        set.delimiters.push(delimiter);
        set
    }

    /// Delimiters in the order they were added
    #[must_use]
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Whether `ch` acts as a token boundary
    #[must_use]
    pub fn is_boundary(&self, ch: char) -> bool {
        self.boundaries.contains(&ch)
    }

    /// Split `data` into trimmed, non-empty tokens
    #[must_use]
    pub fn tokenize<'a>(&self, data: &'a str) -> Vec<&'a str> {
        data.split(|ch: char| self.is_boundary(ch))
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect()
    }
}

/// Split a custom delimiter header off the front of `text`.
///
/// Returns `(delimiter, data)` when `text` starts with `marker`. The delimiter is the
/// trimmed remainder of the first line; `data` is everything after the first newline,
/// or empty when the header has no newline.
pub(crate) fn split_header<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let rest = text.strip_prefix(marker)?;
    Some(match rest.split_once('\n') {
        Some((header, data)) => (header.trim(), data),
        None => (rest.trim(), ""),
    })
}
