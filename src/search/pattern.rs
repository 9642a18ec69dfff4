//! One matching abstraction shared by counting and rewriting.
//!
//! A [`Pattern`] is compiled once per operation and then used both to count
//! occurrences and to replace them, so a preview never promises something
//! the rewrite would not do.

use crate::error::{EditError, Result};
use regex::{NoExpand, Regex};
use std::ops::Range;

/// How a pattern's source text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Every exact substring occurrence.
    Literal,
    /// Full regular expression; `$1`-style references expand in replacements.
    Regex,
    /// Exact substring that does not touch another identifier character.
    #[default]
    IdentifierBoundary,
}

/// Compiled search pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    mode: MatchMode,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str, mode: MatchMode) -> Result<Self> {
        if source.is_empty() {
            return Err(EditError::InvalidInput(
                source.to_string(),
                "search pattern cannot be empty".to_string(),
            ));
        }

        let regex = match mode {
            MatchMode::Regex => Regex::new(source)?,
            MatchMode::Literal | MatchMode::IdentifierBoundary => {
                Regex::new(&regex::escape(source))?
            }
        };

        Ok(Self {
            source: source.to_string(),
            mode,
            regex,
        })
    }

    pub fn literal(source: &str) -> Result<Self> {
        Self::new(source, MatchMode::Literal)
    }

    pub fn regex(source: &str) -> Result<Self> {
        Self::new(source, MatchMode::Regex)
    }

    pub fn identifier(source: &str) -> Result<Self> {
        Self::new(source, MatchMode::IdentifierBoundary)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Byte ranges of all non-overlapping matches, left to right.
    pub fn find_ranges(&self, text: &str) -> Vec<Range<usize>> {
        match self.mode {
            MatchMode::Literal | MatchMode::Regex => {
                self.regex.find_iter(text).map(|m| m.range()).collect()
            }
            MatchMode::IdentifierBoundary => self.bounded_ranges(text),
        }
    }

    pub fn count(&self, text: &str) -> usize {
        match self.mode {
            MatchMode::Literal | MatchMode::Regex => self.regex.find_iter(text).count(),
            MatchMode::IdentifierBoundary => self.bounded_ranges(text).len(),
        }
    }

    /// Replaces every match and returns the new text with the match count.
    pub fn replace_all(&self, text: &str, replacement: &str) -> (String, usize) {
        match self.mode {
            MatchMode::Regex => {
                let count = self.regex.find_iter(text).count();
                let replaced = self.regex.replace_all(text, replacement).into_owned();
                (replaced, count)
            }
            MatchMode::Literal => {
                let count = self.regex.find_iter(text).count();
                let replaced = self
                    .regex
                    .replace_all(text, NoExpand(replacement))
                    .into_owned();
                (replaced, count)
            }
            MatchMode::IdentifierBoundary => {
                let ranges = self.bounded_ranges(text);
                (splice(text, &ranges, replacement), ranges.len())
            }
        }
    }

    /// Scans forward, keeping matches whose identifier-like edges are not
    /// glued to further identifier characters.
    ///
    /// A rejected candidate only advances the scan by one character, so an
    /// overlapping later candidate still gets considered.
    fn bounded_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;

        while start <= text.len() {
            let Some(m) = self.regex.find_at(text, start) else {
                break;
            };

            if is_bounded(text, m.start(), m.end()) {
                ranges.push(m.range());
                start = m.end().max(m.start() + 1);
            } else {
                start = m.start()
                    + text[m.start()..]
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1);
            }
        }

        ranges
    }
}

/// Identifier characters: alphanumerics and `_`.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];

    let left_ok = match (matched.chars().next(), text[..start].chars().next_back()) {
        (Some(first), Some(prev)) if is_identifier_char(first) => !is_identifier_char(prev),
        _ => true,
    };
    let right_ok = match (matched.chars().next_back(), text[end..].chars().next()) {
        (Some(last), Some(next)) if is_identifier_char(last) => !is_identifier_char(next),
        _ => true,
    };

    left_ok && right_ok
}

fn splice(text: &str, ranges: &[Range<usize>], replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for range in ranges {
        out.push_str(&text[last..range.start]);
        out.push_str(replacement);
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}
