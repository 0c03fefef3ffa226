// Chunk: docs/chunks/candidate_set - Immutable candidate list
//!
//! The candidate list the menu filters over.
//!
//! Candidates are loaded once at startup and never mutated or reordered
//! afterwards. Each candidate keeps its full input line (the *raw* text,
//! emitted on confirmation) and a byte offset where the *display* text starts.
//! Without a separator the two are the same string; with a separator the
//! display text is everything after its first occurrence.

use std::io::{self, Read};

/// One selectable line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    raw: String,
    display_start: usize,
}

impl Candidate {
    /// Creates a candidate whose display text equals its raw text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            display_start: 0,
        }
    }

    /// Creates a candidate, splitting off a label with `separator`.
    ///
    /// The display text is the suffix after the first occurrence of
    /// `separator`; lines without it display in full.
    pub fn with_separator(raw: impl Into<String>, separator: &str) -> Self {
        let raw = raw.into();
        let display_start = if separator.is_empty() {
            0
        } else {
            raw.find(separator)
                .map(|at| at + separator.len())
                .unwrap_or(0)
        };
        Self { raw, display_start }
    }

    /// The text matched against and rendered.
    pub fn display(&self) -> &str {
        &self.raw[self.display_start..]
    }

    /// The full input line, emitted on confirmation.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// The ordered, read-only list of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    items: Vec<Candidate>,
}

impl CandidateSet {
    /// Builds a set from lines, skipping empty ones.
    pub fn from_lines<I, S>(lines: I, separator: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = lines
            .into_iter()
            .map(Into::into)
            .filter(|line| !line.is_empty())
            .map(|line| match separator {
                Some(sep) => Candidate::with_separator(line, sep),
                None => Candidate::new(line),
            })
            .collect();
        Self { items }
    }

    /// Reads newline-separated candidates until end of input.
    ///
    /// Runs of consecutive newlines never produce a candidate. Invalid UTF-8
    /// is replaced with U+FFFD.
    pub fn read_from<R: Read>(mut reader: R, separator: Option<&str>) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("candidate input is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        let set = Self::from_lines(text.split('\n'), separator);
        tracing::debug!(count = set.len(), separator = ?separator, "loaded candidates");
        Ok(set)
    }

    /// Returns the candidate at `index`.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.items.get(index)
    }

    /// Returns the number of candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates candidates in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.items.iter()
    }
}

impl std::ops::Index<usize> for CandidateSet {
    type Output = Candidate;

    fn index(&self, index: usize) -> &Candidate {
        &self.items[index]
    }
}
