//! Target patterns: ordered sequences of words describing a desired cyclic or
//! acyclic qualitative trajectory, and the translation from the external
//! "variable max/min" event format into those words.
//!
//! The external format lists extremum events in order, e.g.
//! `X min, Z max, X max, Z min`, one pattern per line. Each event commits one
//! variable to a local extremum; the translation in [`translate_events`]
//! reconstructs what every *other* variable must be doing at that moment and
//! produces the word sequence consumed by [`crate::matcher`].

mod translate;


pub use translate::translate_events;

use crate::label::Label;
use thiserror::Error;

/// A local extremum requested by a pattern event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extremum {
    Min,
    Max,
}

/// One parsed pattern event: `variable` reaches `extremum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtremumEvent {
    pub variable: usize,
    pub extremum: Extremum,
}

/// An ordered sequence of words to match against the labelled wall graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    words: Vec<Label>,
}

impl Pattern {
    pub fn new(words: Vec<Label>) -> Pattern {
        Pattern { words }
    }

    pub fn words(&self) -> &[Label] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Errors in pattern parsing and translation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern has no extremum events")]
    Empty,
    #[error("malformed pattern token `{0}`; expected `<variable> <max|min>`")]
    MalformedToken(String),
    #[error("unknown variable name `{0}`")]
    UnknownVariable(String),
    #[error(
        "variable {variable} repeats the same extremum twice in a row; \
         every variable must alternate maxima and minima"
    )]
    NonAlternating { variable: usize },
}

/// Parse one comma-separated event line, e.g. `X min, Z max, X max, Z min`,
/// against the ordered variable names of the network.
pub fn parse_events(line: &str, variables: &[&str]) -> Result<Vec<ExtremumEvent>, PatternError> {
    let mut events = Vec::new();
    for token in line.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let mut parts = token.split_whitespace();
        let (Some(name), Some(kind), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PatternError::MalformedToken(token.to_string()));
        };
        let extremum = match kind {
            "max" => Extremum::Max,
            "min" => Extremum::Min,
            _ => return Err(PatternError::MalformedToken(token.to_string())),
        };
        let variable = variables
            .iter()
            .position(|v| *v == name)
            .ok_or_else(|| PatternError::UnknownVariable(name.to_string()))?;
        events.push(ExtremumEvent { variable, extremum });
    }
    if events.is_empty() {
        return Err(PatternError::Empty);
    }
    Ok(events)
}

/// Parse a multi-line pattern file: one alternative pattern per non-empty
/// line.
pub fn parse_event_lines(
    text: &str,
    variables: &[&str],
) -> Result<Vec<Vec<ExtremumEvent>>, PatternError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_events(line, variables))
        .collect()
}
