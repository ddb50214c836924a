//! Symbolic labels describing the qualitative behaviour of every state
//! variable across a wall transition.
//!
//! A [`Label`] holds one [`Letter`] per state variable: `u` (increasing),
//! `d` (decreasing), `m` (local minimum) or `M` (local maximum). Because a
//! wall sits on at most one threshold, a valid label carries at most one
//! extremum letter, and only at the position of the affected variable.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The qualitative behaviour of a single state variable at a wall transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Letter {
    /// Increasing (`u`).
    Up,
    /// Decreasing (`d`).
    Down,
    /// Local minimum (`m`).
    Min,
    /// Local maximum (`M`).
    Max,
}

impl Letter {
    /// True for `m` and `M`.
    pub fn is_extremum(self) -> bool {
        matches!(self, Letter::Min | Letter::Max)
    }

    /// The monotone continuation of this letter: the direction a trajectory
    /// moves in just before reaching the extremum (`m -> d`, `M -> u`).
    /// Monotone letters continue unchanged.
    pub fn monotone(self) -> Letter {
        match self {
            Letter::Min => Letter::Down,
            Letter::Max => Letter::Up,
            other => other,
        }
    }

    /// The single-character text form (`u`, `d`, `m`, `M`).
    pub fn as_char(self) -> char {
        match self {
            Letter::Up => 'u',
            Letter::Down => 'd',
            Letter::Min => 'm',
            Letter::Max => 'M',
        }
    }

    /// Inverse of [`Letter::as_char`].
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'u' => Some(Letter::Up),
            'd' => Some(Letter::Down),
            'm' => Some(Letter::Min),
            'M' => Some(Letter::Max),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A wall label or pattern word: one [`Letter`] per state variable.
///
/// Invariant: at most one letter is an extremum. This is checked by
/// [`Label::new`] and by the `FromStr` parser; labels produced by the wall
/// labeller satisfy it structurally (only the affected variable of a wall
/// can turn around there).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    letters: Vec<Letter>,
}

/// Error raised when constructing or parsing a [`Label`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidLabel {
    #[error("label `{0}` contains more than one extremum letter")]
    MultipleExtrema(String),
    #[error("label contains unknown character `{0}`; expected one of u, d, m, M")]
    UnknownCharacter(char),
}

impl Label {
    /// Create a label, rejecting letter sequences with more than one extremum.
    pub fn new(letters: Vec<Letter>) -> Result<Label, InvalidLabel> {
        if letters.iter().filter(|l| l.is_extremum()).count() > 1 {
            let text: String = letters.iter().map(|l| l.as_char()).collect();
            return Err(InvalidLabel::MultipleExtrema(text));
        }
        Ok(Label { letters })
    }

    /// Crate-internal constructor for letter sequences that satisfy the
    /// at-most-one-extremum invariant by construction.
    pub(crate) fn from_letters(letters: Vec<Letter>) -> Label {
        debug_assert!(letters.iter().filter(|l| l.is_extremum()).count() <= 1);
        Label { letters }
    }

    /// Number of state variables this label describes.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The extremum letter and its variable index, if the label has one.
    pub fn extremum(&self) -> Option<(usize, Letter)> {
        self.letters
            .iter()
            .enumerate()
            .find(|(_, l)| l.is_extremum())
            .map(|(i, l)| (i, *l))
    }

    /// The non-extremal continuation of this word: the extremum letter is
    /// replaced by the monotone direction that precedes it (`m -> d`,
    /// `M -> u`), all other letters are unchanged. A walk may repeat this
    /// word on intermediate walls without advancing the pattern.
    pub fn stutter(&self) -> Label {
        Label {
            letters: self.letters.iter().map(|l| l.monotone()).collect(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for Label {
    type Err = InvalidLabel;

    fn from_str(s: &str) -> Result<Label, InvalidLabel> {
        let letters = s
            .chars()
            .map(|c| Letter::from_char(c).ok_or(InvalidLabel::UnknownCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Label::new(letters)
    }
}
