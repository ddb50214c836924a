//! Per-variable letter selection for a wall triple.
//!
//! For a triple (previous, current, next) and one state variable, the letter
//! is decided by direct comparison of the three position values whenever they
//! are strictly ordered. When values coincide (walls sharing a threshold
//! coordinate), the decision falls back to the directional sign evidence of
//! [`super::edge_signs::EdgeSigns`], which may leave a genuine ambiguity: in
//! that case the *set* of consistent letters is kept and later expanded into
//! one label per combination.

use crate::label::Letter;
use crate::labelling::edge_signs::Sign;

/// The outcome of the per-variable decision: either a single forced letter or
/// one of a closed family of ambiguous letter sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LetterChoice {
    Certain(Letter),
    Ambiguous(&'static [Letter]),
}

/// Marker for an impossible direction reversal at a variable that is not at
/// its threshold. The caller attaches the offending triple.
#[derive(Debug)]
pub(crate) struct DirectionConflict;

const UP_OR_MAX: &[Letter] = &[Letter::Up, Letter::Max];
const DOWN_OR_MIN: &[Letter] = &[Letter::Down, Letter::Min];
const DOWN_OR_MAX: &[Letter] = &[Letter::Down, Letter::Max];
const UP_OR_MIN: &[Letter] = &[Letter::Up, Letter::Min];
const DOWN_OR_UP: &[Letter] = &[Letter::Down, Letter::Up];
const ANY: &[Letter] = &[Letter::Up, Letter::Down, Letter::Min, Letter::Max];

impl LetterChoice {
    pub fn letters(&self) -> &[Letter] {
        match self {
            LetterChoice::Certain(letter) => std::slice::from_ref(letter),
            LetterChoice::Ambiguous(letters) => letters,
        }
    }
}

/// Decide by direct comparison of the three position values. Returns `None`
/// when some values coincide and sign evidence is needed. A strict extremum
/// shape at a variable that is not at its threshold is a structural error.
pub(crate) fn by_position(
    at_threshold: bool,
    previous: f64,
    current: f64,
    next: f64,
) -> Result<Option<LetterChoice>, DirectionConflict> {
    let choice = if previous < current && current < next {
        Some(LetterChoice::Certain(Letter::Up))
    } else if previous > current && current > next {
        Some(LetterChoice::Certain(Letter::Down))
    } else if at_threshold {
        if previous < current && current > next {
            Some(LetterChoice::Certain(Letter::Max))
        } else if previous > current && current < next {
            Some(LetterChoice::Certain(Letter::Min))
        } else {
            None
        }
    } else if (previous < current && current > next) || (previous > current && current < next) {
        return Err(DirectionConflict);
    } else if (previous < current && current == next) || (previous == current && current < next) {
        Some(LetterChoice::Certain(Letter::Up))
    } else if (previous > current && current == next) || (previous == current && current > next) {
        Some(LetterChoice::Certain(Letter::Down))
    } else {
        None
    };
    Ok(choice)
}

/// Sign evidence combined for a variable that *is* at its threshold at the
/// current wall, so extrema are allowed.
///
/// The four predicates say whether the variable provably rises (or falls)
/// while entering the current wall and while leaving it; each certain letter
/// needs both sides, and one-sided evidence narrows the answer to a pair.
pub(crate) fn from_signs_with_extrema(
    out_previous: Sign,
    in_current: Sign,
    out_current: Sign,
    in_next: Sign,
) -> LetterChoice {
    let rising_in = out_previous == Sign::Negative || in_current == Sign::Positive;
    let falling_in = out_previous == Sign::Positive || in_current == Sign::Negative;
    let rising_out = out_current == Sign::Negative || in_next == Sign::Positive;
    let falling_out = out_current == Sign::Positive || in_next == Sign::Negative;

    if rising_in && falling_out {
        LetterChoice::Certain(Letter::Max)
    } else if falling_in && rising_out {
        LetterChoice::Certain(Letter::Min)
    } else if rising_in && rising_out {
        LetterChoice::Certain(Letter::Up)
    } else if falling_in && falling_out {
        LetterChoice::Certain(Letter::Down)
    } else if rising_in {
        LetterChoice::Ambiguous(UP_OR_MAX)
    } else if falling_in {
        LetterChoice::Ambiguous(DOWN_OR_MIN)
    } else if falling_out {
        LetterChoice::Ambiguous(DOWN_OR_MAX)
    } else if rising_out {
        LetterChoice::Ambiguous(UP_OR_MIN)
    } else {
        LetterChoice::Ambiguous(ANY)
    }
}

/// Sign evidence combined for a variable that is *not* at its threshold, so
/// only monotone letters are legal. Simultaneous rise and fall evidence is
/// the same structural error as an extremum shape in direct comparison.
pub(crate) fn from_signs_monotone(
    out_previous: Sign,
    in_current: Sign,
    out_current: Sign,
    in_next: Sign,
) -> Result<LetterChoice, DirectionConflict> {
    let rising_in = out_previous == Sign::Negative || in_current == Sign::Positive;
    let falling_in = out_previous == Sign::Positive || in_current == Sign::Negative;
    let rising_out = out_current == Sign::Negative || in_next == Sign::Positive;
    let falling_out = out_current == Sign::Positive || in_next == Sign::Negative;

    if (rising_in && falling_out) || (falling_in && rising_out) {
        Err(DirectionConflict)
    } else if rising_in || rising_out {
        Ok(LetterChoice::Certain(Letter::Up))
    } else if falling_in || falling_out {
        Ok(LetterChoice::Certain(Letter::Down))
    } else {
        Ok(LetterChoice::Ambiguous(DOWN_OR_UP))
    }
}
