//! Translation of extremum event sequences into word patterns.
//!
//! Each event pins one variable to `m` or `M` at one step of the pattern;
//! every other letter of the word grid is reconstructed from the surrounding
//! extrema. A variable that never appears in the events is unconstrained and
//! is expanded into one template per monotone direction, so a single event
//! line can translate into several alternative patterns.

use crate::label::{Label, Letter};
use crate::pattern::{Extremum, ExtremumEvent, Pattern, PatternError};
use std::collections::HashMap;

/// Translate one event sequence into its alternative word patterns.
///
/// Returns `2^k` patterns, where `k` is the number of variables of the
/// network that never occur in `events`: each such variable is assumed to
/// stay monotone through the whole pattern, in either direction. With
/// `cyclic` set, every pattern is closed by repeating its first word.
pub fn translate_events(
    num_variables: usize,
    events: &[ExtremumEvent],
    cyclic: bool,
) -> Result<Vec<Pattern>, PatternError> {
    if events.is_empty() {
        return Err(PatternError::Empty);
    }
    check_alternation(events)?;

    let length = events.len();
    // One letter sequence per variable, committed only where an event pins it.
    let mut committed: Vec<Vec<Option<Letter>>> = vec![vec![None; length]; num_variables];
    for (step, event) in events.iter().enumerate() {
        if event.variable >= num_variables {
            return Err(PatternError::UnknownVariable(event.variable.to_string()));
        }
        committed[event.variable][step] = Some(match event.extremum {
            Extremum::Max => Letter::Max,
            Extremum::Min => Letter::Min,
        });
    }
    let missing: Vec<usize> = (0..num_variables)
        .filter(|v| events.iter().all(|e| e.variable != *v))
        .collect();

    let mut patterns = Vec::with_capacity(1 << missing.len());
    for assignment in 0..(1_usize << missing.len()) {
        let mut template = committed.clone();
        for (bit, &variable) in missing.iter().enumerate() {
            let letter = if assignment & (1 << bit) == 0 {
                Letter::Up
            } else {
                Letter::Down
            };
            template[variable] = vec![Some(letter); length];
        }
        patterns.push(knit(template, length, cyclic));
    }
    Ok(patterns)
}

/// Reject a variable that repeats the same extremum without the other one in
/// between; such a pattern has no continuous realization.
fn check_alternation(events: &[ExtremumEvent]) -> Result<(), PatternError> {
    let mut last: HashMap<usize, Extremum> = HashMap::new();
    for event in events {
        if last.insert(event.variable, event.extremum) == Some(event.extremum) {
            return Err(PatternError::NonAlternating {
                variable: event.variable,
            });
        }
    }
    Ok(())
}

/// Fill the free letters of one variable's sequence from its pinned extrema,
/// in ascending order: a step descends when the nearest committed letter
/// behind it is `M` or `d`, or the nearest one ahead is `m` or `d`; otherwise
/// it ascends. Earlier filled letters count as committed for later steps.
fn fill(sequence: &mut [Option<Letter>]) {
    for step in 0..sequence.len() {
        if sequence[step].is_some() {
            continue;
        }
        let behind = sequence[..step].iter().rev().find_map(|l| *l);
        let ahead = sequence[step + 1..].iter().find_map(|l| *l);
        let descending = matches!(behind, Some(Letter::Max | Letter::Down))
            || matches!(ahead, Some(Letter::Min | Letter::Down));
        sequence[step] = Some(if descending { Letter::Down } else { Letter::Up });
    }
}

/// Fill every variable sequence of the template and knit the sequences into
/// words, one word per pattern step.
fn knit(mut template: Vec<Vec<Option<Letter>>>, length: usize, cyclic: bool) -> Pattern {
    for sequence in &mut template {
        fill(sequence);
    }
    let mut words: Vec<Label> = (0..length)
        .map(|step| {
            Label::from_letters(
                template
                    .iter()
                    .filter_map(|sequence| sequence[step])
                    .collect(),
            )
        })
        .collect();
    if cyclic && words.first() != words.last() {
        if let Some(first) = words.first().cloned() {
            words.push(first);
        }
    }
    Pattern::new(words)
}
