//! The wall labeller: computes, for every admissible wall triple
//! (previous, current, next), the set of symbolic labels consistent with the
//! monotonicity and extremum constraints of every state variable.
//!
//! The resulting [`WallInfoTable`] maps each traversed edge
//! `(previous, current)` to the list of possible continuations
//! `(next, labels)`. It is built once per (network, parameter region) and
//! then queried read-only by [`crate::matcher`], typically for many patterns.

mod edge_signs;
mod letter_choice;


use crate::label::{Label, Letter};
use crate::wall_graph::WallGraph;
use edge_signs::EdgeSigns;
use letter_choice::LetterChoice;
use log::{debug, info};
use std::collections::HashMap;
use thiserror::Error;

/// A structural labelling failure. All variants are fatal for the whole wall
/// graph: the caller must treat the parameter region as unsupported for
/// pattern matching rather than skip the offending triple.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("wall {wall} has a self-loop; steady-state walls cannot be labelled")]
    SelfLoop { wall: usize },
    #[error(
        "variable {variable} changes direction across walls ({previous}, {current}, {next}) \
         but is not at its threshold"
    )]
    DirectionConflict {
        previous: usize,
        current: usize,
        next: usize,
        variable: usize,
    },
    #[error("flow out of wall {wall} spreads in both directions of variable {variable}")]
    SpreadingFlow { wall: usize, variable: usize },
}

/// The labelled wall graph: for every edge `(previous, current)` the ordered
/// continuations `(next, labels)`, where `labels` lists every full label
/// consistent with the triple `(previous, current, next)`.
///
/// Label lists are sorted and deduplicated, so equal tables compare equal
/// regardless of the order ambiguities were expanded in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallInfoTable {
    entries: HashMap<(usize, usize), Vec<(usize, Vec<Label>)>>,
    num_variables: usize,
}

impl WallInfoTable {
    /// The continuations recorded for the edge `(previous, current)`, or an
    /// empty slice if the edge does not occur in the graph.
    pub fn successors(&self, previous: usize, current: usize) -> &[(usize, Vec<Label>)] {
        self.entries
            .get(&(previous, current))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over all `(previous, current)` edges with recorded labels.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.keys().copied()
    }

    /// Flattened label vocabulary of the whole table.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.entries
            .values()
            .flatten()
            .flat_map(|(_, labels)| labels.iter())
    }

    /// True if `label` occurs anywhere in the table. Pattern words that fail
    /// this test cannot possibly match.
    pub fn contains_label(&self, label: &Label) -> bool {
        self.labels().any(|l| l == label)
    }

    /// Number of `(previous, current)` edges in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    #[cfg(test)]
    pub(crate) fn from_entries(
        entries: HashMap<(usize, usize), Vec<(usize, Vec<Label>)>>,
        num_variables: usize,
    ) -> WallInfoTable {
        WallInfoTable { entries, num_variables }
    }
}

/// Label every admissible wall triple of `graph`.
///
/// For each wall `current` and each pair of a predecessor and a successor,
/// the per-variable letters are decided by [`letter_choice`], ambiguities are
/// expanded into full labels, and the result is stored under the key
/// `(previous, current)`.
pub fn label_walls(graph: &WallGraph) -> Result<WallInfoTable, LabelError> {
    info!(
        "Labelling wall graph: {} walls, {} variables.",
        graph.num_walls(),
        graph.num_variables()
    );
    let in_edges = graph.in_edges();
    let out_signs = EdgeSigns::outgoing(graph)?;
    let in_signs = EdgeSigns::incoming(graph, &in_edges)?;

    let mut entries: HashMap<(usize, usize), Vec<(usize, Vec<Label>)>> = HashMap::new();
    for current in 0..graph.num_walls() {
        for &previous in &in_edges[current] {
            for &next in graph.out_edges(current) {
                let labels =
                    label_triple(graph, &out_signs, &in_signs, previous, current, next)?;
                entries
                    .entry((previous, current))
                    .or_default()
                    .push((next, labels));
            }
        }
    }
    debug!("Wall-info table has {} labelled edges.", entries.len());
    Ok(WallInfoTable {
        entries,
        num_variables: graph.num_variables(),
    })
}

/// Compute all labels consistent with the triple `(previous, current, next)`.
fn label_triple(
    graph: &WallGraph,
    out_signs: &EdgeSigns,
    in_signs: &EdgeSigns,
    previous: usize,
    current: usize,
    next: usize,
) -> Result<Vec<Label>, LabelError> {
    if current == next {
        return Err(LabelError::SelfLoop { wall: current });
    }
    let affected = graph.affected_variable(current);

    let mut choices = Vec::with_capacity(graph.num_variables());
    for variable in 0..graph.num_variables() {
        let at_threshold = affected == Some(variable);
        let conflict = |_| LabelError::DirectionConflict {
            previous,
            current,
            next,
            variable,
        };

        let direct = letter_choice::by_position(
            at_threshold,
            graph.position(previous, variable),
            graph.position(current, variable),
            graph.position(next, variable),
        )
        .map_err(conflict)?;

        let choice = match direct {
            Some(choice) => choice,
            None if at_threshold => letter_choice::from_signs_with_extrema(
                out_signs.get(previous, variable),
                in_signs.get(current, variable),
                out_signs.get(current, variable),
                in_signs.get(next, variable),
            ),
            None => letter_choice::from_signs_monotone(
                out_signs.get(previous, variable),
                in_signs.get(current, variable),
                out_signs.get(current, variable),
                in_signs.get(next, variable),
            )
            .map_err(conflict)?,
        };
        choices.push(choice);
    }

    Ok(expand_choices(&choices))
}

/// Cartesian expansion of per-variable letter choices into full labels.
///
/// A variable at its threshold may contribute extremum letters, so expansion
/// can produce letter sequences with more than one extremum only if several
/// variables were ambiguous towards extrema at once; those cannot arise
/// because extrema are only offered for the single affected variable.
fn expand_choices(choices: &[LetterChoice]) -> Vec<Label> {
    let mut prefixes: Vec<Vec<Letter>> = vec![Vec::with_capacity(choices.len())];
    for choice in choices {
        let mut expanded = Vec::with_capacity(prefixes.len() * choice.letters().len());
        for prefix in &prefixes {
            for &letter in choice.letters() {
                let mut candidate = prefix.clone();
                candidate.push(letter);
                expanded.push(candidate);
            }
        }
        prefixes = expanded;
    }
    let mut labels: Vec<Label> = prefixes.into_iter().map(Label::from_letters).collect();
    labels.sort();
    labels.dedup();
    labels
}
