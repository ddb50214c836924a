//! Pattern matching over wall graphs of switching networks.
//!
//! A wall graph describes the possible coarse trajectories of a regulatory
//! network: its nodes are *walls* (threshold crossings between neighbouring
//! state-space domains) and its edges the admissible transitions between
//! them. This crate answers whether a qualitative behaviour, given as an
//! ordered sequence of variable extrema such as `X max, Z max, X min, Z min`,
//! can be realized by a walk through that graph.
//!
//! The pipeline has three stages:
//! * [`labelling`] assigns to every wall triple the words describing what
//!   each variable does while passing through it,
//! * [`pattern`] translates extremum event sequences into word patterns,
//! * [`matcher`] searches the labelled graph for walks realizing a pattern.

#[cfg(test)]
mod test_utils;

pub mod label;
pub mod labelling;
pub mod matcher;
pub mod pattern;
pub mod wall_graph;
