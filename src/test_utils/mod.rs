//! Shared fixtures for labeller and matcher tests.
//!
//! The three wall graphs below come from hand-worked two-species switching
//! networks (`X : X(~Z)`, `Z : X` and close variants) whose wall graphs,
//! label tables and pattern matches are fully known. Threshold coordinates
//! are half-integers; integer coordinates are interior representative points.

use crate::label::Label;
use crate::pattern::Pattern;
use crate::wall_graph::WallGraph;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Parse a `u/d/m/M` word; test input is always well-formed.
pub fn word(text: &str) -> Label {
    text.parse().unwrap()
}

/// Parse a list of words into a label list.
pub fn labels(texts: &[&str]) -> Vec<Label> {
    texts.iter().map(|t| word(t)).collect()
}

/// Parse a list of words into a pattern.
pub fn pattern(texts: &[&str]) -> Pattern {
    Pattern::new(labels(texts))
}

/// Seven-wall graph of an oscillating two-species network with no steady
/// state. Its only cycles realize the clockwise oscillation
/// `X min, Z min, X max, Z max`.
pub fn oscillating_wall_graph() -> WallGraph {
    let positions = vec![
        vec![0.5, 1.0],
        vec![1.0, 0.5],
        vec![1.0, 1.5],
        vec![1.5, 1.0],
        vec![2.0, 0.5],
        vec![2.0, 1.5],
        vec![2.5, 1.0],
    ];
    let out_edges = vec![
        vec![1],
        vec![4],
        vec![0],
        vec![4],
        vec![6],
        vec![2, 3],
        vec![5],
    ];
    let affected = vec![Some(0), Some(0), Some(0), Some(0), Some(1), Some(1), Some(0)];
    WallGraph::new(out_edges, positions, affected).unwrap()
}

/// Four-wall graph of the same network at a parameter with a steady state
/// and a white wall; only the outer oscillation cycle remains.
pub fn steady_state_wall_graph() -> WallGraph {
    let positions = vec![
        vec![1.5, 1.0],
        vec![2.0, 0.5],
        vec![2.0, 1.5],
        vec![2.5, 1.0],
    ];
    let out_edges = vec![vec![1], vec![3], vec![0], vec![2]];
    let affected = vec![Some(0), Some(1), Some(1), Some(0)];
    WallGraph::new(out_edges, positions, affected).unwrap()
}

/// Seven-wall graph with a branch: wall 1 can continue into either of two
/// cycles, one short and one long, both realizing the same oscillation.
pub fn branching_wall_graph() -> WallGraph {
    let positions = vec![
        vec![0.5, 1.0],
        vec![1.0, 0.5],
        vec![1.0, 1.5],
        vec![1.5, 1.0],
        vec![2.0, 0.5],
        vec![2.0, 1.5],
        vec![2.5, 1.0],
    ];
    let out_edges = vec![
        vec![1],
        vec![4, 3],
        vec![0],
        vec![2],
        vec![6],
        vec![2],
        vec![5],
    ];
    let affected = vec![Some(0), Some(1), Some(1), Some(0), Some(0), Some(0), Some(0)];
    WallGraph::new(out_edges, positions, affected).unwrap()
}
