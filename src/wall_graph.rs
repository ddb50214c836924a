//! The directed wall-adjacency graph and its per-wall metadata.
//!
//! A "wall" is a codimension-1 boundary cell between two adjacent domains of
//! the discretized phase space. The upstream network analysis produces, for
//! every wall, an ordered list of successor walls, a representative position
//! vector (threshold coordinates are half-integers such as `1.5`), and the
//! index of the variable whose threshold the wall lies on (if any). This
//! module only validates and stores that data; all interpretation happens in
//! [`crate::labelling`].

use thiserror::Error;

/// Frozen wall-graph input for the labeller. Constructed once by the caller
/// from upstream data and only read afterwards.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallGraph {
    out_edges: Vec<Vec<usize>>,
    positions: Vec<Vec<f64>>,
    affected_variables: Vec<Option<usize>>,
}

/// Validation errors for [`WallGraph::new`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WallGraphError {
    #[error(
        "inconsistent wall counts: {out_edges} out-edge lists, {positions} position vectors, \
         {affected} affected-variable entries"
    )]
    InconsistentWallCount {
        out_edges: usize,
        positions: usize,
        affected: usize,
    },
    #[error("wall {wall} has a position vector of length {found}, expected {expected}")]
    InconsistentDimension {
        wall: usize,
        expected: usize,
        found: usize,
    },
    #[error("wall {wall} has an out-edge to non-existent wall {successor}")]
    EdgeOutOfRange { wall: usize, successor: usize },
    #[error("wall {wall} is affected at non-existent variable {variable}")]
    VariableOutOfRange { wall: usize, variable: usize },
}

impl WallGraph {
    /// Create a wall graph, validating that all walls agree on the number of
    /// state variables and that every edge and affected-variable index is in
    /// range.
    pub fn new(
        out_edges: Vec<Vec<usize>>,
        positions: Vec<Vec<f64>>,
        affected_variables: Vec<Option<usize>>,
    ) -> Result<WallGraph, WallGraphError> {
        let walls = out_edges.len();
        if positions.len() != walls || affected_variables.len() != walls {
            return Err(WallGraphError::InconsistentWallCount {
                out_edges: walls,
                positions: positions.len(),
                affected: affected_variables.len(),
            });
        }
        let variables = positions.first().map(|p| p.len()).unwrap_or(0);
        for (wall, position) in positions.iter().enumerate() {
            if position.len() != variables {
                return Err(WallGraphError::InconsistentDimension {
                    wall,
                    expected: variables,
                    found: position.len(),
                });
            }
        }
        for (wall, successors) in out_edges.iter().enumerate() {
            for &successor in successors {
                if successor >= walls {
                    return Err(WallGraphError::EdgeOutOfRange { wall, successor });
                }
            }
        }
        for (wall, affected) in affected_variables.iter().enumerate() {
            if let Some(variable) = *affected {
                if variable >= variables {
                    return Err(WallGraphError::VariableOutOfRange { wall, variable });
                }
            }
        }
        Ok(WallGraph {
            out_edges,
            positions,
            affected_variables,
        })
    }

    pub fn num_walls(&self) -> usize {
        self.out_edges.len()
    }

    pub fn num_variables(&self) -> usize {
        self.positions.first().map(|p| p.len()).unwrap_or(0)
    }

    /// Ordered successors of `wall`.
    pub fn out_edges(&self, wall: usize) -> &[usize] {
        &self.out_edges[wall]
    }

    /// Position vector of `wall` (one coordinate per state variable).
    pub fn positions(&self, wall: usize) -> &[f64] {
        &self.positions[wall]
    }

    /// Coordinate of `wall` in state variable `variable`.
    pub fn position(&self, wall: usize, variable: usize) -> f64 {
        self.positions[wall][variable]
    }

    /// The variable whose threshold this wall lies on, or `None` for walls
    /// with no threshold crossing.
    pub fn affected_variable(&self, wall: usize) -> Option<usize> {
        self.affected_variables[wall]
    }

    /// Predecessor lists, the inverse of the out-edge relation. Predecessors
    /// appear in increasing wall order.
    pub fn in_edges(&self) -> Vec<Vec<usize>> {
        let mut in_edges = vec![Vec::new(); self.num_walls()];
        for (wall, successors) in self.out_edges.iter().enumerate() {
            for &successor in successors {
                in_edges[successor].push(wall);
            }
        }
        in_edges
    }
}
