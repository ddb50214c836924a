//! Directional sign evidence across wall edges.
//!
//! When the three position values of a triple do not compare strictly (two
//! walls share a coordinate, typically because both sit on the same
//! threshold), the labeller falls back to the *sign* of the position
//! difference across every out-edge and in-edge of the walls involved. This
//! module precomputes those signs once per wall and variable.

use crate::labelling::LabelError;
use crate::wall_graph::WallGraph;

/// Sign of a position difference `pos(wall) - pos(neighbour)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    fn of(difference: f64) -> Sign {
        if difference > 0.0 {
            Sign::Positive
        } else if difference < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

/// Combined per-(wall, variable) sign summary over one edge direction.
///
/// The combination rule keeps a positive sign if any edge shows one, then a
/// negative sign, then zero. A wall whose *out*-edges show both signs in the
/// same variable has flow spreading away from it in both directions, which
/// the labelling scheme cannot represent; for *in*-edges the same conflict
/// merely cancels to "no evidence".
pub(crate) struct EdgeSigns {
    signs: Vec<Vec<Sign>>,
}

impl EdgeSigns {
    /// Signs across out-edges. Fails on spreading flow.
    pub fn outgoing(graph: &WallGraph) -> Result<EdgeSigns, LabelError> {
        let mut signs = Vec::with_capacity(graph.num_walls());
        for wall in 0..graph.num_walls() {
            signs.push(Self::combine_wall(graph, wall, graph.out_edges(wall), true)?);
        }
        Ok(EdgeSigns { signs })
    }

    /// Signs across in-edges. Conflicts collapse to [`Sign::Zero`], so unlike
    /// [`EdgeSigns::outgoing`] this cannot fail.
    pub fn incoming(graph: &WallGraph, in_edges: &[Vec<usize>]) -> Result<EdgeSigns, LabelError> {
        let mut signs = Vec::with_capacity(graph.num_walls());
        for wall in 0..graph.num_walls() {
            signs.push(Self::combine_wall(graph, wall, &in_edges[wall], false)?);
        }
        Ok(EdgeSigns { signs })
    }

    pub fn get(&self, wall: usize, variable: usize) -> Sign {
        self.signs[wall][variable]
    }

    fn combine_wall(
        graph: &WallGraph,
        wall: usize,
        neighbours: &[usize],
        outgoing: bool,
    ) -> Result<Vec<Sign>, LabelError> {
        let mut combined = Vec::with_capacity(graph.num_variables());
        for variable in 0..graph.num_variables() {
            let mut has_positive = false;
            let mut has_negative = false;
            for &neighbour in neighbours {
                let difference = graph.position(wall, variable) - graph.position(neighbour, variable);
                match Sign::of(difference) {
                    Sign::Positive => has_positive = true,
                    Sign::Negative => has_negative = true,
                    Sign::Zero => {}
                }
            }
            let sign = if has_positive && has_negative {
                if outgoing {
                    return Err(LabelError::SpreadingFlow { wall, variable });
                }
                Sign::Zero
            } else if has_positive {
                Sign::Positive
            } else if has_negative {
                Sign::Negative
            } else {
                Sign::Zero
            };
            combined.push(sign);
        }
        Ok(combined)
    }
}
