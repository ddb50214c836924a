/// Options of one pattern search over a labelled wall graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Accept only closed walks, i.e. walks that end at their starting wall.
    pub cyclic: bool,
    /// Abandon every walk once it grows to this many walls. Unbounded by
    /// default; a bound is useful on graphs with long corridors of repeated
    /// labels where walks can stutter far beyond any interesting match.
    pub max_walk_length: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            cyclic: true,
            max_walk_length: None,
        }
    }
}

impl MatchConfig {
    /// A search for open walks: the pattern may start and end anywhere.
    pub fn acyclic() -> MatchConfig {
        MatchConfig {
            cyclic: false,
            ..MatchConfig::default()
        }
    }
}
