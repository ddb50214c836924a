//! The depth-first walk search behind [`super::find_all_matches`].

use crate::label::Label;
use crate::labelling::WallInfoTable;
use crate::matcher::{MatchConfig, Walk};
use std::collections::{BTreeSet, HashSet};

/// Search state for one pattern over one label table.
///
/// `steps` pairs every pattern word after the first with its stutter word,
/// the same word with the extremum flattened into the monotone letter the
/// variable keeps on either side of it. A triple that carries only the
/// stutter word lets the walk grow by one wall without advancing the
/// pattern.
pub(super) struct PatternSearch<'a> {
    table: &'a WallInfoTable,
    steps: Vec<(Label, Label)>,
    config: MatchConfig,
    first_only: bool,
    matches: BTreeSet<Walk>,
}

impl<'a> PatternSearch<'a> {
    pub fn new(
        table: &'a WallInfoTable,
        words: &[Label],
        config: MatchConfig,
        first_only: bool,
    ) -> PatternSearch<'a> {
        let steps = words[1..]
            .iter()
            .map(|word| (word.clone(), word.stutter()))
            .collect();
        PatternSearch {
            table,
            steps,
            config,
            first_only,
            matches: BTreeSet::new(),
        }
    }

    /// Run the search from every starting pair and collect the matched walks
    /// in ascending order.
    pub fn run(mut self, starts: &BTreeSet<(usize, usize)>) -> Vec<Walk> {
        for &(current, next) in starts {
            let mut walk = vec![current];
            let mut stutter_run = HashSet::from([(current, next)]);
            if self.descend(current, next, 0, &mut walk, &mut stutter_run) {
                break;
            }
        }
        self.matches.into_iter().collect()
    }

    /// Extend the walk along the edge `(previous, current)`. `step` indexes
    /// into `steps`; the walk so far ends at `previous`, and `current` is the
    /// wall about to be appended by whichever branch fires.
    ///
    /// `stutter_run` holds the edges traversed since the pattern last
    /// advanced, including the advancing edge itself. Re-entering one of them
    /// without consuming a word would loop forever without ever producing a
    /// new match, so that branch is cut.
    fn descend(
        &mut self,
        previous: usize,
        current: usize,
        step: usize,
        walk: &mut Walk,
        stutter_run: &mut HashSet<(usize, usize)>,
    ) -> bool {
        if step == self.steps.len() {
            if !self.config.cyclic || walk.first() == walk.last() {
                self.matches.insert(walk.clone());
                return self.first_only;
            }
            return false;
        }
        if let Some(limit) = self.config.max_walk_length {
            if walk.len() >= limit {
                return false;
            }
        }
        let table = self.table;
        let (extremum, stutter) = self.steps[step].clone();
        for (next, labels) in table.successors(previous, current) {
            if labels.contains(&extremum) {
                walk.push(current);
                let mut fresh_run = HashSet::from([(current, *next)]);
                let stop = self.descend(current, *next, step + 1, walk, &mut fresh_run);
                walk.pop();
                if stop {
                    return true;
                }
            }
            if labels.contains(&stutter) && stutter_run.insert((current, *next)) {
                walk.push(current);
                let stop = self.descend(current, *next, step, walk, stutter_run);
                walk.pop();
                stutter_run.remove(&(current, *next));
                if stop {
                    return true;
                }
            }
        }
        false
    }
}
