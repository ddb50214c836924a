//! The pattern matcher: finds walks through the labelled wall graph whose
//! word sequence realizes a target pattern.
//!
//! A walk matches when its walls exhibit the pattern's words in order, where
//! each extremum word may be preceded by any number of stutter walls carrying
//! the corresponding monotone word. Matching is over wall *triples*, so the
//! same wall can legitimately appear several times in one walk.

mod match_config;
mod search;

#[cfg(test)]
mod tests;

pub use match_config::MatchConfig;

use crate::label::Label;
use crate::labelling::WallInfoTable;
use crate::pattern::Pattern;
use log::{debug, info};
use search::PatternSearch;
use std::collections::BTreeSet;
use thiserror::Error;

/// A matched walk, as the sequence of wall indices it passes through. Cyclic
/// matches repeat their starting wall at the end.
pub type Walk = Vec<usize>;

/// Reasons a pattern search can come back empty-handed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NoMatch {
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("pattern word `{0}` does not occur anywhere in the label table")]
    UnknownWord(Label),
    #[error("no walk in the wall graph realizes the pattern")]
    Exhausted,
}

/// Find every walk matching `pattern`, in ascending order and without
/// duplicates. An empty result means the search completed and found nothing.
pub fn find_all_matches(
    table: &WallInfoTable,
    pattern: &Pattern,
    config: MatchConfig,
) -> Result<Vec<Walk>, NoMatch> {
    search(table, pattern, config, false)
}

/// Find one matching walk, abandoning the search as soon as it is found.
pub fn find_first_match(
    table: &WallInfoTable,
    pattern: &Pattern,
    config: MatchConfig,
) -> Result<Walk, NoMatch> {
    search(table, pattern, config, true)?
        .into_iter()
        .next()
        .ok_or(NoMatch::Exhausted)
}

fn search(
    table: &WallInfoTable,
    pattern: &Pattern,
    config: MatchConfig,
    first_only: bool,
) -> Result<Vec<Walk>, NoMatch> {
    let words = pattern.words();
    let Some(first_word) = words.first() else {
        return Err(NoMatch::EmptyPattern);
    };
    // A word absent from the whole table can never match; fail fast instead
    // of searching.
    for word in words {
        if !table.contains_label(word) {
            return Err(NoMatch::UnknownWord(word.clone()));
        }
    }
    info!(
        "Matching a pattern of {} words against {} labelled edges.",
        words.len(),
        table.len()
    );

    let mut starts: BTreeSet<(usize, usize)> = BTreeSet::new();
    for (previous, current) in table.edges() {
        for (next, labels) in table.successors(previous, current) {
            if labels.contains(first_word) {
                starts.insert((current, *next));
            }
        }
    }
    debug!("Search can start from {} wall pairs.", starts.len());

    if words.len() == 1 {
        let walls: BTreeSet<usize> = starts.into_iter().map(|(current, _)| current).collect();
        return Ok(walls.into_iter().map(|wall| vec![wall]).collect());
    }
    let matches = PatternSearch::new(table, words, config, first_only).run(&starts);
    debug!("Search finished with {} matched walks.", matches.len());
    Ok(matches)
}
