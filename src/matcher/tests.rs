//! Matcher tests over the fixture wall graphs with hand-checked match sets.

use crate::labelling::{WallInfoTable, label_walls};
use crate::matcher::{MatchConfig, NoMatch, find_all_matches, find_first_match};
use crate::test_utils::{
    branching_wall_graph, init_logger, labels, oscillating_wall_graph, pattern,
    steady_state_wall_graph, word,
};
use std::collections::HashMap;

fn oscillating_table() -> WallInfoTable {
    label_walls(&oscillating_wall_graph()).unwrap()
}

#[test]
fn oscillation_matches_both_cycles() {
    init_logger();
    let table = oscillating_table();
    let matches = find_all_matches(
        &table,
        &pattern(&["md", "um", "Mu", "dM", "md"]),
        MatchConfig::default(),
    )
    .unwrap();
    assert_eq!(matches, vec![vec![0, 1, 4, 6, 5, 2, 0], vec![3, 4, 6, 5, 3]]);
}

#[test]
fn doubled_oscillation_can_switch_cycles_halfway() {
    init_logger();
    let table = oscillating_table();
    let matches = find_all_matches(
        &table,
        &pattern(&["md", "um", "Mu", "dM", "md", "um", "Mu", "dM", "md"]),
        MatchConfig::default(),
    )
    .unwrap();
    assert_eq!(
        matches,
        vec![
            vec![0, 1, 4, 6, 5, 2, 0, 1, 4, 6, 5, 2, 0],
            vec![0, 1, 4, 6, 5, 3, 4, 6, 5, 2, 0],
            vec![3, 4, 6, 5, 2, 0, 1, 4, 6, 5, 3],
            vec![3, 4, 6, 5, 3, 4, 6, 5, 3],
        ]
    );
}

#[test]
fn acyclic_pattern_matches_an_open_walk() {
    init_logger();
    let table = oscillating_table();
    let matches =
        find_all_matches(&table, &pattern(&["ud", "um", "Mu"]), MatchConfig::acyclic()).unwrap();
    assert_eq!(matches, vec![vec![1, 4, 6]]);
}

#[test]
fn unreachable_word_order_finds_nothing() {
    init_logger();
    let table = oscillating_table();
    // Both words occur in the table, but never a min directly after a max.
    let words = pattern(&["um", "md"]);
    assert_eq!(
        find_all_matches(&table, &words, MatchConfig::acyclic()),
        Ok(vec![])
    );
    assert_eq!(
        find_first_match(&table, &words, MatchConfig::acyclic()),
        Err(NoMatch::Exhausted)
    );
}

#[test]
fn steady_state_graph_has_a_single_cycle_match() {
    init_logger();
    let table = label_walls(&steady_state_wall_graph()).unwrap();
    let matches = find_all_matches(
        &table,
        &pattern(&["md", "um", "Mu", "dM", "md"]),
        MatchConfig::default(),
    )
    .unwrap();
    assert_eq!(matches, vec![vec![0, 1, 3, 2, 0]]);
}

#[test]
fn word_outside_the_table_vocabulary_is_rejected() {
    init_logger();
    let table = label_walls(&steady_state_wall_graph()).unwrap();
    assert_eq!(
        find_all_matches(
            &table,
            &pattern(&["md", "um", "Mu", "dM", "Md"]),
            MatchConfig::acyclic(),
        ),
        Err(NoMatch::UnknownWord(word("Md")))
    );
}

#[test]
fn skipped_extremum_cannot_be_stuttered_over() {
    init_logger();
    let table = label_walls(&steady_state_wall_graph()).unwrap();
    // The cycle passes through a min between `md` and `Mu`, so the shortened
    // pattern has no realization.
    let matches = find_all_matches(
        &table,
        &pattern(&["md", "Mu", "dM", "md"]),
        MatchConfig::default(),
    )
    .unwrap();
    assert_eq!(matches, Vec::<Vec<usize>>::new());
}

#[test]
fn branching_graph_matches_both_branch_cycles() {
    init_logger();
    let table = label_walls(&branching_wall_graph()).unwrap();
    let matches = find_all_matches(
        &table,
        &pattern(&["dM", "md", "um", "Mu", "dM"]),
        MatchConfig::default(),
    )
    .unwrap();
    assert_eq!(matches, vec![vec![2, 0, 1, 3, 2], vec![2, 0, 1, 4, 6, 5, 2]]);

    let matches = find_all_matches(
        &table,
        &pattern(&["Mu", "dM", "md", "um", "Mu"]),
        MatchConfig::default(),
    )
    .unwrap();
    assert_eq!(matches, vec![vec![3, 2, 0, 1, 3], vec![6, 5, 2, 0, 1, 4, 6]]);

    let matches =
        find_all_matches(&table, &pattern(&["um", "Mu"]), MatchConfig::acyclic()).unwrap();
    assert_eq!(matches, vec![vec![1, 3], vec![1, 4, 6]]);
}

#[test]
fn first_match_is_one_of_the_full_matches() {
    init_logger();
    let table = oscillating_table();
    let words = pattern(&["md", "um", "Mu", "dM", "md"]);
    let all = find_all_matches(&table, &words, MatchConfig::default()).unwrap();
    let first = find_first_match(&table, &words, MatchConfig::default()).unwrap();
    assert!(all.contains(&first));
}

#[test]
fn empty_pattern_is_rejected() {
    init_logger();
    let table = oscillating_table();
    assert_eq!(
        find_all_matches(&table, &pattern(&[]), MatchConfig::default()),
        Err(NoMatch::EmptyPattern)
    );
}

#[test]
fn single_word_pattern_lists_the_exhibiting_walls() {
    init_logger();
    let table = oscillating_table();
    let matches = find_all_matches(&table, &pattern(&["md"]), MatchConfig::acyclic()).unwrap();
    assert_eq!(matches, vec![vec![0], vec![3]]);
}

#[test]
fn walk_length_bound_prunes_the_longer_cycle() {
    init_logger();
    let table = oscillating_table();
    let words = pattern(&["md", "um", "Mu", "dM", "md"]);
    let config = MatchConfig {
        max_walk_length: Some(5),
        ..MatchConfig::default()
    };
    let matches = find_all_matches(&table, &words, config).unwrap();
    assert_eq!(matches, vec![vec![3, 4, 6, 5, 3]]);
}

#[test]
fn stutter_cycles_terminate_without_matches() {
    init_logger();
    // Walls 1, 2, 3 form a cycle that carries only the stutter word `uu`, so
    // a naive search could stutter around it forever waiting for `Mu`.
    let table = WallInfoTable::from_entries(
        HashMap::from([
            ((0, 1), vec![(2, labels(&["um"]))]),
            ((1, 2), vec![(3, labels(&["uu"]))]),
            ((2, 3), vec![(1, labels(&["uu"]))]),
            ((3, 1), vec![(2, labels(&["uu"]))]),
            ((8, 9), vec![(7, labels(&["Mu"]))]),
        ]),
        2,
    );
    let matches =
        find_all_matches(&table, &pattern(&["um", "Mu"]), MatchConfig::acyclic()).unwrap();
    assert_eq!(matches, Vec::<Vec<usize>>::new());
}
