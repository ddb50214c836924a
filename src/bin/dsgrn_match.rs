use clap::Parser;
use dsgrn_pattern_match::labelling::{WallInfoTable, label_walls};
use dsgrn_pattern_match::matcher::{MatchConfig, NoMatch, Walk, find_all_matches, find_first_match};
use dsgrn_pattern_match::pattern::{Pattern, parse_events, translate_events};
use dsgrn_pattern_match::wall_graph::WallGraph;
use env_logger::Builder;
use log::LevelFilter;
use std::collections::BTreeSet;

#[derive(Parser)]
#[command(name = "dsgrn_match")]
#[command(about = "Match extremum patterns against the wall graph of a switching network")]
struct Args {
    /// Path to a wall graph file (.json)
    #[arg(value_name = "GRAPH")]
    graph: String,

    /// Path to a pattern file, one comma-separated event sequence per line,
    /// e.g. `X max, Z max, X min, Z min`
    #[arg(value_name = "PATTERNS")]
    patterns: String,

    /// Accept open walks instead of requiring cycles
    #[arg(long)]
    acyclic: bool,

    /// Stop at the first matching walk of each pattern
    #[arg(long)]
    first: bool,

    /// Report only the number of matches per pattern
    #[arg(long)]
    count: bool,

    /// Abandon walks longer than LEN walls
    #[arg(long, value_name = "LEN")]
    max_walk_length: Option<usize>,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

/// On-disk wall graph representation.
#[derive(serde::Deserialize)]
struct WallGraphFile {
    variables: Vec<String>,
    out_edges: Vec<Vec<usize>>,
    positions: Vec<Vec<f64>>,
    affected_variables: Vec<Option<usize>>,
}

fn main() {
    let args = Args::parse();

    // Handle verbose flag: None = not specified, Some(None) = specified
    // without value (defaults to info), Some(Some(level)) = specified with value
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let graph_text = std::fs::read_to_string(&args.graph).unwrap_or_else(|e| {
        eprintln!("Failed to read wall graph file {}: {}", args.graph, e);
        std::process::exit(1);
    });
    let file: WallGraphFile = serde_json::from_str(&graph_text).unwrap_or_else(|e| {
        eprintln!("Failed to parse wall graph file {}: {}", args.graph, e);
        std::process::exit(1);
    });
    let graph = WallGraph::new(file.out_edges, file.positions, file.affected_variables)
        .unwrap_or_else(|e| {
            eprintln!("Inconsistent wall graph: {}", e);
            std::process::exit(1);
        });

    println!(
        "Loaded wall graph with {} walls over {} variables.",
        graph.num_walls(),
        graph.num_variables()
    );

    // Any labelling failure invalidates the whole graph, so there is nothing
    // to search.
    let table = label_walls(&graph).unwrap_or_else(|e| {
        eprintln!("Failed to label the wall graph: {}", e);
        std::process::exit(1);
    });

    let pattern_text = std::fs::read_to_string(&args.patterns).unwrap_or_else(|e| {
        eprintln!("Failed to read pattern file {}: {}", args.patterns, e);
        std::process::exit(1);
    });
    let variables: Vec<&str> = file.variables.iter().map(String::as_str).collect();

    let config = MatchConfig {
        cyclic: !args.acyclic,
        max_walk_length: args.max_walk_length,
    };

    for line in pattern_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let events = match parse_events(line, &variables) {
            Ok(events) => events,
            Err(e) => {
                eprintln!("Skipping pattern `{}`: {}", line, e);
                continue;
            }
        };
        let alternatives = match translate_events(graph.num_variables(), &events, config.cyclic) {
            Ok(alternatives) => alternatives,
            Err(e) => {
                eprintln!("Skipping pattern `{}`: {}", line, e);
                continue;
            }
        };

        println!("Pattern: {}", line);
        if args.first {
            match first_match(&table, &alternatives, config) {
                Some(walk) => println!("Result: {:?}", walk),
                None => println!("Result: no matches."),
            }
        } else {
            let matches = all_matches(&table, &alternatives, config);
            if args.count {
                println!("Results: {}", matches.len());
            } else if matches.is_empty() {
                println!("Results: no matches.");
            } else {
                for walk in matches {
                    println!("Result: {:?}", walk);
                }
            }
        }
    }
}

/// Union of the match sets of all alternative translations of one pattern.
/// Words that never occur in the table simply rule their alternative out.
fn all_matches(
    table: &WallInfoTable,
    alternatives: &[Pattern],
    config: MatchConfig,
) -> Vec<Walk> {
    let mut all: BTreeSet<Walk> = BTreeSet::new();
    for pattern in alternatives {
        match find_all_matches(table, pattern, config) {
            Ok(matches) => all.extend(matches),
            Err(NoMatch::UnknownWord(_)) => continue,
            Err(e) => {
                eprintln!("Skipping pattern alternative: {}", e);
            }
        }
    }
    all.into_iter().collect()
}

fn first_match(
    table: &WallInfoTable,
    alternatives: &[Pattern],
    config: MatchConfig,
) -> Option<Walk> {
    alternatives
        .iter()
        .find_map(|pattern| find_first_match(table, pattern, config).ok())
}
