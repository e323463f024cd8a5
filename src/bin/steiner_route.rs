use std::{path::PathBuf, process::ExitCode, time::Instant};

use ahash::HashSet;
use clap::Parser;
use log::{error, info};
use mesh_routes::{
    graphs::graph_factory::GraphFactory,
    steiner::{RoutePlanner, RoutingLimits},
    utility::get_progressspinner,
};
use serde_json::json;

/// Computes a multicast tree from root to every terminal and prints it as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in .json, .bincode or .edges format
    #[arg(short, long)]
    graph: PathBuf,
    /// Vertex the multicast starts at
    #[arg(short, long)]
    root: String,
    /// Vertex that has to be reached, may be given multiple times
    #[arg(short, long = "terminal", required = true)]
    terminals: Vec<String>,
    #[command(flatten)]
    limits: RoutingLimits,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let spinner = get_progressspinner("Loading graph");
    let start = Instant::now();
    let graph = match GraphFactory::from_file(&args.graph) {
        Ok(graph) => graph,
        Err(err) => {
            spinner.finish_and_clear();
            error!("unable to load {}: {}", args.graph.display(), err);
            return ExitCode::FAILURE;
        }
    };
    spinner.finish_and_clear();
    info!(
        "loaded {} vertices and {} edges in {:?}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        start.elapsed()
    );

    let terminals: HashSet<String> = args.terminals.into_iter().collect();
    let planner = RoutePlanner::new(args.limits);

    let start = Instant::now();
    let steiner_tree = match planner.plan(&graph, &args.root, &terminals) {
        Ok(steiner_tree) => steiner_tree,
        Err(err) => {
            error!("unable to plan route: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("planning took {:?}", start.elapsed());

    let edges: Vec<_> = steiner_tree
        .tree
        .edges()
        .into_iter()
        .map(|(tail, head)| json!([tail, head]))
        .collect();
    let mut unreached: Vec<_> = steiner_tree.unreached.iter().collect();
    unreached.sort();

    let output = json!({
        "root": args.root,
        "edges": edges,
        "unreached": unreached,
        "weight": steiner_tree.weight,
    });
    println!("{}", output);

    if steiner_tree.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
