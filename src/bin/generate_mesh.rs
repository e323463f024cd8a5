use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use log::{error, info};
use mesh_routes::{
    graphs::graph_factory::GraphFactory,
    utility::{get_progressspinner, random_mesh},
};
use rand::{rngs::StdRng, SeedableRng};

/// Writes a random symmetric peer mesh
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of peers
    #[arg(short, long, default_value_t = 100)]
    vertices: u32,
    /// Links created per peer
    #[arg(short, long, default_value_t = 3)]
    degree: u32,
    /// Upper bound for link weights
    #[arg(short, long, default_value_t = 10.0)]
    max_weight: f64,
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// Outfile in .json or .bincode format
    #[arg(short, long)]
    out: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    if !args.max_weight.is_finite() || args.max_weight < 1.0 {
        error!("max weight must be finite and at least 1, got {}", args.max_weight);
        return ExitCode::FAILURE;
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let start = Instant::now();
    let graph = random_mesh(&mut rng, args.vertices, args.degree, args.max_weight)
        .map_vertices(|vertex| format!("peer{}", vertex));
    info!(
        "generated {} vertices and {} edges in {:?}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        start.elapsed()
    );

    let spinner = get_progressspinner("Writing graph");
    let result = GraphFactory::to_file(&graph, &args.out);
    spinner.finish_and_clear();

    if let Err(err) = result {
        error!("unable to write {}: {}", args.out.display(), err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
