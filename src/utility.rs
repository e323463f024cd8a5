use std::time::Duration;

use indicatif::ProgressBar;
use rand::Rng;

use crate::graphs::{
    edge::DefaultEdge, graph_functions::add_edge_bidirectional, weighted_graph::WeightedGraph,
    Weight,
};

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Random symmetric mesh on vertices `0..number_of_vertices`. Every vertex
/// gets `degree` links to random other vertices, each link carrying a weight
/// drawn from `1.0..max_weight` in both directions. A `max_weight` that is
/// not finite or not above 1 gives every link weight 1.
pub fn random_mesh<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    degree: u32,
    max_weight: Weight,
) -> WeightedGraph<u32, DefaultEdge> {
    let mut graph = WeightedGraph::new();
    for vertex in 0..number_of_vertices {
        graph.add_vertex(vertex);
    }
    if number_of_vertices <= 1 {
        return graph;
    }

    for tail in 0..number_of_vertices {
        for _ in 0..degree {
            // guarantee that tail != head
            let mut head = rng.gen_range(0..number_of_vertices - 1);
            if head >= tail {
                head += 1;
            }
            let weight = if max_weight > 1.0 && max_weight.is_finite() {
                rng.gen_range(1.0..max_weight)
            } else {
                1.0
            };
            add_edge_bidirectional(&mut graph, tail, head, DefaultEdge::new(weight));
        }
    }

    graph
}
