use std::hash::Hash;

use log::debug;

use super::dijkstra::dijkstra_one_to_all;
use crate::graphs::{edge::EdgeAnnotation, weighted_graph::WeightedGraph};

/// Shortest-path arborescence rooted at `root`.
///
/// Every vertex reachable from `root` except `root` itself gets exactly one
/// incoming edge: the cheapest original edge from its Dijkstra predecessor.
/// Unreachable vertices are absent. Vertices keep the order of `graph`.
pub fn minimum_arborescence<V, E>(graph: &WeightedGraph<V, E>, root: &V) -> WeightedGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    let data = dijkstra_one_to_all(graph, root);

    let mut arborescence = WeightedGraph::new();
    if graph.contains_vertex(root) {
        arborescence.add_vertex(root.clone());
    }

    for vertex in graph.vertices() {
        let Some(predecessor) = data.predecessors.get(vertex) else {
            continue;
        };
        if let Some(edge) = graph.shortest_edge(predecessor, vertex) {
            arborescence.add_edge(edge.tail, edge.head, edge.annotation);
        }
    }

    debug!(
        "arborescence spans {} of {} vertices",
        arborescence.number_of_vertices(),
        graph.number_of_vertices()
    );

    arborescence
}
