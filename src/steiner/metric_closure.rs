use std::{fmt::Debug, hash::Hash};

use ahash::HashSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::graphs::{edge::EdgeAnnotation, weighted_graph::WeightedGraph, Weight};

/// Annotation of a metric closure edge: its weight and the vertices the edge
/// skips over in the original graph, excluding both endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricClosureEdge<V> {
    pub weight: Weight,
    pub path: Vec<V>,
}

impl<V: Clone> MetricClosureEdge<V> {
    pub fn new(weight: Weight) -> MetricClosureEdge<V> {
        MetricClosureEdge {
            weight,
            path: Vec::new(),
        }
    }

    /// Joins `first` and `second`, which meet at `separator`.
    pub fn combine(first: &Self, second: &Self, separator: V) -> MetricClosureEdge<V> {
        let mut path = Vec::with_capacity(first.path.len() + 1 + second.path.len());
        path.extend(first.path.iter().cloned());
        path.push(separator);
        path.extend(second.path.iter().cloned());

        MetricClosureEdge {
            weight: first.weight + second.weight,
            path,
        }
    }
}

impl<V: Clone> EdgeAnnotation for MetricClosureEdge<V> {
    fn weight(&self) -> Weight {
        self.weight
    }
}

/// Reduces `graph` to the vertices in `terminals` by eliminating every other
/// vertex in insertion order.
///
/// Eliminating `x` replaces each pair `p -> x -> q` with an edge `p -> q`
/// unless `p -> q` already exists with a weight not above the detour. Each
/// step only looks at the current best edge, so the outcome depends on the
/// elimination order and may miss a cheaper route through several
/// eliminated vertices.
pub fn metric_closure<V, E>(
    graph: &WeightedGraph<V, E>,
    terminals: &HashSet<V>,
) -> WeightedGraph<V, MetricClosureEdge<V>>
where
    V: Clone + Eq + Hash + Debug,
    E: EdgeAnnotation,
{
    let mut closure = graph.map_edges(|annotation| MetricClosureEdge::new(annotation.weight()));

    let eliminated: Vec<V> = graph
        .vertices()
        .filter(|vertex| !terminals.contains(vertex))
        .cloned()
        .collect();

    for vertex in eliminated.iter() {
        eliminate_vertex(&mut closure, vertex);
    }

    debug!(
        "metric closure eliminated {} vertices, {} vertices and {} edges remain",
        eliminated.len(),
        closure.number_of_vertices(),
        closure.number_of_edges()
    );

    closure
}

fn eliminate_vertex<V>(closure: &mut WeightedGraph<V, MetricClosureEdge<V>>, vertex: &V)
where
    V: Clone + Eq + Hash + Debug,
{
    // self loops can never shorten a route through the vertex
    let in_edges: Vec<_> = closure
        .in_edges(vertex)
        .unwrap_or_default()
        .into_iter()
        .filter(|edge| &edge.tail != vertex)
        .collect();
    let out_edges: Vec<_> = closure
        .out_edges(vertex)
        .unwrap_or_default()
        .into_iter()
        .filter(|edge| &edge.head != vertex)
        .collect();

    closure.remove_vertex(vertex);

    let mut shortcuts = 0;
    for in_edge in in_edges.iter() {
        for out_edge in out_edges.iter() {
            if in_edge.tail == out_edge.head {
                continue;
            }

            let shortcut_weight = in_edge.weight() + out_edge.weight();
            if let Some(existing) = closure.shortest_edge(&in_edge.tail, &out_edge.head) {
                if existing.weight() <= shortcut_weight {
                    continue;
                }
            }

            closure.remove_edges_between(&in_edge.tail, &out_edge.head);
            closure.add_edge(
                in_edge.tail.clone(),
                out_edge.head.clone(),
                MetricClosureEdge::combine(&in_edge.annotation, &out_edge.annotation, vertex.clone()),
            );
            shortcuts += 1;
        }
    }

    trace!(
        "eliminated {:?}: {} in, {} out, {} shortcuts",
        vertex,
        in_edges.len(),
        out_edges.len(),
        shortcuts
    );
}

#[cfg(test)]
mod tests {
    use ahash::HashSet;

    use super::{metric_closure, MetricClosureEdge};
    use crate::graphs::{edge::DefaultEdge, weighted_graph::WeightedGraph};

    #[test]
    fn combine_concatenates_paths() {
        let first = MetricClosureEdge {
            weight: 1.0,
            path: vec!['b'],
        };
        let second = MetricClosureEdge {
            weight: 2.5,
            path: vec!['d', 'e'],
        };

        let combined = MetricClosureEdge::combine(&first, &second, 'c');

        assert_eq!(combined.weight, 3.5);
        assert_eq!(combined.path, vec!['b', 'c', 'd', 'e']);
    }

    #[test]
    fn existing_cheaper_edge_is_kept() {
        let mut graph = WeightedGraph::new();
        graph.add_edge('a', 'x', DefaultEdge::new(2.0));
        graph.add_edge('x', 'b', DefaultEdge::new(2.0));
        graph.add_edge('a', 'b', DefaultEdge::new(3.0));

        let terminals: HashSet<char> = ['a', 'b'].into_iter().collect();
        let closure = metric_closure(&graph, &terminals);

        let edges = closure.edges_between(&'a', &'b').unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].annotation.weight, 3.0);
        assert!(edges[0].annotation.path.is_empty());
        assert!(!closure.contains_vertex(&'x'));
    }

    #[test]
    fn self_loops_do_not_resurrect_eliminated_vertex() {
        let mut graph = WeightedGraph::new();
        graph.add_edge('a', 'x', DefaultEdge::new(1.0));
        graph.add_edge('x', 'x', DefaultEdge::new(1.0));
        graph.add_edge('x', 'b', DefaultEdge::new(1.0));

        let terminals: HashSet<char> = ['a', 'b'].into_iter().collect();
        let closure = metric_closure(&graph, &terminals);

        assert_eq!(closure.number_of_vertices(), 2);
        let edge = closure.shortest_edge(&'a', &'b').unwrap();
        assert_eq!(edge.annotation.weight, 2.0);
        assert_eq!(edge.annotation.path, vec!['x']);
    }
}
