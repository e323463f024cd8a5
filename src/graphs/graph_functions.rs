use std::{fmt::Debug, hash::Hash};

use super::{edge::EdgeAnnotation, weighted_graph::WeightedGraph};
use crate::error::RoutingError;

/// Checks that every edge weight is finite and non-negative, the
/// precondition of every search in this crate.
pub fn validate_weights<V, E>(graph: &WeightedGraph<V, E>) -> Result<(), RoutingError>
where
    V: Clone + Eq + Hash + Debug,
    E: EdgeAnnotation,
{
    for edge in graph.all_edges() {
        let weight = edge.weight();
        if !weight.is_finite() {
            return Err(RoutingError::NonFiniteWeight {
                tail: format!("{:?}", edge.tail),
                head: format!("{:?}", edge.head),
                weight,
            });
        }
        if weight < 0.0 {
            return Err(RoutingError::NegativeWeight {
                tail: format!("{:?}", edge.tail),
                head: format!("{:?}", edge.head),
                weight,
            });
        }
    }

    Ok(())
}

pub fn add_edge_bidirectional<V, E>(graph: &mut WeightedGraph<V, E>, tail: V, head: V, annotation: E)
where
    V: Clone + Eq + Hash,
    E: Clone,
{
    graph.add_edge(tail.clone(), head.clone(), annotation.clone());
    graph.add_edge(head, tail, annotation);
}

/// True if every edge `u -> v` has a partner `v -> u` of the same weight.
pub fn is_bidirectional<V, E>(graph: &WeightedGraph<V, E>) -> bool
where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    graph.all_edges().iter().all(|edge| {
        graph
            .edges_between(&edge.head, &edge.tail)
            .unwrap_or_default()
            .iter()
            .any(|reverse| reverse.weight() == edge.weight())
    })
}
