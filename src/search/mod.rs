use std::hash::Hash;

use path::Path;

use crate::graphs::{edge::EdgeAnnotation, weighted_graph::WeightedGraph, Weight};

pub mod arborescence;
pub mod collections;
pub mod dijkstra;
pub mod path;

pub trait PathFinding<V> {
    fn shortest_path(&self, source: &V, target: &V) -> Option<Path<V>>;

    fn shortest_path_distance(&self, source: &V, target: &V) -> Option<Weight> {
        self.shortest_path(source, target).map(|path| path.distance)
    }
}

impl<V, E> PathFinding<V> for WeightedGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    fn shortest_path(&self, source: &V, target: &V) -> Option<Path<V>> {
        dijkstra::shortest_path(self, source, target)
    }
}
