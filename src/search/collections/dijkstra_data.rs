use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use crate::{graphs::Weight, search::path::Path};

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData<V> {
    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: &V) -> Option<V>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: V, predecessor: V);

    /// Retrieves the tentative distance of a given vertex, `None` if the
    /// vertex has not been reached yet.
    fn get_distance(&self, vertex: &V) -> Option<Weight>;

    /// Sets the distance of a given vertex.
    fn set_distance(&mut self, vertex: V, distance: Weight);

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// Traces back from the target using the predecessor data. Returns `None`
    /// if the target has no distance.
    fn get_path(&self, target: &V) -> Option<Path<V>>
    where
        V: Clone,
    {
        let distance = self.get_distance(target)?;

        let mut vertices = vec![target.clone()];
        let mut current = target.clone();
        while let Some(predecessor) = self.get_predecessor(&current) {
            vertices.push(predecessor.clone());
            current = predecessor;
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Predecessors and distances of a search, keyed by vertex. Vertices that
/// were never reached are absent from both maps.
#[derive(Clone, Debug)]
pub struct DijkstraDataHashMap<V> {
    pub predecessors: HashMap<V, V>,
    pub distances: HashMap<V, Weight>,
}

impl<V> Default for DijkstraDataHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DijkstraDataHashMap<V> {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> DijkstraData<V> for DijkstraDataHashMap<V> {
    fn get_predecessor(&self, vertex: &V) -> Option<V> {
        self.predecessors.get(vertex).cloned()
    }

    fn set_predecessor(&mut self, vertex: V, predecessor: V) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: &V) -> Option<Weight> {
        self.distances.get(vertex).copied()
    }

    fn set_distance(&mut self, vertex: V, distance: Weight) {
        self.distances.insert(vertex, distance);
    }
}
