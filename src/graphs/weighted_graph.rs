use std::hash::Hash;

use ahash::{HashSet, HashSetExt};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    edge::{Edge, EdgeAnnotation, TaillessEdge},
    Weight,
};

/// Directed multigraph keyed by arbitrary hashable vertices.
///
/// Every vertex maps to its ordered list of outgoing edges. The map doubles
/// as the vertex set, so every head referenced by an adjacency entry is also
/// a key. Parallel edges are kept.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize + Eq + Hash, E: Serialize",
    deserialize = "V: Deserialize<'de> + Eq + Hash, E: Deserialize<'de>"
))]
pub struct WeightedGraph<V, E> {
    adjacency: IndexMap<V, Vec<TaillessEdge<V, E>>>,
}

impl<V, E> Default for WeightedGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> WeightedGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Clone,
{
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: IndexMap::new(),
        }
    }

    /// Builds a graph from an adjacency map. Heads that are not keys of the
    /// map are registered as vertices without outgoing edges.
    pub fn from_adjacency<I>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, Vec<TaillessEdge<V, E>>)>,
    {
        let mut graph = Self::new();
        for (tail, edges) in adjacency {
            graph.add_vertex(tail.clone());
            for edge in edges {
                graph.add_edge(tail.clone(), edge.head, edge.annotation);
            }
        }
        graph
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<V, E>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge.tail, edge.head, edge.annotation);
        }
        graph
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    pub fn number_of_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Removes the vertex together with every edge ending at it.
    pub fn remove_vertex(&mut self, vertex: &V) {
        // shift_remove keeps the insertion order of the remaining vertices
        self.adjacency.shift_remove(vertex);
        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| &edge.head != vertex);
        }
    }

    /// Appends `tail -> head`, registering both endpoints. Does not
    /// deduplicate.
    pub fn add_edge(&mut self, tail: V, head: V, annotation: E) {
        self.add_vertex(tail.clone());
        self.add_vertex(head.clone());
        if let Some(edges) = self.adjacency.get_mut(&tail) {
            edges.push(TaillessEdge::new(head, annotation));
        }
    }

    pub fn remove_edges_between(&mut self, tail: &V, head: &V) {
        if let Some(edges) = self.adjacency.get_mut(tail) {
            edges.retain(|edge| &edge.head != head);
        }
    }

    pub fn remove_out_edges(&mut self, tail: &V) {
        if let Some(edges) = self.adjacency.get_mut(tail) {
            edges.clear();
        }
    }

    /// Raw adjacency list of `tail`, `None` if it is not a vertex.
    pub fn adjacency(&self, tail: &V) -> Option<&[TaillessEdge<V, E>]> {
        self.adjacency.get(tail).map(Vec::as_slice)
    }

    pub fn out_edges(&self, tail: &V) -> Option<Vec<Edge<V, E>>> {
        let edges = self.adjacency.get(tail)?;
        Some(
            edges
                .iter()
                .map(|edge| edge.set_tail(tail.clone()))
                .collect(),
        )
    }

    /// Edges ending at `head`, oriented `tail -> head`. Scans the whole
    /// graph.
    pub fn in_edges(&self, head: &V) -> Option<Vec<Edge<V, E>>> {
        if !self.contains_vertex(head) {
            return None;
        }

        Some(
            self.adjacency
                .iter()
                .flat_map(|(tail, edges)| {
                    edges
                        .iter()
                        .filter(move |edge| &edge.head == head)
                        .map(move |edge| edge.set_tail(tail.clone()))
                })
                .collect(),
        )
    }

    pub fn edges_between(&self, tail: &V, head: &V) -> Option<Vec<Edge<V, E>>> {
        let edges = self.adjacency.get(tail)?;
        Some(
            edges
                .iter()
                .filter(|edge| &edge.head == head)
                .map(|edge| edge.set_tail(tail.clone()))
                .collect(),
        )
    }

    pub fn contains_edge(&self, tail: &V, head: &V) -> bool {
        self.adjacency
            .get(tail)
            .is_some_and(|edges| edges.iter().any(|edge| &edge.head == head))
    }

    /// Every edge of the graph, grouped by tail in vertex insertion order.
    pub fn all_edges(&self) -> Vec<Edge<V, E>> {
        self.adjacency
            .iter()
            .flat_map(|(tail, edges)| edges.iter().map(|edge| edge.set_tail(tail.clone())))
            .collect()
    }

    pub fn reversed(&self) -> Self {
        let mut reversed = Self::new();
        for vertex in self.vertices() {
            reversed.add_vertex(vertex.clone());
        }
        for (tail, edges) in self.adjacency.iter() {
            for edge in edges {
                reversed.add_edge(edge.head.clone(), tail.clone(), edge.annotation.clone());
            }
        }
        reversed
    }

    pub fn map_edges<N, F>(&self, mut transform: F) -> WeightedGraph<V, N>
    where
        N: Clone,
        F: FnMut(&E) -> N,
    {
        let adjacency = self
            .adjacency
            .iter()
            .map(|(tail, edges)| {
                let edges: Vec<_> = edges
                    .iter()
                    .map(|edge| TaillessEdge::new(edge.head.clone(), transform(&edge.annotation)))
                    .collect();
                (tail.clone(), edges)
            })
            .collect();

        WeightedGraph { adjacency }
    }

    /// Renames every vertex. Vertices mapped onto the same value are merged
    /// and their adjacency lists concatenated.
    pub fn map_vertices<W, F>(&self, transform: F) -> WeightedGraph<W, E>
    where
        W: Clone + Eq + Hash,
        F: FnMut(&V) -> W,
    {
        let renamed: Vec<W> = self.adjacency.keys().map(transform).collect();

        let mut graph = WeightedGraph::new();
        for vertex in renamed.iter() {
            graph.add_vertex(vertex.clone());
        }
        for (tail, edges) in renamed.iter().zip(self.adjacency.values()) {
            for edge in edges {
                if let Some(head) = self.adjacency.get_index_of(&edge.head) {
                    graph.add_edge(tail.clone(), renamed[head].clone(), edge.annotation.clone());
                }
            }
        }
        graph
    }

    /// Depth-first search from `start`. Contains `start` itself if it is a
    /// vertex.
    pub fn reachable_vertices(&self, start: &V) -> HashSet<V> {
        let mut visited = HashSet::new();
        if !self.contains_vertex(start) {
            return visited;
        }

        let mut stack = vec![start.clone()];
        visited.insert(start.clone());
        while let Some(tail) = stack.pop() {
            for edge in self.adjacency(&tail).unwrap_or_default() {
                if visited.insert(edge.head.clone()) {
                    stack.push(edge.head.clone());
                }
            }
        }

        visited
    }
}

impl<V, E> WeightedGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    /// Cheapest edge `tail -> head`. Ties resolve to the earliest inserted
    /// edge.
    pub fn shortest_edge(&self, tail: &V, head: &V) -> Option<Edge<V, E>> {
        self.adjacency
            .get(tail)?
            .iter()
            .filter(|edge| &edge.head == head)
            .min_by(|a, b| a.annotation.weight().total_cmp(&b.annotation.weight()))
            .map(|edge| edge.set_tail(tail.clone()))
    }

    pub fn total_weight(&self) -> Weight {
        self.adjacency
            .values()
            .flatten()
            .map(|edge| edge.annotation.weight())
            .sum()
    }
}
