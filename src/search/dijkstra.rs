use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataHashMap},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueKeyed},
    },
    path::Path,
};
use crate::graphs::{edge::EdgeAnnotation, weighted_graph::WeightedGraph};

/// Dijkstra's algorithm from `source`. If `target` is given the search stops
/// as soon as it is popped, at which point its distance is final.
///
/// Vertices that cannot be reached are left untouched in `data`. Weights must
/// be non-negative.
pub fn dijkstra<V, E>(
    graph: &WeightedGraph<V, E>,
    data: &mut dyn DijkstraData<V>,
    queue: &mut dyn VertexDistanceQueue<V>,
    source: &V,
    target: Option<&V>,
) where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    let mut expanded = HashSet::new();

    data.set_distance(source.clone(), 0.0);
    queue.insert(source.clone(), 0.0);

    while let Some(tail) = queue.pop() {
        if target == Some(&tail) {
            break;
        }
        if !expanded.insert(tail.clone()) {
            continue;
        }

        let Some(distance_tail) = data.get_distance(&tail) else {
            continue;
        };

        for edge in graph.adjacency(&tail).unwrap_or_default() {
            if expanded.contains(&edge.head) {
                continue;
            }

            let alternative_distance_head = distance_tail + edge.annotation.weight();
            let is_improvement = match data.get_distance(&edge.head) {
                Some(current_distance_head) => alternative_distance_head < current_distance_head,
                None => true,
            };
            if is_improvement {
                data.set_distance(edge.head.clone(), alternative_distance_head);
                data.set_predecessor(edge.head.clone(), tail.clone());
                queue.insert(edge.head.clone(), alternative_distance_head);
            }
        }
    }
}

/// Predecessors and distances of all vertices reachable from `source`, or of
/// every vertex settled before `target` if one is given.
pub fn shortest_paths<V, E>(
    graph: &WeightedGraph<V, E>,
    source: &V,
    target: Option<&V>,
) -> DijkstraDataHashMap<V>
where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    let mut data = DijkstraDataHashMap::new();
    let mut queue = VertexDistanceQueueKeyed::new();
    dijkstra(graph, &mut data, &mut queue, source, target);
    data
}

pub fn dijkstra_one_to_all<V, E>(graph: &WeightedGraph<V, E>, source: &V) -> DijkstraDataHashMap<V>
where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    shortest_paths(graph, source, None)
}

/// Search from `source` that stops once `target` is settled.
pub fn dijkstra_one_to_one<V, E>(
    graph: &WeightedGraph<V, E>,
    source: &V,
    target: &V,
) -> DijkstraDataHashMap<V>
where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    shortest_paths(graph, source, Some(target))
}

/// Shortest path from `source` to `target`. The trivial path `[source]` is
/// returned when both are equal, whether or not the vertex is in the graph.
pub fn shortest_path<V, E>(graph: &WeightedGraph<V, E>, source: &V, target: &V) -> Option<Path<V>>
where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    if source == target {
        return Some(Path {
            vertices: vec![target.clone()],
            distance: 0.0,
        });
    }

    let data = dijkstra_one_to_one(graph, source, target);
    data.get_path(target)
}
