use std::{fmt::Debug, hash::Hash};

use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::metric_closure::{metric_closure, MetricClosureEdge};
use crate::{
    graphs::{
        edge::{DefaultEdge, EdgeAnnotation},
        weighted_graph::WeightedGraph,
        Weight,
    },
    search::arborescence::minimum_arborescence,
    tree::Tree,
};

/// Result of a Steiner tree approximation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SteinerTree<V: Eq + Hash> {
    pub tree: Tree<V>,
    /// Requested terminals that are not part of `tree`.
    pub unreached: HashSet<V>,
    /// Summed original weight of the tree edges.
    pub weight: Weight,
}

impl<V: Eq + Hash> SteinerTree<V> {
    pub fn is_complete(&self) -> bool {
        self.unreached.is_empty()
    }

    pub fn number_of_edges(&self) -> usize {
        self.tree.size() - 1
    }
}

/// Approximates a minimum directed Steiner tree connecting `root` to every
/// vertex in `terminals`.
///
/// Terminals that cannot be reached from `root` are reported in
/// [`SteinerTree::unreached`] instead of failing the computation. `root` is
/// always kept, even if it is not listed as a terminal.
pub fn approximate_steiner_tree<V, E>(
    graph: &WeightedGraph<V, E>,
    root: &V,
    terminals: &HashSet<V>,
) -> SteinerTree<V>
where
    V: Clone + Eq + Hash + Debug,
    E: EdgeAnnotation,
{
    let mut preserved = terminals.clone();
    preserved.insert(root.clone());

    let closure = metric_closure(graph, &preserved);
    let arborescence = minimum_arborescence(&closure, root);
    let reconstructed = reconstruct(graph, &arborescence);
    let (tree, weight) = construct_tree(&reconstructed, root);

    let reached: HashSet<&V> = tree.values().collect();
    let unreached: HashSet<V> = terminals
        .iter()
        .filter(|terminal| !reached.contains(terminal))
        .cloned()
        .collect();

    if !unreached.is_empty() {
        warn!(
            "{} of {} terminals are unreachable from {:?}",
            unreached.len(),
            terminals.len(),
            root
        );
    }
    debug!(
        "steiner tree from {:?} has {} vertices and weight {}",
        root,
        tree.size(),
        weight
    );

    SteinerTree {
        tree,
        unreached,
        weight,
    }
}

/// Expands every metric closure edge of `arborescence` into the chain of
/// original edges it stands for. Pairs that are already connected are not
/// added again, so overlapping chains share their common edges.
pub fn reconstruct<V, E>(
    graph: &WeightedGraph<V, E>,
    arborescence: &WeightedGraph<V, MetricClosureEdge<V>>,
) -> WeightedGraph<V, DefaultEdge>
where
    V: Clone + Eq + Hash,
    E: EdgeAnnotation,
{
    let mut reconstructed = WeightedGraph::new();
    for vertex in arborescence.vertices() {
        reconstructed.add_vertex(vertex.clone());
    }

    for edge in arborescence.all_edges() {
        let chain = std::iter::once(&edge.tail)
            .chain(edge.annotation.path.iter())
            .chain(std::iter::once(&edge.head));

        for (tail, head) in chain.tuple_windows() {
            if reconstructed.contains_edge(tail, head) {
                continue;
            }
            let annotation = graph
                .shortest_edge(tail, head)
                .map(|original| DefaultEdge::new(original.weight()))
                .unwrap_or_default();
            reconstructed.add_edge(tail.clone(), head.clone(), annotation);
        }
    }

    reconstructed
}

/// Builds the tree of everything reachable from `root` in `graph` and sums
/// the weights of the edges it uses. A vertex reachable along several
/// routes is attached below the first parent that discovers it, which also
/// keeps cyclic input from looping.
pub fn construct_tree<V>(graph: &WeightedGraph<V, DefaultEdge>, root: &V) -> (Tree<V>, Weight)
where
    V: Clone + Eq + Hash,
{
    let mut tree = Tree::new(root.clone());
    let mut weight = 0.0;

    let mut visited = HashSet::new();
    visited.insert(root.clone());

    let mut stack = vec![(root.clone(), tree.root())];
    while let Some((tail, node)) = stack.pop() {
        for edge in graph.adjacency(&tail).unwrap_or_default() {
            if !visited.insert(edge.head.clone()) {
                continue;
            }
            let child = tree.add_child(node, edge.head.clone());
            weight += edge.annotation.weight();
            stack.push((edge.head.clone(), child));
        }
    }

    (tree, weight)
}
