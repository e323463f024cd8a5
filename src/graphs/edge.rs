use serde::{Deserialize, Serialize};

use super::Weight;

/// Payload carried by every edge of a [`WeightedGraph`](super::weighted_graph::WeightedGraph).
///
/// The only thing the search algorithms need from an annotation is its
/// weight, which must be finite and non-negative.
pub trait EdgeAnnotation: Clone {
    fn weight(&self) -> Weight;
}

/// Annotation that only carries a weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefaultEdge {
    pub weight: Weight,
}

impl DefaultEdge {
    pub fn new(weight: Weight) -> DefaultEdge {
        DefaultEdge { weight }
    }
}

impl Default for DefaultEdge {
    fn default() -> Self {
        DefaultEdge { weight: 1.0 }
    }
}

impl EdgeAnnotation for DefaultEdge {
    fn weight(&self) -> Weight {
        self.weight
    }
}

/// A directed edge `tail -> head`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge<V, E> {
    pub tail: V,
    pub head: V,
    pub annotation: E,
}

impl<V: Clone, E: Clone> Edge<V, E> {
    pub fn new(tail: V, head: V, annotation: E) -> Edge<V, E> {
        Edge {
            tail,
            head,
            annotation,
        }
    }

    pub fn reversed(&self) -> Edge<V, E> {
        Edge {
            tail: self.head.clone(),
            head: self.tail.clone(),
            annotation: self.annotation.clone(),
        }
    }
}

impl<V, E: EdgeAnnotation> Edge<V, E> {
    pub fn weight(&self) -> Weight {
        self.annotation.weight()
    }
}

/// An adjacency list entry. The tail is the vertex owning the list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaillessEdge<V, E> {
    pub head: V,
    pub annotation: E,
}

impl<V: Clone, E: Clone> TaillessEdge<V, E> {
    pub fn new(head: V, annotation: E) -> TaillessEdge<V, E> {
        TaillessEdge { head, annotation }
    }

    pub fn set_tail(&self, tail: V) -> Edge<V, E> {
        Edge {
            tail,
            head: self.head.clone(),
            annotation: self.annotation.clone(),
        }
    }
}
