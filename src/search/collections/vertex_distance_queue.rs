use std::{cmp::Reverse, hash::Hash};

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;

use crate::graphs::Weight;

/// A priority queue of vertices keyed by their tentative distance.
/// Graph searches use it to repeatedly retrieve the closest vertex.
pub trait VertexDistanceQueue<V> {
    /// Inserts a vertex, or lowers its distance if it is already queued.
    fn insert(&mut self, vertex: V, distance: Weight);

    /// Removes and returns the vertex with the smallest distance or none if
    /// the queue is empty.
    fn pop(&mut self) -> Option<V>;

    fn is_empty(&self) -> bool;
}

/// Queue with a decrease-key operation: every vertex is contained at most
/// once.
pub struct VertexDistanceQueueKeyed<V: Hash + Eq> {
    queue: PriorityQueue<V, Reverse<OrderedFloat<Weight>>>,
}

impl<V: Hash + Eq> Default for VertexDistanceQueueKeyed<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Hash + Eq> VertexDistanceQueueKeyed<V> {
    pub fn new() -> Self {
        VertexDistanceQueueKeyed {
            queue: PriorityQueue::new(),
        }
    }
}

impl<V: Hash + Eq> VertexDistanceQueue<V> for VertexDistanceQueueKeyed<V> {
    fn insert(&mut self, vertex: V, distance: Weight) {
        // priorities are reversed, so increasing the priority lowers the distance
        self.queue.push_increase(vertex, Reverse(OrderedFloat(distance)));
    }

    fn pop(&mut self) -> Option<V> {
        let (vertex, _distance) = self.queue.pop()?;

        Some(vertex)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
