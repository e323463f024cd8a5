use serde::{Deserialize, Serialize};

use crate::graphs::Weight;

/// A path through a graph together with its total weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub distance: Weight,
}

impl<V> Path<V> {
    pub fn source(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn target(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
