use std::path::PathBuf;

use thiserror::Error;

use crate::graphs::Weight;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("edge {tail} -> {head} has negative weight {weight}")]
    NegativeWeight {
        tail: String,
        head: String,
        weight: Weight,
    },

    #[error("edge {tail} -> {head} has non-finite weight {weight}")]
    NonFiniteWeight {
        tail: String,
        head: String,
        weight: Weight,
    },

    #[error("graph has {actual} vertices, limit is {limit}")]
    TooManyVertices { actual: usize, limit: usize },

    #[error("graph has {actual} edges, limit is {limit}")]
    TooManyEdges { actual: usize, limit: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("unable to parse line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("unknown graph file type: {0}")]
    UnknownFileType(PathBuf),
}
