pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod weighted_graph;

pub type Weight = f64;

pub use edge::{DefaultEdge, Edge, EdgeAnnotation, TaillessEdge};
pub use weighted_graph::WeightedGraph;
