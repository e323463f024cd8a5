pub mod error;
pub mod graphs;
pub mod search;
pub mod steiner;
pub mod tree;
pub mod utility;

pub use error::RoutingError;
