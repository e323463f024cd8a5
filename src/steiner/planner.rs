use std::{fmt::Debug, hash::Hash};

use ahash::HashSet;
use clap::Args;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::steiner_tree::{approximate_steiner_tree, SteinerTree};
use crate::{
    error::RoutingError,
    graphs::{edge::EdgeAnnotation, graph_functions::validate_weights, weighted_graph::WeightedGraph},
};

/// Size ceiling applied to graphs before any route is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Args)]
pub struct RoutingLimits {
    /// Largest accepted number of vertices
    #[arg(long, default_value_t = 10_000)]
    pub max_vertices: usize,
    /// Largest accepted number of edges
    #[arg(long, default_value_t = 100_000)]
    pub max_edges: usize,
}

impl Default for RoutingLimits {
    fn default() -> Self {
        RoutingLimits {
            max_vertices: 10_000,
            max_edges: 100_000,
        }
    }
}

/// A multicast request: reach every terminal starting from root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteRequest<V: Eq + Hash> {
    pub root: V,
    pub terminals: HashSet<V>,
}

/// Validating entry point for route computations.
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    limits: RoutingLimits,
}

impl RoutePlanner {
    pub fn new(limits: RoutingLimits) -> Self {
        RoutePlanner { limits }
    }

    /// Rejects graphs above the configured limits or with weights that are
    /// negative, NaN or infinite.
    pub fn validate<V, E>(&self, graph: &WeightedGraph<V, E>) -> Result<(), RoutingError>
    where
        V: Clone + Eq + Hash + Debug,
        E: EdgeAnnotation,
    {
        if graph.number_of_vertices() > self.limits.max_vertices {
            return Err(RoutingError::TooManyVertices {
                actual: graph.number_of_vertices(),
                limit: self.limits.max_vertices,
            });
        }
        if graph.number_of_edges() > self.limits.max_edges {
            return Err(RoutingError::TooManyEdges {
                actual: graph.number_of_edges(),
                limit: self.limits.max_edges,
            });
        }
        validate_weights(graph)
    }

    pub fn plan<V, E>(
        &self,
        graph: &WeightedGraph<V, E>,
        root: &V,
        terminals: &HashSet<V>,
    ) -> Result<SteinerTree<V>, RoutingError>
    where
        V: Clone + Eq + Hash + Debug,
        E: EdgeAnnotation,
    {
        self.validate(graph)?;
        Ok(approximate_steiner_tree(graph, root, terminals))
    }

    /// Plans independent requests over the same graph in parallel. The graph
    /// is validated once; results keep the order of `requests`.
    pub fn plan_many<V, E>(
        &self,
        graph: &WeightedGraph<V, E>,
        requests: &[RouteRequest<V>],
    ) -> Result<Vec<SteinerTree<V>>, RoutingError>
    where
        V: Clone + Eq + Hash + Debug + Send + Sync,
        E: EdgeAnnotation + Send + Sync,
    {
        self.validate(graph)?;
        Ok(requests
            .par_iter()
            .map(|request| approximate_steiner_tree(graph, &request.root, &request.terminals))
            .collect())
    }
}
