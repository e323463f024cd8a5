use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};

use super::{
    edge::{DefaultEdge, Edge},
    weighted_graph::WeightedGraph,
    Weight,
};
use crate::error::RoutingError;

pub type PeerGraph = WeightedGraph<String, DefaultEdge>;

#[derive(Debug, Serialize, Deserialize)]
struct JsonEdge {
    tail: String,
    head: String,
    #[serde(default = "default_weight")]
    weight: Weight,
}

fn default_weight() -> Weight {
    DefaultEdge::default().weight
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonGraph {
    #[serde(default)]
    vertices: Vec<String>,
    edges: Vec<JsonEdge>,
}

/// Loads and stores peer graphs. The format is picked by file extension.
#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_file(path: &Path) -> Result<PeerGraph, RoutingError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_json_file(path),
            Some("bincode") => Self::from_bincode_file(path),
            Some("edges") => Self::from_edges_file(path),
            _ => Err(RoutingError::UnknownFileType(path.to_path_buf())),
        }
    }

    /// Writes `.json` or `.bincode`. Any other extension is rejected before
    /// the file is touched.
    pub fn to_file(graph: &PeerGraph, path: &Path) -> Result<(), RoutingError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => {
                let writer = BufWriter::new(File::create(path)?);
                serde_json::to_writer(writer, &Self::to_json_graph(graph))?
            }
            Some("bincode") => {
                let writer = BufWriter::new(File::create(path)?);
                bincode::serialize_into(writer, graph)?
            }
            _ => return Err(RoutingError::UnknownFileType(path.to_path_buf())),
        }
        Ok(())
    }

    pub fn from_json_file(path: &Path) -> Result<PeerGraph, RoutingError> {
        let reader = BufReader::new(File::open(path)?);
        let json_graph: JsonGraph = serde_json::from_reader(reader)?;
        Ok(Self::from_json_graph(json_graph))
    }

    pub fn from_json_str(json: &str) -> Result<PeerGraph, RoutingError> {
        let json_graph: JsonGraph = serde_json::from_str(json)?;
        Ok(Self::from_json_graph(json_graph))
    }

    pub fn from_bincode_file(path: &Path) -> Result<PeerGraph, RoutingError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    pub fn from_edges_file(path: &Path) -> Result<PeerGraph, RoutingError> {
        let reader = BufReader::new(File::open(path)?);
        Self::from_edges_reader(reader)
    }

    /// Reads `tail head weight` lines. Lines starting with `#` and blank
    /// lines are skipped.
    pub fn from_edges_reader<R: BufRead>(reader: R) -> Result<PeerGraph, RoutingError> {
        let mut graph = PeerGraph::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parse_error = |reason: &str| RoutingError::Parse {
                line: index + 1,
                reason: reason.to_string(),
            };

            let mut values = line.split_whitespace();
            let tail = values.next().ok_or_else(|| parse_error("no tail found"))?;
            let head = values.next().ok_or_else(|| parse_error("no head found"))?;
            let weight = match values.next() {
                Some(weight) => weight
                    .parse::<Weight>()
                    .map_err(|_| parse_error("unable to parse weight"))?,
                None => default_weight(),
            };
            if values.next().is_some() {
                return Err(parse_error("trailing values"));
            }

            graph.add_edge(tail.to_string(), head.to_string(), DefaultEdge::new(weight));
        }

        Ok(graph)
    }

    fn from_json_graph(json_graph: JsonGraph) -> PeerGraph {
        let mut graph = PeerGraph::from_edges(json_graph.edges.into_iter().map(|edge| {
            Edge::new(edge.tail, edge.head, DefaultEdge::new(edge.weight))
        }));
        for vertex in json_graph.vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    fn to_json_graph(graph: &PeerGraph) -> JsonGraph {
        JsonGraph {
            vertices: graph.vertices().cloned().collect(),
            edges: graph
                .all_edges()
                .into_iter()
                .map(|edge| JsonEdge {
                    tail: edge.tail,
                    head: edge.head,
                    weight: edge.annotation.weight,
                })
                .collect(),
        }
    }
}
