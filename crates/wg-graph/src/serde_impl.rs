//! Serde support, enabled by the `serde` feature.
//!
//! A graph serializes as
//!
//! ```text
//! { "nodes": [..], "edges": [{ "from": .., "to": .., "weight": .. }, ..] }
//! ```
//!
//! with nodes and edges in canonical order. Deserialization goes through
//! [`GraphBuilder`], so edges naming undeclared nodes are rejected.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::builder::GraphBuilder;
use crate::edge::{Edge, EdgeRef};
use crate::graph::Graph;

impl<N: Serialize, E: Serialize> Serialize for Graph<N, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nodes: Vec<&N> = self.index.keys().collect();
        let edges: Vec<EdgeRef<'_, N, E>> = self.iter().collect();

        let mut state = serializer.serialize_struct("Graph", 2)?;
        state.serialize_field("nodes", &nodes)?;
        state.serialize_field("edges", &edges)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "Graph")]
struct GraphRepr<N, E> {
    nodes: Vec<N>,
    #[serde(default = "Vec::new")]
    edges: Vec<Edge<N, E>>,
}

impl<'de, N, E> Deserialize<'de> for Graph<N, E>
where
    N: Deserialize<'de> + Ord + Clone,
    E: Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GraphRepr::<N, E>::deserialize(deserializer)?;

        let mut builder = GraphBuilder::new();
        builder.add_nodes(repr.nodes);
        for edge in repr.edges {
            builder.add_edge(edge.from, edge.to, edge.weight);
        }
        builder.build().map_err(D::Error::custom)
    }
}
