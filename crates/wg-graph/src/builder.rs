//! Bulk graph construction.

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Builder for constructing a graph from lists of nodes and edges.
///
/// Use `add_node` / `add_nodes` and `add_edge` in any order, then call
/// `build()` to check that every edge joins declared nodes and produce the
/// `Graph`. Duplicate nodes and edges are accepted and stored once.
#[derive(Debug, Clone)]
pub struct GraphBuilder<N, E> {
    nodes: Vec<N>,
    edges: Vec<Edge<N, E>>,
}

impl<N, E> Default for GraphBuilder<N, E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> GraphBuilder<N, E> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, value: N) -> &mut Self {
        self.nodes.push(value);
        self
    }

    pub fn add_nodes<I: IntoIterator<Item = N>>(&mut self, values: I) -> &mut Self {
        self.nodes.extend(values);
        self
    }

    /// Queue the edge `from -> to`. Endpoints are checked by `build()`, so
    /// they may be declared later.
    pub fn add_edge(&mut self, from: N, to: N, weight: E) -> &mut Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Build the graph.
    ///
    /// Fails with [`GraphError::MissingNode`] if any queued edge names a
    /// node that was never added.
    pub fn build(self) -> GraphResult<Graph<N, E>> {
        let mut graph = Graph::from_nodes(self.nodes);

        // Check every endpoint before inserting anything
        let dangling = self
            .edges
            .iter()
            .any(|edge| !graph.is_node(&edge.from) || !graph.is_node(&edge.to));
        if dangling {
            return Err(GraphError::missing("GraphBuilder::build"));
        }

        for edge in self.edges {
            graph.insert_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}
