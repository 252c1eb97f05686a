//! The graph container.

use tracing::{debug, trace};

use crate::cursor::EdgeCursor;
use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::iter::Edges;
use crate::storage::NodeIndex;
use crate::validate;

/// A directed graph with node values `N` and edge weights `E`.
///
/// The graph stores:
/// - every node value once, as a key of an ordered node index;
/// - for each node, its outgoing `(destination, weight)` pairs in order.
///
/// Parallel edges between the same pair of nodes are allowed as long as their
/// weights differ. Every edge destination is a stored node: edges are only
/// accepted between existing nodes and disappear with the nodes they touch.
///
/// `Clone` produces a deep, independent copy. Moving out with
/// `std::mem::take` leaves an empty graph behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N, E> {
    pub(crate) index: NodeIndex<N, E>,
    pub(crate) edge_count: usize,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            index: NodeIndex::default(),
            edge_count: 0,
        }
    }
}

impl<N, E> Graph<N, E> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate over all edges in canonical order.
    pub fn iter(&self) -> Edges<'_, N, E> {
        Edges::new(&self.index, self.edge_count)
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.index.len(),
            edges = self.edge_count,
            "clearing graph"
        );
        self.index.clear();
        self.edge_count = 0;
    }

    pub(crate) fn index(&self) -> &NodeIndex<N, E> {
        &self.index
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    /// Build a graph holding `nodes` and no edges. Duplicates are ignored.
    pub fn from_nodes<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        nodes.into_iter().collect()
    }

    // ------------------------------------------------------------------
    // Modifiers
    // ------------------------------------------------------------------

    /// Add `value` as a node without edges.
    ///
    /// Returns false if an equal node is already stored.
    pub fn insert_node(&mut self, value: N) -> bool {
        self.index.insert(value)
    }

    /// Add the edge `src -> dst` with `weight`.
    ///
    /// Returns `Ok(false)` if the identical edge already exists. Fails with
    /// [`GraphError::MissingNode`] when `src` or `dst` is not a node.
    pub fn insert_edge(&mut self, src: &N, dst: &N, weight: E) -> GraphResult<bool> {
        self.require_nodes("Graph::insert_edge", &[src, dst])?;
        let inserted = match self.index.get_mut(src) {
            Some(edges) => edges.insert(dst.clone(), weight),
            None => return Err(GraphError::missing("Graph::insert_edge")),
        };
        if inserted {
            self.edge_count += 1;
        }
        trace!(inserted, "insert_edge");
        Ok(inserted)
    }

    /// Rename node `old` to `new`, keeping all of its incoming and outgoing
    /// edges.
    ///
    /// Returns `Ok(false)` without touching the graph if `new` is already a
    /// node. Fails with [`GraphError::MissingNode`] when `old` is not a node.
    pub fn replace_node(&mut self, old: &N, new: N) -> GraphResult<bool> {
        self.require_nodes("Graph::replace_node", &[old])?;
        if self.index.contains(&new) {
            return Ok(false);
        }

        self.index.rename(old, new.clone());

        // Edges hold destinations by value: patch every one that names `old`.
        let mut patched = 0_usize;
        for edges in self.index.edge_sets_mut() {
            if edges.has_target(old) {
                edges.rename_target(old, new.clone());
                patched += 1;
            }
        }
        debug!(patched_edge_sets = patched, "replaced node");
        self.debug_check();
        Ok(true)
    }

    /// Fold node `old` into node `new`, then erase `old`.
    ///
    /// Every edge incident to `old` is re-created on `new` (`old -> x`
    /// becomes `new -> x`, `x -> old` becomes `x -> new`, self-loops stay
    /// self-loops). Edges that already exist on `new` are kept once. Merging
    /// a node into itself is a no-op. Fails with [`GraphError::MissingNode`]
    /// when either node is absent.
    pub fn merge_replace_node(&mut self, old: &N, new: &N) -> GraphResult<()> {
        self.require_nodes("Graph::merge_replace_node", &[old, new])?;
        if old == new {
            return Ok(());
        }

        let mut rewired = Vec::new();
        for edge in self.iter() {
            if edge.from == old {
                let to = if edge.to == old { new } else { edge.to };
                rewired.push(Edge::new(new.clone(), to.clone(), edge.weight.clone()));
            } else if edge.to == old {
                rewired.push(Edge::new(edge.from.clone(), new.clone(), edge.weight.clone()));
            }
        }

        let mut added = 0_usize;
        for edge in rewired {
            if self.insert_edge(&edge.from, &edge.to, edge.weight)? {
                added += 1;
            }
        }
        self.erase_node(old);
        debug!(edges_added = added, "merged node");
        self.debug_check();
        Ok(())
    }

    /// Remove `value` together with its outgoing edges and every edge
    /// pointing at it.
    ///
    /// Returns false if `value` was not a node.
    pub fn erase_node(&mut self, value: &N) -> bool {
        let Some(outgoing) = self.index.remove(value) else {
            return false;
        };
        let mut removed = outgoing.len();
        for edges in self.index.edge_sets_mut() {
            removed += edges.remove_target(value);
        }
        self.edge_count -= removed;
        debug!(edges_removed = removed, "erased node");
        true
    }

    /// Remove the edge `src -> dst` with `weight`.
    ///
    /// Returns `Ok(false)` if no such edge exists. Fails with
    /// [`GraphError::MissingNode`] when `src` or `dst` is not a node.
    pub fn erase_edge(&mut self, src: &N, dst: &N, weight: &E) -> GraphResult<bool> {
        self.require_nodes("Graph::erase_edge", &[src, dst])?;
        Ok(self.remove_edge(src, dst, weight))
    }

    /// Remove the edge designated by `cursor` and return a cursor at the edge
    /// that followed it.
    ///
    /// Fails with [`GraphError::EndCursor`] for the end cursor and
    /// [`GraphError::StaleCursor`] if the designated edge is not stored.
    pub fn erase_edge_at(&mut self, cursor: &EdgeCursor<N, E>) -> GraphResult<EdgeCursor<N, E>> {
        let edge = cursor.get().ok_or(GraphError::EndCursor {
            operation: "Graph::erase_edge_at",
        })?;
        if !self.remove_edge(&edge.from, &edge.to, &edge.weight) {
            return Err(GraphError::StaleCursor);
        }
        Ok(cursor.clone().next(self))
    }

    /// Remove every edge in `[first, last)` and return the cursor reached
    /// after the last removal, which equals `last`.
    ///
    /// The range is checked before anything is removed: `first` must not
    /// come after `last`, and both must be the end cursor or designate a
    /// stored edge.
    pub fn erase_edge_range(
        &mut self,
        first: EdgeCursor<N, E>,
        last: &EdgeCursor<N, E>,
    ) -> GraphResult<EdgeCursor<N, E>> {
        if first > *last {
            return Err(GraphError::InvalidRange);
        }
        for bound in [&first, last] {
            if let Some(edge) = bound.get() {
                if !self.contains_edge(&edge.from, &edge.to, &edge.weight) {
                    return Err(GraphError::StaleCursor);
                }
            }
        }

        let mut cursor = first;
        let mut removed = 0_usize;
        while cursor != *last {
            cursor = self.erase_edge_at(&cursor)?;
            removed += 1;
        }
        debug!(edges_removed = removed, "erased edge range");
        Ok(cursor)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// True if `value` is a node. Never fails.
    pub fn is_node(&self, value: &N) -> bool {
        self.index.contains(value)
    }

    /// True if at least one edge `src -> dst` exists.
    ///
    /// Fails with [`GraphError::MissingNode`] when either node is absent.
    pub fn is_connected(&self, src: &N, dst: &N) -> GraphResult<bool> {
        self.require_nodes("Graph::is_connected", &[src, dst])?;
        Ok(self
            .index
            .get(src)
            .is_some_and(|edges| edges.has_target(dst)))
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> Vec<N> {
        self.index.keys().cloned().collect()
    }

    /// Weights of every edge `src -> dst`, ascending.
    ///
    /// Fails with [`GraphError::MissingNode`] when either node is absent.
    pub fn weights(&self, src: &N, dst: &N) -> GraphResult<Vec<E>> {
        self.require_nodes("Graph::weights", &[src, dst])?;
        Ok(self
            .index
            .get(src)
            .map(|edges| edges.weights(dst).cloned().collect())
            .unwrap_or_default())
    }

    /// Distinct destinations of the outgoing edges of `src`, ascending.
    ///
    /// Fails with [`GraphError::MissingNode`] when `src` is absent.
    pub fn connections(&self, src: &N) -> GraphResult<Vec<N>> {
        let edges = self
            .index
            .get(src)
            .ok_or(GraphError::missing("Graph::connections"))?;
        Ok(edges.targets().cloned().collect())
    }

    /// True if the edge `src -> dst` with `weight` is stored. Never fails.
    pub fn contains_edge(&self, src: &N, dst: &N, weight: &E) -> bool {
        self.index
            .get(src)
            .is_some_and(|edges| edges.contains(dst, weight))
    }

    /// Cursor at the edge `src -> dst` with `weight`, or the end cursor if
    /// there is no such edge. Never fails.
    pub fn find(&self, src: &N, dst: &N, weight: &E) -> EdgeCursor<N, E> {
        if self.contains_edge(src, dst, weight) {
            EdgeCursor::at(Edge::new(src.clone(), dst.clone(), weight.clone()))
        } else {
            EdgeCursor::end()
        }
    }

    /// Re-check the structural invariants: every edge destination is a
    /// node, no edge set keeps an empty destination bucket, and the cached
    /// edge count is exact.
    ///
    /// The mutating operations keep these by construction; this is for tests
    /// and for callers that want to assert it.
    pub fn validate(&self) -> GraphResult<()> {
        validate::check_invariants(self)
    }

    // ------------------------------------------------------------------
    // Cursor access
    // ------------------------------------------------------------------

    /// Cursor at the first edge in canonical order, or the end cursor if the
    /// graph has no edges.
    pub fn begin(&self) -> EdgeCursor<N, E> {
        EdgeCursor::first(self)
    }

    /// The one-past-the-last cursor.
    pub fn end(&self) -> EdgeCursor<N, E> {
        EdgeCursor::end()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn require_nodes(&self, operation: &'static str, nodes: &[&N]) -> GraphResult<()> {
        if nodes.iter().all(|node| self.index.contains(node)) {
            Ok(())
        } else {
            Err(GraphError::missing(operation))
        }
    }

    fn remove_edge(&mut self, src: &N, dst: &N, weight: &E) -> bool {
        let removed = self
            .index
            .get_mut(src)
            .is_some_and(|edges| edges.remove(dst, weight));
        if removed {
            self.edge_count -= 1;
        }
        trace!(removed, "erase_edge");
        removed
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.validate(), Ok(()));
    }
}

impl<N: Ord + Clone, E: Ord + Clone> FromIterator<N> for Graph<N, E> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Extend<N> for Graph<N, E> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for node in iter {
            self.insert_node(node);
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone, const K: usize> From<[N; K]> for Graph<N, E> {
    fn from(nodes: [N; K]) -> Self {
        Self::from_nodes(nodes)
    }
}

impl<'a, N, E> IntoIterator for &'a Graph<N, E> {
    type Item = crate::edge::EdgeRef<'a, N, E>;
    type IntoIter = Edges<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
