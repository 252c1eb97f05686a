//! Resumable, bidirectional positions in canonical edge order.
//!
//! An [`EdgeCursor`] records the edge it designates by value instead of
//! borrowing the graph. Movement asks the graph for the neighbouring edge of
//! that position, so a cursor stays meaningful across mutations (including
//! erasure of the very edge it designates) and across moves of the graph.

use crate::edge::{Edge, EdgeRef};
use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Position<N, E> {
    At(Edge<N, E>),
    End,
}

/// A position in a graph's canonical edge sequence: either at an edge or
/// one past the last edge.
///
/// Two cursors are equal when both are at the end or both designate the
/// same `(from, to, weight)` triple. Cursors order like their positions, with
/// the end cursor after every edge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeCursor<N, E> {
    position: Position<N, E>,
}

impl<N, E> Default for EdgeCursor<N, E> {
    fn default() -> Self {
        Self::end()
    }
}

impl<N, E> EdgeCursor<N, E> {
    /// The one-past-the-last position.
    pub fn end() -> Self {
        Self {
            position: Position::End,
        }
    }

    pub(crate) fn at(edge: Edge<N, E>) -> Self {
        Self {
            position: Position::At(edge),
        }
    }

    fn from_ref(edge: Option<EdgeRef<'_, N, E>>) -> Self
    where
        N: Clone,
        E: Clone,
    {
        edge.map_or_else(Self::end, |edge| Self::at(edge.cloned()))
    }

    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    /// The designated `(from, to, weight)` triple, or `None` at the end.
    pub fn get(&self) -> Option<&Edge<N, E>> {
        match &self.position {
            Position::At(edge) => Some(edge),
            Position::End => None,
        }
    }

    pub fn into_edge(self) -> Option<Edge<N, E>> {
        match self.position {
            Position::At(edge) => Some(edge),
            Position::End => None,
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> EdgeCursor<N, E> {
    /// Cursor at the first edge of `graph`, or the end cursor.
    pub(crate) fn first(graph: &Graph<N, E>) -> Self {
        Self::from_ref(graph.index().first_edge())
    }

    /// Advance to the next edge of `graph`.
    ///
    /// Returns whether the cursor now designates an edge. Stepping past the
    /// last edge lands on the end cursor, which stays put.
    pub fn move_next(&mut self, graph: &Graph<N, E>) -> bool {
        let next = match &self.position {
            Position::End => return false,
            Position::At(edge) => graph.index().edge_after(&edge.from, &edge.to, &edge.weight),
        };
        *self = Self::from_ref(next);
        !self.is_end()
    }

    /// Step back to the previous edge of `graph`.
    ///
    /// From the end cursor this lands on the last edge. Returns false and
    /// leaves the cursor unchanged when there is no previous edge.
    pub fn move_prev(&mut self, graph: &Graph<N, E>) -> bool {
        let prev = match &self.position {
            Position::End => graph.index().last_edge(),
            Position::At(edge) => graph.index().edge_before(&edge.from, &edge.to, &edge.weight),
        };
        match prev {
            Some(edge) => {
                self.position = Position::At(edge.cloned());
                true
            }
            None => false,
        }
    }

    /// Consuming form of [`move_next`](Self::move_next).
    pub fn next(mut self, graph: &Graph<N, E>) -> Self {
        self.move_next(graph);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph<char, u8> {
        let mut g = Graph::from_nodes(['a', 'b', 'c', 'd']);
        g.insert_edge(&'b', &'a', 1).unwrap();
        g.insert_edge(&'b', &'a', 2).unwrap();
        g.insert_edge(&'d', &'c', 3).unwrap();
        g
    }

    fn weight(cursor: &EdgeCursor<char, u8>) -> Option<u8> {
        cursor.get().map(|edge| edge.weight)
    }

    #[test]
    fn walks_forward_to_end_and_stays() {
        let g = graph();
        let mut cursor = g.begin();
        let mut seen = Vec::new();
        while !cursor.is_end() {
            seen.extend(weight(&cursor));
            cursor.move_next(&g);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(!cursor.move_next(&g));
        assert_eq!(cursor, g.end());
    }

    #[test]
    fn move_next_reports_landing_on_an_edge() {
        let g = graph();
        let mut cursor = g.begin();
        assert!(cursor.move_next(&g));
        assert_eq!(weight(&cursor), Some(2));
        assert!(cursor.move_next(&g));
        assert_eq!(weight(&cursor), Some(3));
        assert!(!cursor.move_next(&g));
        assert!(cursor.is_end());
    }

    #[test]
    fn walks_backward_from_end() {
        let g = graph();
        let mut cursor = g.end();
        let mut seen = Vec::new();
        while cursor.move_prev(&g) {
            seen.extend(weight(&cursor));
        }
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(cursor, g.begin());
    }

    #[test]
    fn end_cursor_orders_after_every_edge() {
        let g = graph();
        assert!(g.begin() < g.end());
        assert!(g.begin() < g.begin().next(&g));
        assert_eq!(EdgeCursor::<char, u8>::default(), g.end());
    }

    #[test]
    fn cursor_survives_erasure_of_its_edge() {
        let mut g = graph();
        let cursor = g.find(&'b', &'a', &2);
        assert!(g.erase_edge(&'b', &'a', &2).unwrap());
        assert_eq!(weight(&cursor), Some(2));
        assert_eq!(weight(&cursor.clone().next(&g)), Some(3));

        let mut back = cursor;
        assert!(back.move_prev(&g));
        assert_eq!(weight(&back), Some(1));
    }

    #[test]
    fn empty_graph_begin_is_end() {
        let g: Graph<char, u8> = Graph::from_nodes(['x']);
        assert!(g.begin().is_end());
        let mut cursor = g.end();
        assert!(!cursor.move_prev(&g));
        assert!(cursor.is_end());
    }
}
