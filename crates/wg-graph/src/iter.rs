//! Borrowing iterators over graph edges.
//!
//! Both iterators flatten a two-level ordered structure. Each keeps an outer
//! cursor plus a front and a back inner cursor, so it can be driven from
//! either end; inner collections that turn out to be empty are skipped by
//! pulling the next outer entry. A shared `remaining` count stops the two
//! ends from crossing.

use std::collections::{btree_map, btree_set, BTreeSet};
use std::iter::FusedIterator;

use crate::edge::EdgeRef;
use crate::storage::{EdgeSet, NodeIndex};

/// Iterator over the `(destination, weight)` pairs of one edge set.
pub(crate) struct EdgeSetIter<'a, N, E> {
    targets: btree_map::Iter<'a, N, BTreeSet<E>>,
    front: Option<(&'a N, btree_set::Iter<'a, E>)>,
    back: Option<(&'a N, btree_set::Iter<'a, E>)>,
    remaining: usize,
}

impl<'a, N, E> EdgeSetIter<'a, N, E> {
    pub(crate) fn new(targets: btree_map::Iter<'a, N, BTreeSet<E>>, len: usize) -> Self {
        Self {
            targets,
            front: None,
            back: None,
            remaining: len,
        }
    }
}

impl<'a, N, E> Iterator for EdgeSetIter<'a, N, E> {
    type Item = (&'a N, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if let Some((to, weights)) = &mut self.front {
                if let Some(weight) = weights.next() {
                    self.remaining -= 1;
                    return Some((*to, weight));
                }
            }
            match self.targets.next() {
                Some((to, weights)) => self.front = Some((to, weights.iter())),
                None => {
                    // Outer cursor exhausted: the rest lives in the back bucket.
                    let (to, weights) = self.back.as_mut()?;
                    let weight = weights.next()?;
                    self.remaining -= 1;
                    return Some((*to, weight));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N, E> DoubleEndedIterator for EdgeSetIter<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if let Some((to, weights)) = &mut self.back {
                if let Some(weight) = weights.next_back() {
                    self.remaining -= 1;
                    return Some((*to, weight));
                }
            }
            match self.targets.next_back() {
                Some((to, weights)) => self.back = Some((to, weights.iter())),
                None => {
                    let (to, weights) = self.front.as_mut()?;
                    let weight = weights.next_back()?;
                    self.remaining -= 1;
                    return Some((*to, weight));
                }
            }
        }
    }
}

/// Iterator over every edge of a graph in canonical order.
///
/// Created by [`Graph::iter`](crate::Graph::iter). Yields [`EdgeRef`]s
/// ordered by source, then destination, then weight. Nodes without outgoing
/// edges are skipped transparently in both directions.
pub struct Edges<'a, N, E> {
    nodes: btree_map::Iter<'a, N, EdgeSet<N, E>>,
    front: Option<(&'a N, EdgeSetIter<'a, N, E>)>,
    back: Option<(&'a N, EdgeSetIter<'a, N, E>)>,
    remaining: usize,
}

impl<'a, N, E> Edges<'a, N, E> {
    pub(crate) fn new(index: &'a NodeIndex<N, E>, edge_count: usize) -> Self {
        Self {
            nodes: index.iter(),
            front: None,
            back: None,
            remaining: edge_count,
        }
    }
}

impl<'a, N, E> Iterator for Edges<'a, N, E> {
    type Item = EdgeRef<'a, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if let Some((from, edges)) = &mut self.front {
                if let Some((to, weight)) = edges.next() {
                    self.remaining -= 1;
                    return Some(EdgeRef::new(*from, to, weight));
                }
            }
            match self.nodes.next() {
                Some((from, edges)) => self.front = Some((from, edges.iter())),
                None => {
                    let (from, edges) = self.back.as_mut()?;
                    let (to, weight) = edges.next()?;
                    self.remaining -= 1;
                    return Some(EdgeRef::new(*from, to, weight));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N, E> DoubleEndedIterator for Edges<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if let Some((from, edges)) = &mut self.back {
                if let Some((to, weight)) = edges.next_back() {
                    self.remaining -= 1;
                    return Some(EdgeRef::new(*from, to, weight));
                }
            }
            match self.nodes.next_back() {
                Some((from, edges)) => self.back = Some((from, edges.iter())),
                None => {
                    let (from, edges) = self.front.as_mut()?;
                    let (to, weight) = edges.next_back()?;
                    self.remaining -= 1;
                    return Some(EdgeRef::new(*from, to, weight));
                }
            }
        }
    }
}

impl<N, E> ExactSizeIterator for Edges<'_, N, E> {}

impl<N, E> FusedIterator for Edges<'_, N, E> {}
