//! Ordered storage for nodes and their outgoing edges.
//!
//! `NodeIndex` maps each node value to its `EdgeSet`. An edge set keeps its
//! `(destination, weight)` pairs grouped by destination so that per-destination
//! queries (`weights`, `is_connected`, renames) stay logarithmic. Neither type
//! reports errors: absence is signalled through `bool` / `Option` returns.

use std::collections::btree_map::{self, BTreeMap, Entry};
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use crate::edge::EdgeRef;
use crate::iter::EdgeSetIter;

/// Outgoing edges of a single node, ordered by `(destination, weight)`.
///
/// Destinations with no remaining weights are dropped eagerly, so every
/// bucket in `targets` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EdgeSet<N, E> {
    targets: BTreeMap<N, BTreeSet<E>>,
    len: usize,
}

impl<N, E> Default for EdgeSet<N, E> {
    fn default() -> Self {
        Self {
            targets: BTreeMap::new(),
            len: 0,
        }
    }
}

impl<N, E> EdgeSet<N, E> {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Ascending iteration over `(destination, weight)` pairs.
    pub(crate) fn iter(&self) -> EdgeSetIter<'_, N, E> {
        EdgeSetIter::new(self.targets.iter(), self.len)
    }

    /// Distinct destinations, ascending.
    pub(crate) fn targets(&self) -> btree_map::Keys<'_, N, BTreeSet<E>> {
        self.targets.keys()
    }

    pub(crate) fn buckets(&self) -> btree_map::Iter<'_, N, BTreeSet<E>> {
        self.targets.iter()
    }

    pub(crate) fn first(&self) -> Option<(&N, &E)> {
        let (to, weights) = self.targets.iter().next()?;
        weights.iter().next().map(|weight| (to, weight))
    }

    pub(crate) fn last(&self) -> Option<(&N, &E)> {
        let (to, weights) = self.targets.iter().next_back()?;
        weights.iter().next_back().map(|weight| (to, weight))
    }
}

impl<N: Ord, E: Ord> EdgeSet<N, E> {
    /// Insert `(to, weight)`; false if the pair is already present.
    pub(crate) fn insert(&mut self, to: N, weight: E) -> bool {
        let inserted = self.targets.entry(to).or_default().insert(weight);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove `(to, weight)`; false if the pair is absent.
    pub(crate) fn remove(&mut self, to: &N, weight: &E) -> bool {
        let Some(weights) = self.targets.get_mut(to) else {
            return false;
        };
        if !weights.remove(weight) {
            return false;
        }
        if weights.is_empty() {
            self.targets.remove(to);
        }
        self.len -= 1;
        true
    }

    pub(crate) fn contains(&self, to: &N, weight: &E) -> bool {
        self.targets
            .get(to)
            .is_some_and(|weights| weights.contains(weight))
    }

    pub(crate) fn has_target(&self, to: &N) -> bool {
        self.targets.contains_key(to)
    }

    /// Weights of all edges towards `to`, ascending.
    pub(crate) fn weights(&self, to: &N) -> impl Iterator<Item = &E> {
        self.targets.get(to).into_iter().flatten()
    }

    /// Drop every edge towards `to` and return how many were removed.
    pub(crate) fn remove_target(&mut self, to: &N) -> usize {
        let removed = self.targets.remove(to).map_or(0, |weights| weights.len());
        self.len -= removed;
        removed
    }

    /// Move every edge towards `old` so it points at `new` instead.
    ///
    /// Pairs that would collide with an existing `(new, weight)` collapse
    /// into one.
    pub(crate) fn rename_target(&mut self, old: &N, new: N) {
        let Some(weights) = self.targets.remove(old) else {
            return;
        };
        let moved = weights.len();
        let bucket = self.targets.entry(new).or_default();
        let before = bucket.len();
        bucket.extend(weights);
        let kept = bucket.len() - before;
        self.len -= moved - kept;
    }

    /// The first pair strictly after `(to, weight)`.
    ///
    /// `(to, weight)` itself need not be stored.
    pub(crate) fn after(&self, to: &N, weight: &E) -> Option<(&N, &E)> {
        if let Some((key, weights)) = self.targets.get_key_value(to) {
            if let Some(next) = weights.range::<E, _>((Excluded(weight), Unbounded)).next() {
                return Some((key, next));
            }
        }
        let (key, weights) = self
            .targets
            .range::<N, _>((Excluded(to), Unbounded))
            .next()?;
        weights.first().map(|first| (key, first))
    }

    /// The last pair strictly before `(to, weight)`.
    pub(crate) fn before(&self, to: &N, weight: &E) -> Option<(&N, &E)> {
        if let Some((key, weights)) = self.targets.get_key_value(to) {
            if let Some(prev) = weights
                .range::<E, _>((Unbounded, Excluded(weight)))
                .next_back()
            {
                return Some((key, prev));
            }
        }
        let (key, weights) = self
            .targets
            .range::<N, _>((Unbounded, Excluded(to)))
            .next_back()?;
        weights.last().map(|last| (key, last))
    }
}

/// Ordered mapping from node value to its outgoing edge set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeIndex<N, E> {
    nodes: BTreeMap<N, EdgeSet<N, E>>,
}

impl<N, E> Default for NodeIndex<N, E> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }
}

impl<N, E> NodeIndex<N, E> {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn keys(&self) -> btree_map::Keys<'_, N, EdgeSet<N, E>> {
        self.nodes.keys()
    }

    pub(crate) fn iter(&self) -> btree_map::Iter<'_, N, EdgeSet<N, E>> {
        self.nodes.iter()
    }

    pub(crate) fn edge_sets_mut(&mut self) -> btree_map::ValuesMut<'_, N, EdgeSet<N, E>> {
        self.nodes.values_mut()
    }

    /// First edge in canonical order, skipping nodes without edges.
    pub(crate) fn first_edge(&self) -> Option<EdgeRef<'_, N, E>> {
        self.nodes.iter().find_map(|(from, edges)| {
            edges
                .first()
                .map(|(to, weight)| EdgeRef::new(from, to, weight))
        })
    }

    /// Last edge in canonical order, skipping nodes without edges.
    pub(crate) fn last_edge(&self) -> Option<EdgeRef<'_, N, E>> {
        self.nodes.iter().rev().find_map(|(from, edges)| {
            edges
                .last()
                .map(|(to, weight)| EdgeRef::new(from, to, weight))
        })
    }
}

impl<N: Ord, E: Ord> NodeIndex<N, E> {
    pub(crate) fn contains(&self, value: &N) -> bool {
        self.nodes.contains_key(value)
    }

    /// Add `value` with an empty edge set; false if already present.
    pub(crate) fn insert(&mut self, value: N) -> bool {
        match self.nodes.entry(value) {
            Entry::Vacant(slot) => {
                slot.insert(EdgeSet::default());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Remove `value` and hand back its outgoing edges.
    pub(crate) fn remove(&mut self, value: &N) -> Option<EdgeSet<N, E>> {
        self.nodes.remove(value)
    }

    /// Re-key the edge set of `old` under `new`.
    ///
    /// The caller guarantees `new` is not already a key.
    pub(crate) fn rename(&mut self, old: &N, new: N) {
        if let Some(edges) = self.nodes.remove(old) {
            debug_assert!(!self.nodes.contains_key(&new));
            self.nodes.insert(new, edges);
        }
    }

    pub(crate) fn get(&self, value: &N) -> Option<&EdgeSet<N, E>> {
        self.nodes.get(value)
    }

    pub(crate) fn get_mut(&mut self, value: &N) -> Option<&mut EdgeSet<N, E>> {
        self.nodes.get_mut(value)
    }

    /// The edge following position `(from, to, weight)` in canonical order.
    ///
    /// The position does not have to be stored, which keeps cursors usable
    /// after the edge they designate has been erased.
    pub(crate) fn edge_after(&self, from: &N, to: &N, weight: &E) -> Option<EdgeRef<'_, N, E>> {
        if let Some((key, edges)) = self.nodes.get_key_value(from) {
            if let Some((to, weight)) = edges.after(to, weight) {
                return Some(EdgeRef::new(key, to, weight));
            }
        }
        self.nodes
            .range::<N, _>((Excluded(from), Unbounded))
            .find_map(|(from, edges)| {
                edges
                    .first()
                    .map(|(to, weight)| EdgeRef::new(from, to, weight))
            })
    }

    /// The edge preceding position `(from, to, weight)` in canonical order.
    pub(crate) fn edge_before(&self, from: &N, to: &N, weight: &E) -> Option<EdgeRef<'_, N, E>> {
        if let Some((key, edges)) = self.nodes.get_key_value(from) {
            if let Some((to, weight)) = edges.before(to, weight) {
                return Some(EdgeRef::new(key, to, weight));
            }
        }
        self.nodes
            .range::<N, _>((Unbounded, Excluded(from)))
            .rev()
            .find_map(|(from, edges)| {
                edges
                    .last()
                    .map(|(to, weight)| EdgeRef::new(from, to, weight))
            })
    }
}
