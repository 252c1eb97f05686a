//! Edge value types.

use std::fmt;

/// An owned directed edge `from -> to` carrying `weight`.
///
/// Field order matches the canonical ordering: source first, then
/// destination, then weight.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N, E> {
    pub from: N,
    pub to: N,
    pub weight: E,
}

impl<N, E> Edge<N, E> {
    pub fn new(from: N, to: N, weight: E) -> Self {
        Self { from, to, weight }
    }

    /// Borrow this edge as an [`EdgeRef`].
    pub fn as_ref(&self) -> EdgeRef<'_, N, E> {
        EdgeRef {
            from: &self.from,
            to: &self.to,
            weight: &self.weight,
        }
    }
}

/// A borrowed view of an edge stored in a graph.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EdgeRef<'a, N, E> {
    pub from: &'a N,
    pub to: &'a N,
    pub weight: &'a E,
}

// Manual impls: deriving would require `N: Clone, E: Clone`.
impl<N, E> Clone for EdgeRef<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for EdgeRef<'_, N, E> {}

impl<'a, N, E> EdgeRef<'a, N, E> {
    pub(crate) fn new(from: &'a N, to: &'a N, weight: &'a E) -> Self {
        Self { from, to, weight }
    }

    /// Copy the referenced values into an owned [`Edge`].
    pub fn cloned(self) -> Edge<N, E>
    where
        N: Clone,
        E: Clone,
    {
        Edge {
            from: self.from.clone(),
            to: self.to.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<N: Clone, E: Clone> From<EdgeRef<'_, N, E>> for Edge<N, E> {
    fn from(edge: EdgeRef<'_, N, E>) -> Self {
        edge.cloned()
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Edge<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for EdgeRef<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} | {}", self.from, self.to, self.weight)
    }
}
