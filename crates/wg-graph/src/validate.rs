//! Structural invariant checks.

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Verify the invariants the mutating operations maintain:
/// - every edge destination is a stored node;
/// - no edge set keeps an empty destination bucket;
/// - per-set and whole-graph edge counts match the stored pairs.
pub(crate) fn check_invariants<N: Ord, E: Ord>(graph: &Graph<N, E>) -> GraphResult<()> {
    let mut total = 0_usize;

    for (_, edges) in graph.index.iter() {
        let mut stored = 0_usize;
        for (to, weights) in edges.buckets() {
            // Destinations must be nodes
            if !graph.index.contains(to) {
                return Err(invariant("edge destination is not a node"));
            }
            if weights.is_empty() {
                return Err(invariant("edge set keeps an empty destination bucket"));
            }
            stored += weights.len();
        }

        if stored != edges.len() {
            return Err(invariant("edge set length does not match its stored pairs"));
        }
        total += stored;
    }

    if total != graph.edge_count {
        return Err(invariant("graph edge count does not match its edge sets"));
    }
    Ok(())
}

fn invariant(what: &str) -> GraphError {
    GraphError::Invariant {
        what: what.to_string(),
    }
}
