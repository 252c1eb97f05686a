//! Canonical text form of a graph.
//!
//! Each node is printed in ascending order followed by a parenthesised block
//! with one `  destination | weight` line per outgoing edge:
//!
//! ```text
//! 1 (
//!   5 | -1
//! )
//! 64 (
//! )
//! ```
//!
//! An empty graph prints nothing. The output is meant for display only.

use std::fmt;

use crate::graph::Graph;

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, edges) in self.index.iter() {
            writeln!(f, "{node} (")?;
            for (to, weight) in edges.iter() {
                writeln!(f, "  {to} | {weight}")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
