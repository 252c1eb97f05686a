//! wg-graph: generic directed weighted graph container.
//!
//! Provides:
//! - `Graph<N, E>`: ordered node index with per-node ordered edge sets
//! - insertion, renaming, merging and erasure of nodes and edges
//! - canonical-order edge iteration, both as a borrowing double-ended
//!   iterator (`Graph::iter`) and as resumable cursors (`EdgeCursor`)
//! - a canonical text form through `Display`
//! - `GraphBuilder` for bulk construction, and serde support behind the
//!   `serde` feature
//!
//! # Example
//!
//! ```
//! use wg_graph::Graph;
//!
//! let mut g: Graph<&str, i32> = Graph::from_nodes(["hello", "how", "are"]);
//! g.insert_edge(&"hello", &"how", 5).unwrap();
//! g.insert_edge(&"hello", &"are", 8).unwrap();
//! g.insert_edge(&"hello", &"are", 2).unwrap();
//!
//! assert_eq!(g.weights(&"hello", &"are").unwrap(), vec![2, 8]);
//! assert_eq!(g.connections(&"hello").unwrap(), vec!["are", "how"]);
//!
//! let first = g.iter().next().unwrap();
//! assert_eq!((*first.from, *first.to, *first.weight), ("hello", "are", 2));
//! ```

pub mod builder;
pub mod cursor;
pub mod edge;
pub mod error;
pub mod graph;
pub mod iter;

mod display;
mod storage;
mod validate;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use cursor::EdgeCursor;
pub use edge::{Edge, EdgeRef};
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use iter::Edges;
