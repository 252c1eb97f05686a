//! Integration tests for wg-graph.

use std::collections::BTreeSet;

use wg_graph::{EdgeCursor, Graph, GraphError};

fn triples<N: Clone, E: Clone>(g: &Graph<N, E>) -> Vec<(N, N, E)> {
    g.iter()
        .map(|e| (e.from.clone(), e.to.clone(), e.weight.clone()))
        .collect()
}

/// The seven-node example graph used for the text form.
fn numbers() -> Graph<i32, i32> {
    let mut g = Graph::from_nodes([4, 2, 6, 64, 1, 5, 3]);
    let edges = [
        (4, 1, -4),
        (3, 2, 2),
        (2, 4, 2),
        (2, 1, 1),
        (6, 2, 5),
        (6, 3, 10),
        (1, 5, -1),
        (3, 6, -8),
        (4, 5, 3),
        (5, 2, 7),
    ];
    for (from, to, weight) in edges {
        assert!(g.insert_edge(&from, &to, weight).unwrap());
    }
    g
}

#[test]
fn default_graph_is_empty() {
    let g: Graph<i32, String> = Graph::new();
    assert!(g.is_empty());
    assert!(g.nodes().is_empty());
    assert_eq!(g.begin(), g.end());
}

#[test]
fn construct_from_node_lists() {
    let g: Graph<i32, String> = Graph::from([1, 2, 3, 4, 5]);
    assert!(!g.is_empty());
    assert_eq!(g.nodes(), vec![1, 2, 3, 4, 5]);

    let from_vec: Graph<i32, i32> = vec![3, 1, 2, 3].into_iter().collect();
    assert_eq!(from_vec.nodes(), vec![1, 2, 3]);

    let set: BTreeSet<i32> = [1, 2, 3].into();
    let from_set: Graph<i32, i32> = Graph::from_nodes(set);
    assert_eq!(from_set, from_vec);
}

#[test]
fn nodes_are_strictly_ascending() {
    let g = numbers();
    let nodes = g.nodes();
    assert!(nodes.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(nodes, vec![1, 2, 3, 4, 5, 6, 64]);
}

#[test]
fn iteration_is_sorted_by_source_destination_weight() {
    let g = numbers();
    let edges = triples(&g);
    assert_eq!(edges.len(), 10);
    assert!(edges.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(edges.first(), Some(&(1, 5, -1)));
    assert_eq!(edges.last(), Some(&(6, 3, 10)));
}

#[test]
fn text_form_groups_edges_by_node() {
    let expected = "\
1 (
  5 | -1
)
2 (
  1 | 1
  4 | 2
)
3 (
  2 | 2
  6 | -8
)
4 (
  1 | -4
  5 | 3
)
5 (
  2 | 7
)
6 (
  2 | 5
  3 | 10
)
64 (
)
";
    assert_eq!(numbers().to_string(), expected);
}

#[test]
fn clone_is_equal_and_independent() {
    let original = numbers();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.erase_node(&2);
    copy.insert_edge(&64, &64, 0).unwrap();
    assert_ne!(copy, original);
    assert!(original.is_node(&2));
    assert!(!original.contains_edge(&64, &64, &0));
}

#[test]
fn move_out_empties_source_and_keeps_cursors() {
    let mut g1: Graph<i32, i32> = Graph::from([1, 2]);
    g1.insert_edge(&1, &2, 1).unwrap();
    let snapshot = g1.clone();
    let cursor = g1.begin();

    let g2 = std::mem::take(&mut g1);
    assert_eq!(g2, snapshot);
    assert!(g1.is_empty());

    let edge = cursor.get().expect("cursor designates an edge");
    assert!(!g1.is_node(&edge.from));
    assert!(!g1.is_node(&edge.to));
    assert!(g2.is_connected(&edge.from, &edge.to).unwrap());
    assert_eq!(g2.find(&edge.from, &edge.to, &edge.weight), cursor);
}

#[test]
fn repeated_inserts_are_rejected() {
    let mut g: Graph<&str, u32> = Graph::new();
    assert!(g.insert_node("a"));
    assert!(!g.insert_node("a"));
    assert_eq!(g.node_count(), 1);

    assert!(g.insert_edge(&"a", &"a", 1).unwrap());
    assert!(!g.insert_edge(&"a", &"a", 1).unwrap());
    assert!(g.insert_edge(&"a", &"a", 2).unwrap());
    assert_eq!(g.weights(&"a", &"a").unwrap(), vec![1, 2]);
}

#[test]
fn merge_collapses_duplicates() {
    let mut g: Graph<&str, i32> = Graph::from(["a", "b", "c", "d"]);
    g.insert_edge(&"a", &"b", 1).unwrap();
    g.insert_edge(&"a", &"c", 2).unwrap();
    g.insert_edge(&"a", &"d", 3).unwrap();
    g.insert_edge(&"b", &"b", 1).unwrap();

    g.merge_replace_node(&"a", &"b").unwrap();

    assert!(!g.is_node(&"a"));
    assert_eq!(
        triples(&g),
        vec![("b", "b", 1), ("b", "c", 2), ("b", "d", 3)]
    );
}

#[test]
fn merge_requires_both_nodes() {
    let mut g: Graph<&str, i32> = Graph::from(["a"]);
    assert_eq!(
        g.merge_replace_node(&"a", &"z"),
        Err(GraphError::MissingNode {
            operation: "Graph::merge_replace_node"
        })
    );
    assert!(g.is_node(&"a"));
}

#[test]
fn replace_node_renames_everywhere() {
    let mut g: Graph<String, i32> = Graph::from(["x".to_string(), "y".to_string()]);
    g.insert_edge(&"x".into(), &"y".into(), 1).unwrap();
    g.insert_edge(&"y".into(), &"x".into(), 2).unwrap();
    g.insert_edge(&"x".into(), &"x".into(), 3).unwrap();

    assert!(g.replace_node(&"x".into(), "z".into()).unwrap());

    assert_eq!(g.nodes(), vec!["y".to_string(), "z".to_string()]);
    assert_eq!(g.connections(&"z".into()).unwrap(), vec!["y", "z"]);
    assert_eq!(g.weights(&"y".into(), &"z".into()).unwrap(), vec![2]);
    assert_eq!(g.weights(&"z".into(), &"z".into()).unwrap(), vec![3]);
}

#[test]
fn erase_node_cascades_to_incoming_edges() {
    let mut g = numbers();
    assert!(g.erase_node(&2));

    assert!(!g.is_node(&2));
    assert!(triples(&g).iter().all(|(from, to, _)| *from != 2 && *to != 2));
    assert_eq!(
        g.is_connected(&2, &1),
        Err(GraphError::MissingNode {
            operation: "Graph::is_connected"
        })
    );
    assert_eq!(g.edge_count(), 5);
}

#[test]
fn accessors_report_sorted_results() {
    let mut g = numbers();
    g.insert_edge(&2, &1, -3).unwrap();
    assert!(g.is_connected(&2, &1).unwrap());
    assert!(!g.is_connected(&1, &2).unwrap());
    assert_eq!(g.weights(&2, &1).unwrap(), vec![-3, 1]);
    assert_eq!(g.weights(&1, &2).unwrap(), Vec::<i32>::new());
    assert_eq!(g.connections(&2).unwrap(), vec![1, 4]);
    assert_eq!(g.connections(&64).unwrap(), Vec::<i32>::new());
}

#[test]
fn find_returns_cursor_or_end() {
    let g = numbers();
    let cursor = g.find(&3, &6, &-8);
    let edge = cursor.get().unwrap();
    assert_eq!((edge.from, edge.to, edge.weight), (3, 6, -8));
    assert!(g.find(&3, &6, &8).is_end());
    assert!(g.find(&99, &6, &8).is_end());
}

#[test]
fn erase_edge_at_drains_to_end() {
    let mut g = numbers();
    let expected = triples(&g);
    let mut seen = Vec::new();

    let mut cursor = g.begin();
    while let Some(edge) = cursor.get() {
        seen.push((edge.from, edge.to, edge.weight));
        let next = g.erase_edge_at(&cursor).unwrap();
        // The continuation is the next triple of the original order
        if let Some(next_edge) = next.get() {
            let position = seen.len();
            assert_eq!(
                (next_edge.from, next_edge.to, next_edge.weight),
                expected[position]
            );
        }
        cursor = next;
    }

    assert_eq!(cursor, g.end());
    assert_eq!(seen, expected);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.node_count(), 7);
}

#[test]
fn erase_edge_range_removes_half_open_range() {
    let mut g = numbers();
    let first = g.find(&2, &1, &1);
    let last = g.find(&4, &5, &3);

    let returned = g.erase_edge_range(first, &last).unwrap();

    assert_eq!(returned, last);
    assert_eq!(
        triples(&g),
        vec![(1, 5, -1), (4, 5, 3), (5, 2, 7), (6, 2, 5), (6, 3, 10)]
    );
}

#[test]
fn erase_edge_range_to_end_and_empty_range() {
    let mut g = numbers();
    let end = g.end();
    let start = g.find(&5, &2, &7);

    // Empty range: nothing happens
    let same = g.erase_edge_range(start.clone(), &start).unwrap();
    assert_eq!(same, start);
    assert_eq!(g.edge_count(), 10);

    let returned = g.erase_edge_range(start, &end).unwrap();
    assert!(returned.is_end());
    assert_eq!(g.edge_count(), 7);
    assert_eq!(triples(&g).last(), Some(&(4, 5, 3)));
}

#[test]
fn erase_edge_range_rejects_stale_bounds() {
    let mut g = numbers();
    let last = g.find(&6, &2, &5);
    g.erase_edge(&6, &2, &5).unwrap();
    let before = g.clone();

    assert_eq!(
        g.erase_edge_range(g.begin(), &last),
        Err(GraphError::StaleCursor)
    );
    assert_eq!(g, before);
}

#[test]
fn cursors_step_over_interleaved_empty_nodes() {
    // Only 2, 4 and 6 have outgoing edges.
    let mut g: Graph<u8, u8> = Graph::from_nodes(1..=7);
    g.insert_edge(&2, &1, 1).unwrap();
    g.insert_edge(&4, &7, 2).unwrap();
    g.insert_edge(&4, &7, 3).unwrap();
    g.insert_edge(&6, &6, 4).unwrap();

    let mut cursor = g.begin();
    let mut forward = Vec::new();
    while let Some(edge) = cursor.get() {
        forward.push(edge.weight);
        cursor.move_next(&g);
    }
    assert_eq!(forward, vec![1, 2, 3, 4]);

    let mut backward = Vec::new();
    while cursor.move_prev(&g) {
        backward.push(cursor.get().map(|edge| edge.weight));
    }
    assert_eq!(backward, vec![Some(4), Some(3), Some(2), Some(1)]);
    assert_eq!(cursor, g.begin());

    let reversed: Vec<u8> = g.iter().rev().map(|edge| *edge.weight).collect();
    assert_eq!(reversed, vec![4, 3, 2, 1]);
}

#[test]
fn precondition_errors_leave_graph_untouched() {
    let mut g = numbers();
    let before = g.clone();

    assert!(g.insert_edge(&1, &100, 0).is_err());
    assert!(g.erase_edge(&100, &1, &0).is_err());
    assert!(g.replace_node(&100, 101).is_err());
    assert!(g.merge_replace_node(&100, &1).is_err());
    assert!(g.erase_edge_at(&EdgeCursor::end()).is_err());

    assert_eq!(g, before);
}

#[test]
fn clear_then_reuse() {
    let mut g = numbers();
    g.clear();
    assert!(g.is_empty());
    assert_eq!(g.to_string(), "");
    assert!(g.insert_node(1));
    assert!(g.insert_edge(&1, &1, 1).unwrap());
    assert_eq!(g.to_string(), "1 (\n  1 | 1\n)\n");
}

#[test]
fn read_only_surface_works_with_unordered_weights() {
    let mut g: Graph<u8, f64> = Graph::new();
    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.iter().count(), 0);
    assert!(g.iter().next_back().is_none());
    assert_eq!(g.to_string(), "");
    g.clear();
    assert!(g.is_empty());
}
