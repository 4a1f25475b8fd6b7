//! Two small graph data structures with the usual algorithms on top.
//!
//! * [`DirectedGraph`] stores vertices as dense integer indices and edges in
//!   an [adjacency matrix](storage::AdjMatrix) of non-negative weights. It
//!   supports traversals, cycle detection and Dijkstra's shortest paths.
//! * [`UndirectedGraph`] stores vertices as arbitrary labels in an adjacency
//!   list. It supports traversals, cycle detection and connected components.
//!
//! Invalid mutations (out of range indices, self-loops, negative weights,
//! absent vertices) are silently ignored by the plain methods and reported by
//! their `try_` counterparts.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{DirectedGraph, UndirectedGraph};
//!
//! let graph = DirectedGraph::from_edges([(0, 1, 10u32), (1, 2, 5), (0, 2, 20)]);
//! assert_eq!(graph.dijkstra(0), vec![0, 10, 15]);
//! assert_eq!(graph.dfs(0, None), vec![0, 1, 2]);
//!
//! let graph = UndirectedGraph::from_edges([("A", "B"), ("B", "C"), ("X", "Y")]);
//! assert_eq!(graph.count_connected_components(), 2);
//! assert!(!graph.has_cycle());
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;
pub mod visit;

pub use graph::{DirectedGraph, UndirectedGraph};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{EdgeWeights, GraphBase, Neighbors, Storage, VertexSet},
        visit::Visitor,
    };
}
