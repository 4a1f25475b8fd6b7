//! Graph algorithms.
//!
//! The algorithms are generic over the traits in [`core`](crate::core) and
//! are also exposed as methods on [`DirectedGraph`](crate::DirectedGraph) and
//! [`UndirectedGraph`](crate::UndirectedGraph).

pub mod connected_components;
pub mod cycle;
pub mod shortest_paths;

pub use connected_components::ConnectedComponents;
pub use cycle::{is_cyclic, is_cyclic_undirected, Cycle};
pub use shortest_paths::ShortestPaths;
