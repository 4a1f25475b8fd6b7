//! The graph types.
//!
//! * [`DirectedGraph`] has dense integer vertices `0..n` and weighted
//!   directed edges kept in a [storage](crate::storage).
//! * [`UndirectedGraph`] has arbitrary vertex labels and unweighted
//!   undirected edges kept in an adjacency list.
//!
//! The plain mutation methods never fail. Invalid input (out of range or
//! absent vertices, self-loops, negative weights) leaves the graph unchanged
//! and is only reported in the log at `debug` level. The `try_` variants of
//! the methods return the reason as an error instead.

mod directed;
mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;
