//! Traits describing graph capabilities, shared error types and edge weights.
//!
//! The algorithms in [`algo`](crate::algo) and the traversals in
//! [`visit`](crate::visit) are written against these traits instead of the
//! concrete graph types, so that both [`DirectedGraph`](crate::DirectedGraph)
//! and [`UndirectedGraph`](crate::UndirectedGraph) share one implementation.

pub mod error;
pub mod weight;

mod base;
mod storage;

pub use base::*;
pub use error::{AddEdgeError, AddEdgeErrorKind, RemoveEdgeError, RemoveEdgeErrorKind};
pub use storage::*;
pub use weight::Weight;
