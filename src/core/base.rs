use std::{fmt::Debug, hash::Hash};

use crate::visit::VisitSet;

/// Base trait for all graphs.
pub trait GraphBase {
    /// Identifier of a vertex.
    type VertexId: Clone + Eq + Hash + Ord + Debug;

    /// Set of visited vertices best suited for the identifiers of this graph.
    type VisitSet: VisitSet<Self::VertexId>;

    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns `true` if the vertex is present in the graph.
    fn contains_vertex(&self, id: &Self::VertexId) -> bool;

    /// Creates an empty set of visited vertices.
    fn visit_set(&self) -> Self::VisitSet;
}

/// Access to the (outgoing) neighbors of a vertex.
pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    /// Returns the neighbors of the vertex in ascending order.
    ///
    /// For a directed graph these are the successors. If the vertex is not
    /// in the graph, the iterator is empty.
    fn neighbors(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_>;

    fn degree(&self, from: &Self::VertexId) -> usize {
        self.neighbors(from).count()
    }
}

/// Enumeration of all vertices in the graph.
pub trait VertexSet: GraphBase {
    type VertexIdsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    /// Returns all vertices in the canonical order of the graph.
    fn vertex_ids(&self) -> Self::VertexIdsIter<'_>;
}

/// Lookup of edge weights.
pub trait EdgeWeights<W>: GraphBase {
    /// Returns the weight of the edge `from -> to`, or `None` if there is no
    /// such edge.
    fn edge_weight(&self, from: &Self::VertexId, to: &Self::VertexId) -> Option<&W>;
}

/// Marker for graphs whose neighbor relation is symmetric, that is, `v` is a
/// neighbor of `u` if and only if `u` is a neighbor of `v`.
///
/// Algorithms that treat every edge as traversable in both directions (for
/// example [connected components](crate::algo::ConnectedComponents)) require
/// this guarantee.
pub trait Symmetric: Neighbors {}
