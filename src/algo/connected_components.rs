//! Find [connected] components in a graph.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::ConnectedComponents, UndirectedGraph};
//!
//! let graph = UndirectedGraph::from_edges([("a", "b"), ("b", "c"), ("x", "y")]);
//! let components = ConnectedComponents::find(&graph);
//!
//! assert_eq!(components.len(), 2);
//! assert_eq!(components.iter().next(), Some(&["a", "b", "c"][..]));
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)

use std::fmt;

use crate::{
    core::{GraphBase, Symmetric, VertexSet},
    visit::{Dfs, VisitSet, Visitor},
};

/// Connected components of a graph.
///
/// Every vertex belongs to exactly one component. Components are ordered by
/// their first vertex in the canonical vertex order of the graph and the
/// vertices of a component are in depth-first order from that vertex.
pub struct ConnectedComponents<G: GraphBase> {
    components: Vec<Vec<G::VertexId>>,
}

impl<G> fmt::Debug for ConnectedComponents<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectedComponents")
            .field("components", &self.components)
            .finish()
    }
}

impl<G> ConnectedComponents<G>
where
    G: GraphBase,
{
    /// Finds the components by running a depth-first traversal from every
    /// vertex not yet assigned to a component.
    pub fn find(graph: &G) -> Self
    where
        G: Symmetric + VertexSet,
    {
        let mut traversal = Dfs::new(graph);
        let mut components = Vec::new();

        for root in graph.vertex_ids() {
            if traversal.visited().is_visited(&root) {
                continue;
            }

            let component = traversal.start(root).into_iter(graph).collect::<Vec<_>>();
            components.push(component);
        }

        tracing::trace!(count = components.len(), "found connected components");

        Self { components }
    }

    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_, G> {
        Iter {
            inner: self.components.iter(),
        }
    }

    /// Returns the component containing given vertex.
    pub fn component_of(&self, vertex: &G::VertexId) -> Option<&[G::VertexId]> {
        self.iter().find(|component| component.contains(vertex))
    }
}

pub struct Iter<'a, G: GraphBase> {
    inner: std::slice::Iter<'a, Vec<G::VertexId>>,
}

impl<'a, G> Iterator for Iter<'a, G>
where
    G: GraphBase,
{
    type Item = &'a [G::VertexId];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }
}
