//! Find a [cycle] in a graph.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::is_cyclic, DirectedGraph};
//!
//! let mut graph = DirectedGraph::from_edges([(0, 1, 1u32), (1, 2, 1), (2, 3, 1)]);
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(3, 0, 1);
//! assert!(is_cyclic(&graph));
//! ```

use std::{collections::VecDeque, fmt};

use rustc_hash::FxHashMap;

use crate::{
    core::{GraphBase, Neighbors, Symmetric, VertexSet},
    visit::VisitSet,
};

/// Cycle in a graph, identified by an edge that closes it.
pub struct Cycle<G: GraphBase> {
    /// An edge `(from, to)` that is part of the cycle.
    pub edge: (G::VertexId, G::VertexId),
    as_undirected: bool,
}

impl<G> fmt::Debug for Cycle<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cycle")
            .field("edge", &self.edge)
            .field("as_undirected", &self.as_undirected)
            .finish()
    }
}

impl<G> Clone for Cycle<G>
where
    G: GraphBase,
{
    fn clone(&self) -> Self {
        Self {
            edge: self.edge.clone(),
            as_undirected: self.as_undirected,
        }
    }
}

impl<G> PartialEq for Cycle<G>
where
    G: GraphBase,
{
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge && self.as_undirected == other.as_undirected
    }
}

impl<G> Eq for Cycle<G> where G: GraphBase {}

impl<G> Cycle<G>
where
    G: Neighbors + VertexSet,
{
    /// Finds a directed cycle using an iterative three-color depth-first
    /// search. A cycle exists if and only if the search finds an edge to a
    /// vertex that is discovered but not yet closed.
    pub fn find(graph: &G) -> Option<Self> {
        tracing::trace!(vertices = graph.vertex_count(), "searching for directed cycle");

        let mut discovered = graph.visit_set();
        let mut closed = graph.visit_set();
        let mut stack = Vec::new();

        for root in graph.vertex_ids() {
            if !discovered.visit(root.clone()) {
                continue;
            }

            stack.push((root.clone(), graph.neighbors(&root)));

            while let Some((vertex, neighbors)) = stack.last_mut() {
                match neighbors.next() {
                    Some(next) => {
                        if discovered.visit(next.clone()) {
                            let neighbors = graph.neighbors(&next);
                            stack.push((next, neighbors));
                        } else if !closed.is_visited(&next) {
                            return Some(Cycle {
                                edge: (vertex.clone(), next),
                                as_undirected: false,
                            });
                        }
                    }
                    None => {
                        closed.visit(vertex.clone());
                        stack.pop();
                    }
                }
            }
        }

        None
    }

    /// Finds a cycle in a graph with symmetric neighbor relation.
    ///
    /// The search carries the parent of every vertex on the stack, so that
    /// going back along the edge used to discover a vertex is not mistaken
    /// for a cycle. Any edge to an already visited vertex other than the
    /// parent closes a cycle.
    pub fn find_undirected(graph: &G) -> Option<Self>
    where
        G: Symmetric,
    {
        tracing::trace!(vertices = graph.vertex_count(), "searching for undirected cycle");

        let mut visited = graph.visit_set();
        let mut stack = Vec::new();

        for root in graph.vertex_ids() {
            if visited.is_visited(&root) {
                continue;
            }

            // The root is its own parent, there are no self-loops.
            stack.push((root.clone(), root));

            while let Some((vertex, parent)) = stack.pop() {
                visited.visit(vertex.clone());

                for neighbor in graph.neighbors(&vertex) {
                    if neighbor == parent {
                        continue;
                    }

                    if visited.is_visited(&neighbor) {
                        return Some(Cycle {
                            edge: (vertex, neighbor),
                            as_undirected: true,
                        });
                    }

                    stack.push((neighbor, vertex.clone()));
                }
            }
        }

        None
    }

    /// Collects the vertices of the whole cycle.
    ///
    /// The returned sequence starts at the target of the closing
    /// [edge](Cycle::edge) and ends at its source. Consecutive vertices are
    /// adjacent and the last vertex is adjacent to the first one.
    pub fn collect(self, graph: &G) -> Vec<G::VertexId> {
        let (from, to) = self.edge;

        let mut visited = graph.visit_set();
        let mut pred: FxHashMap<G::VertexId, G::VertexId> = FxHashMap::default();
        let mut queue = VecDeque::new();

        visited.visit(to.clone());
        queue.push_back(to.clone());

        while let Some(vertex) = queue.pop_front() {
            if vertex == from {
                let mut path = vec![vertex.clone()];
                let mut current = vertex;

                while let Some(prev) = pred.get(&current).cloned() {
                    path.push(prev.clone());
                    current = prev;
                }

                path.reverse();
                return path;
            }

            for next in graph.neighbors(&vertex) {
                // Ignore the closing edge itself so that another path between
                // its endpoints is found.
                if self.as_undirected && vertex == to && next == from {
                    continue;
                }

                if visited.visit(next.clone()) {
                    pred.insert(next.clone(), vertex.clone());
                    queue.push_back(next);
                }
            }
        }

        // The graph changed since the cycle was found.
        vec![to, from]
    }
}

/// Returns `true` if the graph contains a directed cycle.
///
/// Graphs with fewer than two vertices never have a cycle, since self-loops
/// are not allowed.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    graph.vertex_count() > 1 && Cycle::find(graph).is_some()
}

/// Returns `true` if the graph with symmetric neighbor relation contains a
/// cycle.
pub fn is_cyclic_undirected<G>(graph: &G) -> bool
where
    G: Symmetric + VertexSet,
{
    graph.vertex_count() > 1 && Cycle::find_undirected(graph).is_some()
}
