//! Find [single source shortest paths] and their distances in a graph with
//! non-negative edge weights.
//!
//! The search uses [Dijkstra's
//! algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm): the
//! vertex with the smallest tentative distance is repeatedly taken from a
//! priority queue, finalized and its outgoing edges relaxed.
//!
//! All edge weights must be non-negative. This is guaranteed for
//! [`DirectedGraph`](crate::DirectedGraph), which refuses negative weights,
//! and checked during the search for other graphs with signed weights.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::ShortestPaths, DirectedGraph};
//!
//! let graph = DirectedGraph::from_edges([(0, 1, 4u32), (1, 2, 1), (0, 2, 7), (2, 3, 2)]);
//!
//! let shortest_paths = ShortestPaths::on(&graph).run(0).unwrap();
//! assert_eq!(shortest_paths.dist(&3), Some(&7));
//! assert_eq!(shortest_paths.reconstruct(3).collect::<Vec<_>>(), vec![2, 1, 0]);
//! ```

use std::{fmt, ops::Index};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{GraphBase, Weight};

mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
pub struct ShortestPaths<W, G: GraphBase> {
    source: G::VertexId,
    // Using HashMaps because the algorithm supports early termination when
    // reaching given goal.
    dist: FxHashMap<G::VertexId, W>,
    pred: FxHashMap<G::VertexId, G::VertexId>,
}

impl<W, G> fmt::Debug for ShortestPaths<W, G>
where
    W: fmt::Debug,
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortestPaths")
            .field("source", &self.source)
            .field("dist", &self.dist)
            .field("pred", &self.pred)
            .finish()
    }
}

impl<W, G> ShortestPaths<W, G>
where
    G: GraphBase,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &G::VertexId {
        &self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// The distance is not known if (1) the vertex is not reachable from the
    /// source, or (2) the [goal](ShortestPathsBuilder::goal) was reached
    /// before visiting the given vertex.
    pub fn dist(&self, to: &G::VertexId) -> Option<&W> {
        self.dist.get(to)
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order. The given vertex itself is not
    /// included, the source is.
    pub fn reconstruct(&self, to: G::VertexId) -> PathReconstruction<'_, G> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the distances to given vertices, in the same order, using
    /// [`Weight::inf`] for vertices with unknown distance.
    pub fn distances<I>(&self, vertices: I) -> Vec<W>
    where
        I: IntoIterator<Item = G::VertexId>,
        W: Weight,
    {
        vertices
            .into_iter()
            .map(|vertex| self.dist.get(&vertex).cloned().unwrap_or_else(W::inf))
            .collect()
    }
}

impl<W, G> Index<G::VertexId> for ShortestPaths<W, G>
where
    G: GraphBase,
{
    type Output = W;

    fn index(&self, index: G::VertexId) -> &Self::Output {
        self.dist(&index).expect("vertex distance is not known")
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,

    /// The source vertex is not in the graph.
    #[error("source vertex does not exist")]
    SourceAbsent,
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, G: GraphBase> {
    curr: G::VertexId,
    pred: &'a FxHashMap<G::VertexId, G::VertexId>,
}

impl<'a, G: GraphBase> Iterator for PathReconstruction<'a, G> {
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::{EdgeWeights, Neighbors, VertexSet},
        infra::proptest::graph_directed,
        DirectedGraph,
    };

    use super::*;

    fn create_basic_graph() -> DirectedGraph<u32> {
        DirectedGraph::from_edges([
            (0, 1, 3),
            (0, 2, 2),
            (1, 2, 2),
            (1, 3, 2),
            (1, 4, 7),
            (2, 3, 5),
            (3, 4, 3),
            (4, 5, 10),
        ])
    }

    #[test]
    fn dijkstra_basic() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).run(0).unwrap();

        assert_eq!(shortest_paths.dist(&4), Some(&8));
        assert_eq!(
            shortest_paths.reconstruct(4).collect::<Vec<_>>(),
            vec![3, 1, 0]
        );
        assert_eq!(shortest_paths.dist(&2), Some(&2));
        assert_eq!(shortest_paths[5], 18);
        assert_eq!(shortest_paths.source(), &0);
    }

    #[test]
    fn dijkstra_unreachable() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).run(3).unwrap();

        assert_eq!(shortest_paths.dist(&0), None);
        assert_eq!(
            shortest_paths.distances(graph.vertex_ids()),
            vec![u32::MAX, u32::MAX, u32::MAX, 0, 3, 13]
        );
    }

    #[test]
    fn dijkstra_early_termination() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).goal(4).run(0).unwrap();

        assert_eq!(shortest_paths.dist(&4), Some(&8));
        assert!(shortest_paths.dist(&5).is_none());
    }

    #[test]
    fn dijkstra_goal_not_reached() {
        let mut graph = create_basic_graph();
        let isolated = graph.add_vertex() - 1;

        let shortest_paths = ShortestPaths::on(&graph).goal(isolated).run(0);
        assert_matches!(shortest_paths, Err(Error::GoalNotReached));
    }

    #[test]
    fn dijkstra_source_absent() {
        let graph = create_basic_graph();

        let shortest_paths = ShortestPaths::on(&graph).run(6);
        assert_matches!(shortest_paths, Err(Error::SourceAbsent));
    }

    #[test]
    fn dijkstra_float_weights() {
        let graph = DirectedGraph::from_edges([(0, 1, 0.5f64), (1, 2, 0.25), (0, 2, 1.0)]);
        let shortest_paths = ShortestPaths::on(&graph).run(0).unwrap();

        assert_eq!(shortest_paths.dist(&2), Some(&0.75));
    }

    // Graph with signed weights that bypasses the checks of `DirectedGraph`.
    struct Signed(Vec<Vec<(usize, i32)>>);

    impl GraphBase for Signed {
        type VertexId = usize;
        type VisitSet = rustc_hash::FxHashSet<usize>;

        fn vertex_count(&self) -> usize {
            self.0.len()
        }

        fn contains_vertex(&self, id: &usize) -> bool {
            *id < self.0.len()
        }

        fn visit_set(&self) -> Self::VisitSet {
            Default::default()
        }
    }

    impl Neighbors for Signed {
        type NeighborsIter<'a> = std::vec::IntoIter<usize>;

        fn neighbors(&self, from: &usize) -> Self::NeighborsIter<'_> {
            self.0
                .get(*from)
                .map(|edges| edges.iter().map(|(to, _)| *to).collect::<Vec<_>>())
                .unwrap_or_default()
                .into_iter()
        }
    }

    impl EdgeWeights<i32> for Signed {
        fn edge_weight(&self, from: &usize, to: &usize) -> Option<&i32> {
            self.0
                .get(*from)?
                .iter()
                .find(|(dst, _)| dst == to)
                .map(|(_, weight)| weight)
        }
    }

    #[test]
    fn dijkstra_negative_edge() {
        let graph = Signed(vec![vec![(1, 3), (2, -1)], vec![], vec![]]);

        let shortest_paths = ShortestPaths::on(&graph).run(0);
        assert_matches!(shortest_paths, Err(Error::NegativeWeight));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dijkstra_agrees_with_petgraph(graph in graph_directed(1u32..100).max_size(64), source: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);
            let source = source % n;

            let mut reference = petgraph::graph::DiGraph::<(), u32>::new();
            let nodes = (0..n).map(|_| reference.add_node(())).collect::<Vec<_>>();
            for (src, dst, weight) in graph.edges() {
                reference.add_edge(nodes[src], nodes[dst], weight);
            }

            let expected = petgraph::algo::dijkstra(&reference, nodes[source], None, |e| *e.weight());
            let paths = ShortestPaths::on(&graph).run(source).unwrap();

            for v in graph.vertex_ids() {
                prop_assert_eq!(paths.dist(&v), expected.get(&nodes[v]));
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dijkstra_paths_lead_to_source(graph in graph_directed(1u32..100).max_size(64), source: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);
            let source = source % n;

            let paths = ShortestPaths::on(&graph).run(source).unwrap();

            for v in graph.vertex_ids() {
                if paths.dist(&v).is_none() {
                    continue;
                }

                let u = paths.reconstruct(v).last();
                if v != source {
                    prop_assert_eq!(u, Some(source));
                } else {
                    prop_assert_eq!(u, None);
                }
            }
        }
    }
}
