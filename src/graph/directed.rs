use std::{fmt, marker::PhantomData, ops::Range};

use crate::{
    algo::{is_cyclic, shortest_paths, ShortestPaths},
    core::{
        AddEdgeError, AddEdgeErrorKind, EdgeWeights, GraphBase, Neighbors, RemoveEdgeError,
        RemoveEdgeErrorKind, Storage, VertexSet, Weight,
    },
    storage::AdjMatrix,
    visit::{Bfs, Dfs, TypedBitSet, Visitor},
};

/// Directed graph with non-negative edge weights over vertices `0..n`.
///
/// Vertices are only ever appended. An edge is present if and only if its
/// weight is greater than zero, there are no self-loops and at most one edge
/// for each ordered pair of vertices.
///
/// # Examples
///
/// ```
/// use adjgraph::DirectedGraph;
///
/// let mut graph = DirectedGraph::<u32>::new();
/// assert_eq!(graph.add_vertex(), 1);
/// assert_eq!(graph.add_vertex(), 2);
///
/// graph.add_edge(0, 1, 5);
/// graph.add_edge(1, 1, 3); // self-loop, ignored
///
/// assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1, 5)]);
/// assert!(graph.is_valid_path(&[0, 1]));
/// assert!(!graph.is_valid_path(&[1, 0]));
/// ```
pub struct DirectedGraph<W = u32, S = AdjMatrix<W>> {
    storage: S,
    ty: PhantomData<W>,
}

impl<W: Weight> DirectedGraph<W> {
    pub fn new() -> Self {
        Self::new_in(AdjMatrix::new())
    }

    /// Creates a graph from `(src, dst, weight)` triples.
    ///
    /// Enough vertices are created first to cover the greatest referenced
    /// index, then the edges are added one by one with the rules of
    /// [`add_edge`](DirectedGraph::add_edge).
    pub fn from_edges<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new();
        graph.extend_with_edges(iter);
        graph
    }
}

impl<W, S> DirectedGraph<W, S>
where
    W: Weight,
    S: Storage<W>,
{
    /// Creates an empty graph backed by given storage.
    pub fn new_in(storage: S) -> Self {
        Self {
            storage,
            ty: PhantomData,
        }
    }

    /// Adds `(src, dst, weight)` triples, appending vertices as needed to
    /// cover the greatest referenced index.
    ///
    /// An edge with an endpoint of `usize::MAX` can never be covered and is
    /// ignored. Other indices are trusted, so a huge index allocates a huge
    /// graph.
    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let edges = iter.into_iter().collect::<Vec<_>>();

        let needed = edges
            .iter()
            .filter_map(|(src, dst, _)| src.max(dst).checked_add(1))
            .max();

        if let Some(needed) = needed {
            while self.vertex_count() < needed {
                self.storage.add_vertex();
            }
        }

        for (src, dst, weight) in edges {
            self.add_edge(src, dst, weight);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.storage.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.storage.edge_count()
    }

    /// Appends a new vertex without edges.
    ///
    /// Returns the new vertex **count**, that is, the index of the new vertex
    /// plus one.
    pub fn add_vertex(&mut self) -> usize {
        self.storage.add_vertex()
    }

    /// Sets the weight of the edge `src -> dst` and returns the previous
    /// weight, if the edge existed.
    ///
    /// A zero weight removes the edge. Out of range vertices, self-loops and
    /// negative weights are ignored.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: W) -> Option<W> {
        match self.try_add_edge(src, dst, weight) {
            Ok(prev) => prev,
            Err(error) => {
                tracing::debug!(src, dst, weight = ?error.attr, %error, "ignoring edge");
                None
            }
        }
    }

    pub fn try_add_edge(
        &mut self,
        src: usize,
        dst: usize,
        weight: W,
    ) -> Result<Option<W>, AddEdgeError<W>> {
        let n = self.vertex_count();

        let kind = if src >= n {
            AddEdgeErrorKind::SourceAbsent
        } else if dst >= n {
            AddEdgeErrorKind::DestinationAbsent
        } else if src == dst {
            AddEdgeErrorKind::SelfLoop
        } else if weight < W::zero() {
            AddEdgeErrorKind::NegativeWeight
        } else {
            return Ok(self.storage.set_weight(src, dst, weight));
        };

        Err(AddEdgeError::new(weight, kind))
    }

    /// Removes the edge `src -> dst` and returns its weight.
    ///
    /// Out of range vertices, self-loops and absent edges are ignored.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> Option<W> {
        match self.try_remove_edge(src, dst) {
            Ok(weight) => Some(weight),
            Err(error) => {
                tracing::debug!(src, dst, %error, "ignoring edge removal");
                None
            }
        }
    }

    pub fn try_remove_edge(&mut self, src: usize, dst: usize) -> Result<W, RemoveEdgeError> {
        let n = self.vertex_count();

        let kind = if src >= n {
            RemoveEdgeErrorKind::SourceAbsent
        } else if dst >= n {
            RemoveEdgeErrorKind::DestinationAbsent
        } else if src == dst {
            RemoveEdgeErrorKind::SelfLoop
        } else {
            return self
                .storage
                .clear_weight(src, dst)
                .ok_or(RemoveEdgeError::new(RemoveEdgeErrorKind::EdgeAbsent));
        };

        Err(RemoveEdgeError::new(kind))
    }

    /// Removes all edges, keeping the vertices.
    pub fn clear_edges(&mut self) {
        self.storage.clear_edges();
    }

    /// Returns all vertices in ascending order.
    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Returns all edges as `(src, dst, weight)` triples in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.vertices().flat_map(move |src| {
            self.storage
                .successors(src)
                .map(move |(dst, weight)| (src, dst, weight.clone()))
        })
    }

    /// Returns the weight of the edge `src -> dst`.
    pub fn edge(&self, src: usize, dst: usize) -> Option<&W> {
        self.storage.weight(src, dst)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns `true` if each consecutive pair of vertices in the path is
    /// connected by an edge. An empty path is valid, a path with any vertex
    /// outside of the graph is not.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        let n = self.vertex_count();

        path.iter().all(|v| *v < n)
            && path
                .windows(2)
                .all(|pair| self.storage.weight(pair[0], pair[1]).is_some())
    }

    /// Depth-first traversal from `start`, visiting neighbors in ascending
    /// order. Stops right after `end` is visited.
    pub fn dfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        let mut dfs = Dfs::new(self);
        dfs.start(start).collect_until(self, end.as_ref())
    }

    /// Breadth-first traversal from `start`, visiting neighbors in ascending
    /// order. Stops right after `end` is visited.
    pub fn bfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        let mut bfs = Bfs::new(self);
        bfs.start(start).collect_until(self, end.as_ref())
    }

    /// Returns `true` if the graph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        is_cyclic(self)
    }

    /// Runs Dijkstra's algorithm from `source`.
    pub fn shortest_paths(
        &self,
        source: usize,
    ) -> Result<ShortestPaths<W, Self>, shortest_paths::Error> {
        ShortestPaths::<W, Self>::on(self).run(source)
    }

    /// Returns the shortest path distances from `source` to every vertex,
    /// indexed by vertex. Unreachable vertices get [`Weight::inf`].
    ///
    /// For integer weights the infinity is the `MAX` value, which is also a
    /// valid distance. Paths whose length overflows the weight type are
    /// treated as unreachable. Use [`shortest_paths`](Self::shortest_paths)
    /// and [`ShortestPaths::dist`] to tell reachable vertices apart, or use
    /// float weights.
    pub fn dijkstra(&self, source: usize) -> Vec<W> {
        match self.shortest_paths(source) {
            Ok(paths) => paths.distances(self.vertices()),
            Err(error) => {
                tracing::debug!(source, %error, "shortest paths not computed");
                vec![W::inf(); self.vertex_count()]
            }
        }
    }
}

impl<W: Weight> Default for DirectedGraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, S: Clone> Clone for DirectedGraph<W, S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            ty: PhantomData,
        }
    }
}

impl<W, S: fmt::Debug> fmt::Debug for DirectedGraph<W, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("storage", &self.storage)
            .finish()
    }
}

impl<W, S> fmt::Display for DirectedGraph<W, S>
where
    W: Weight + fmt::Display,
    S: Storage<W>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count();

        if n == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({n} vertices):")?;

        write!(f, "   |")?;
        for i in self.vertices() {
            let sep = if i == 0 { "" } else { " " };
            write!(f, "{sep}{i:>2}")?;
        }
        writeln!(f)?;

        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;

        for src in self.vertices() {
            write!(f, "{src:>2} |")?;
            for dst in self.vertices() {
                let sep = if dst == 0 { "" } else { " " };
                let weight = self.edge(src, dst).cloned().unwrap_or_else(W::zero);
                write!(f, "{sep}{weight:>2}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<W, S> GraphBase for DirectedGraph<W, S>
where
    W: Weight,
    S: Storage<W>,
{
    type VertexId = usize;
    type VisitSet = TypedBitSet<usize>;

    fn vertex_count(&self) -> usize {
        self.storage.vertex_count()
    }

    fn contains_vertex(&self, id: &usize) -> bool {
        *id < self.storage.vertex_count()
    }

    fn visit_set(&self) -> Self::VisitSet {
        TypedBitSet::with_capacity(self.storage.vertex_count())
    }
}

impl<W, S> Neighbors for DirectedGraph<W, S>
where
    W: Weight,
    S: Storage<W>,
{
    type NeighborsIter<'a> = NeighborsIter<'a, W, S>
    where
        Self: 'a;

    fn neighbors(&self, from: &usize) -> Self::NeighborsIter<'_> {
        NeighborsIter {
            inner: self.storage.successors(*from),
        }
    }
}

impl<W, S> VertexSet for DirectedGraph<W, S>
where
    W: Weight,
    S: Storage<W>,
{
    type VertexIdsIter<'a> = Range<usize>
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        self.vertices()
    }
}

impl<W, S> EdgeWeights<W> for DirectedGraph<W, S>
where
    W: Weight,
    S: Storage<W>,
{
    fn edge_weight(&self, from: &usize, to: &usize) -> Option<&W> {
        self.storage.weight(*from, *to)
    }
}

pub struct NeighborsIter<'a, W, S>
where
    W: Weight + 'a,
    S: Storage<W> + 'a,
{
    inner: S::SuccessorsIter<'a>,
}

impl<'a, W, S> Iterator for NeighborsIter<'a, W, S>
where
    W: Weight + 'a,
    S: Storage<W> + 'a,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(dst, _)| dst)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        infra::{proptest::graph_directed, testing::check_consistency_directed},
        storage::AdjList,
    };

    use super::*;

    const SAMPLE: [(usize, usize, u32); 7] = [
        (0, 1, 10),
        (4, 0, 12),
        (1, 4, 15),
        (4, 3, 3),
        (3, 1, 5),
        (2, 1, 23),
        (3, 2, 7),
    ];

    fn sample() -> DirectedGraph<u32> {
        DirectedGraph::from_edges(SAMPLE)
    }

    #[test]
    fn add_vertex_returns_count() {
        let mut graph = DirectedGraph::<u32>::new();
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn from_edges_sizes_graph() {
        let graph = sample();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 7);

        let graph = DirectedGraph::from_edges([(2, 6, 1u32)]);
        assert_eq!(graph.vertex_count(), 7);
    }

    #[test]
    fn edges_row_major() {
        assert_eq!(
            sample().edges().collect::<Vec<_>>(),
            vec![
                (0, 1, 10),
                (1, 4, 15),
                (2, 1, 23),
                (3, 1, 5),
                (3, 2, 7),
                (4, 0, 12),
                (4, 3, 3)
            ]
        );
    }

    #[test]
    fn add_edge_ignores_invalid() {
        let mut graph = sample();

        assert_eq!(graph.add_edge(0, 5, 1), None);
        assert_eq!(graph.add_edge(7, 0, 1), None);
        assert_eq!(graph.add_edge(2, 2, 1), None);
        assert_eq!(graph.edges().collect::<Vec<_>>(), sample().edges().collect::<Vec<_>>());

        let mut graph = DirectedGraph::<i32>::from_edges([(0, 1, 4)]);
        assert_eq!(graph.add_edge(1, 0, -2), None);
        assert_eq!(graph.edge(1, 0), None);
    }

    #[test]
    fn add_edge_errors() {
        let mut graph = DirectedGraph::<i32>::from_edges([(0, 1, 4)]);

        assert_matches!(
            graph.try_add_edge(0, 2, 1),
            Err(AddEdgeError { kind: AddEdgeErrorKind::DestinationAbsent, .. })
        );
        assert_matches!(
            graph.try_add_edge(3, 0, 1),
            Err(AddEdgeError { kind: AddEdgeErrorKind::SourceAbsent, .. })
        );
        assert_matches!(
            graph.try_add_edge(1, 1, 1),
            Err(AddEdgeError { kind: AddEdgeErrorKind::SelfLoop, .. })
        );
        assert_eq!(
            graph.try_add_edge(1, 0, -2),
            Err(AddEdgeError::new(-2, AddEdgeErrorKind::NegativeWeight))
        );
    }

    #[test]
    fn add_edge_overwrites() {
        let mut graph = sample();

        assert_eq!(graph.add_edge(0, 1, 42), Some(10));
        assert_eq!(graph.edge(0, 1), Some(&42));
        assert_eq!(graph.edge_count(), 7);

        // Zero weight removes the edge.
        assert_eq!(graph.add_edge(0, 1, 0), Some(42));
        assert_eq!(graph.edge(0, 1), None);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn remove_edge() {
        let mut graph = sample();

        assert_eq!(graph.remove_edge(4, 3), Some(3));
        assert_eq!(graph.remove_edge(4, 3), None);
        assert_eq!(graph.remove_edge(9, 3), None);
        assert_eq!(graph.remove_edge(2, 2), None);
        assert_eq!(graph.edge_count(), 6);

        assert_eq!(
            graph.try_remove_edge(4, 3),
            Err(RemoveEdgeError::new(RemoveEdgeErrorKind::EdgeAbsent))
        );
        assert_eq!(
            graph.try_remove_edge(1, 5),
            Err(RemoveEdgeError::new(RemoveEdgeErrorKind::DestinationAbsent))
        );
    }

    #[test]
    fn clear_edges() {
        let mut graph = sample();
        graph.clear_edges();

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn valid_paths() {
        let graph = sample();

        assert!(graph.is_valid_path(&[0, 1, 4, 3]));
        assert!(!graph.is_valid_path(&[1, 3, 2, 1]));
        assert!(graph.is_valid_path(&[2]));
        assert!(!graph.is_valid_path(&[5]));
        assert!(!graph.is_valid_path(&[0, 1, 9]));
        assert!(graph.is_valid_path(&[]));
        assert!(graph.is_valid_path(&[4, 0, 1, 4, 3, 1]));
    }

    #[test]
    fn traversals() {
        let graph = sample();

        assert_eq!(graph.dfs(0, None), vec![0, 1, 4, 3, 2]);
        assert_eq!(graph.bfs(0, None), vec![0, 1, 4, 3, 2]);
        assert_eq!(graph.dfs(4, None), vec![4, 0, 1, 3, 2]);
        assert_eq!(graph.bfs(4, None), vec![4, 0, 3, 1, 2]);
        assert_eq!(graph.dfs(3, None), vec![3, 1, 4, 0, 2]);
        assert_eq!(graph.bfs(3, None), vec![3, 1, 2, 4, 0]);
    }

    #[test]
    fn traversals_early_termination() {
        let graph = sample();

        assert_eq!(graph.dfs(0, Some(4)), vec![0, 1, 4]);
        assert_eq!(graph.bfs(4, Some(3)), vec![4, 0, 3]);
        assert_eq!(graph.dfs(2, Some(2)), vec![2]);
        assert_eq!(graph.bfs(0, Some(7)), vec![0, 1, 4, 3, 2]);
    }

    #[test]
    fn traversals_absent_start() {
        let graph = sample();

        assert!(graph.dfs(5, None).is_empty());
        assert!(graph.bfs(5, None).is_empty());
    }

    #[test]
    fn has_cycle_sequence() {
        let mut graph = sample();

        let steps: [(bool, usize, usize, bool); 7] = [
            (false, 3, 1, true),
            (false, 4, 0, true),
            (false, 3, 2, false),
            (true, 4, 3, false),
            (true, 2, 3, false),
            (true, 1, 3, false),
            (true, 4, 0, true),
        ];

        for (add, src, dst, expected) in steps {
            if add {
                graph.add_edge(src, dst, 1);
            } else {
                graph.remove_edge(src, dst);
            }

            assert_eq!(graph.has_cycle(), expected, "after {src} -> {dst}");
        }
    }

    #[test]
    fn edges_chain_into_valid_path() {
        let graph = DirectedGraph::from_edges([(0, 1, 1u32), (1, 2, 1), (2, 3, 1)]);

        let mut path = Vec::new();
        for (src, dst, _) in graph.edges() {
            if path.is_empty() {
                path.push(src);
            }
            path.push(dst);
        }

        assert_eq!(path, vec![0, 1, 2, 3]);
        assert!(graph.is_valid_path(&path));
        assert!(!graph.is_valid_path(&[0, 1, 3]));
    }

    #[test]
    fn from_edges_ignores_max_index() {
        let graph = DirectedGraph::from_edges([(0, 1, 1u32), (usize::MAX, 0, 1), (1, usize::MAX, 1)]);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1, 1)]);
    }

    #[test]
    fn has_cycle_line() {
        let mut graph = DirectedGraph::from_edges([(0, 1, 1u32), (1, 2, 1), (2, 3, 1)]);
        assert!(!graph.has_cycle());

        graph.add_edge(3, 0, 1);
        assert!(graph.has_cycle());
    }

    #[test]
    fn dijkstra_sample() {
        let mut graph = sample();

        assert_eq!(graph.dijkstra(0), vec![0, 10, 35, 28, 25]);
        assert_eq!(graph.dijkstra(1), vec![27, 0, 25, 18, 15]);
        assert_eq!(graph.dijkstra(2), vec![50, 23, 0, 41, 38]);
        assert_eq!(graph.dijkstra(3), vec![32, 5, 7, 0, 20]);
        assert_eq!(graph.dijkstra(4), vec![12, 8, 10, 3, 0]);

        graph.remove_edge(4, 3);

        let inf = u32::MAX;
        assert_eq!(graph.dijkstra(0), vec![0, 10, inf, inf, 25]);
        assert_eq!(graph.dijkstra(2), vec![50, 23, 0, inf, 38]);
    }

    #[test]
    fn dijkstra_overflowing_path_unreachable() {
        let graph = DirectedGraph::from_edges([(0, 1, 3_000_000_000u32), (1, 2, 3_000_000_000)]);
        assert_eq!(graph.dijkstra(0), vec![0, 3_000_000_000, u32::MAX]);

        let paths = graph.shortest_paths(0).unwrap();
        assert_eq!(paths.dist(&1), Some(&3_000_000_000));
        assert_eq!(paths.dist(&2), None);

        // A longer path that fits is still found.
        let graph = DirectedGraph::from_edges([
            (0, 1, 3_000_000_000u32),
            (1, 3, 3_000_000_000),
            (0, 2, 1_000_000_000),
            (2, 3, 1_000_000_000),
        ]);
        assert_eq!(graph.dijkstra(0)[3], 2_000_000_000);
    }

    #[test]
    fn dijkstra_max_distance_reachable() {
        let graph = DirectedGraph::from_edges([(0, 1, u32::MAX), (2, 0, 1)]);

        // The distance of 1 and the infinity of 2 coincide in the vector.
        assert_eq!(graph.dijkstra(0), vec![0, u32::MAX, u32::MAX]);

        let paths = graph.shortest_paths(0).unwrap();
        assert_eq!(paths.dist(&1), Some(&u32::MAX));
        assert_eq!(paths.dist(&2), None);

        let graph = DirectedGraph::from_edges([(0, 1, f64::MAX), (2, 0, 1.0)]);
        assert_eq!(graph.dijkstra(0), vec![0.0, f64::MAX, f64::INFINITY]);
    }

    #[test]
    fn dijkstra_float_infinity() {
        let graph = DirectedGraph::from_edges([(0, 1, 2.5f64), (2, 1, 1.0)]);
        assert_eq!(graph.dijkstra(0), vec![0.0, 2.5, f64::INFINITY]);
    }

    #[test]
    fn dijkstra_absent_source() {
        let graph = sample();
        assert_eq!(graph.dijkstra(9), vec![u32::MAX; 5]);
    }

    #[test]
    fn adj_list_storage() {
        let mut graph = DirectedGraph::new_in(AdjList::new());
        graph.extend_with_edges(SAMPLE);

        assert_eq!(graph.edges().collect::<Vec<_>>(), sample().edges().collect::<Vec<_>>());
        assert_eq!(graph.dfs(4, None), vec![4, 0, 1, 3, 2]);
        assert_eq!(graph.dijkstra(0), vec![0, 10, 35, 28, 25]);

        graph.remove_edge(4, 3);
        assert!(graph.has_cycle());
    }

    #[test]
    fn display_empty() {
        assert_eq!(DirectedGraph::<u32>::new().to_string(), "EMPTY GRAPH\n");
    }

    #[test]
    fn display_matrix() {
        let graph = DirectedGraph::from_edges([(0, 1, 10u32), (2, 0, 3)]);
        let expected = "\
GRAPH (3 vertices):
   | 0  1  2
------------
 0 | 0 10  0
 1 | 0  0  0
 2 | 3  0  0
";
        assert_eq!(graph.to_string(), expected);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_consistent(graph in graph_directed(any::<u32>()).max_size(32)) {
            check_consistency_directed(&graph)?;
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_no_self_loops(graph in graph_directed(1u32..10).max_size(32), v: usize) {
            let mut graph = graph;
            prop_assume!(graph.vertex_count() > 0);
            let v = v % graph.vertex_count();

            graph.add_edge(v, v, 1);
            prop_assert_eq!(graph.edge(v, v), None);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_edges_form_valid_paths(graph in graph_directed(1u32..10).max_size(32)) {
            for (src, dst, _) in graph.edges() {
                prop_assert!(graph.is_valid_path(&[src, dst]));
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_edge_chains_form_valid_paths(graph in graph_directed(1u32..10).max_size(32), start: usize) {
            prop_assume!(graph.vertex_count() > 0);

            let edges = graph.edges().collect::<Vec<_>>();
            let mut path = vec![start % graph.vertex_count()];

            while let Some(&(_, dst, _)) = edges
                .iter()
                .find(|(src, dst, _)| path.last() == Some(src) && !path.contains(dst))
            {
                path.push(dst);
            }

            prop_assert!(graph.is_valid_path(&path));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_traversals_visit_same_vertices(graph in graph_directed(1u32..10).max_size(32), start: usize) {
            prop_assume!(graph.vertex_count() > 0);
            let start = start % graph.vertex_count();

            let mut dfs = graph.dfs(start, None);
            let mut bfs = graph.bfs(start, None);
            dfs.sort_unstable();
            bfs.sort_unstable();

            prop_assert_eq!(dfs, bfs);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_acyclic_has_no_cycle(graph in graph_directed(1u32..10).max_size(32).acyclic()) {
            prop_assert!(!graph.has_cycle());
        }
    }
}
