use std::{fmt, hash::Hash};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    algo::{is_cyclic_undirected, ConnectedComponents},
    core::{
        AddEdgeError, AddEdgeErrorKind, GraphBase, Neighbors, RemoveEdgeError,
        RemoveEdgeErrorKind, Symmetric, VertexSet,
    },
    visit::{Bfs, Dfs, Visitor},
};

/// Undirected graph without edge weights over arbitrary vertex labels.
///
/// Each vertex keeps the list of its neighbors in the order the edges were
/// added. The neighbor relation is always symmetric, there are no self-loops
/// and no parallel edges. Vertices are enumerated in insertion order.
///
/// # Examples
///
/// ```
/// use adjgraph::UndirectedGraph;
///
/// let mut graph = UndirectedGraph::from_edges([("A", "B"), ("A", "C"), ("B", "C")]);
/// assert!(graph.has_cycle());
///
/// graph.remove_vertex(&"C");
/// assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(&"A", &"B")]);
/// assert!(!graph.has_cycle());
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    vertices: Vec<(V, Vec<V>)>,
    index: FxHashMap<V, usize>,
}

impl<V> UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates a graph from `(u, v)` pairs, creating the endpoints as
    /// needed.
    pub fn from_edges<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        graph.extend_with_edges(iter);
        graph
    }

    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|(_, neighbors)| neighbors.len())
            .sum::<usize>()
            / 2
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Adds the vertex without edges. Returns `false` if the vertex was
    /// already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.position_or_insert(vertex).1
    }

    /// Removes the vertex together with all its edges and returns it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Option<V> {
        let Some(pos) = self.index.remove(vertex) else {
            tracing::debug!(?vertex, "ignoring removal of absent vertex");
            return None;
        };

        let (removed, neighbors) = self.vertices.remove(pos);

        for i in self.index.values_mut() {
            if *i > pos {
                *i -= 1;
            }
        }

        for neighbor in neighbors {
            if let Some(&i) = self.index.get(&neighbor) {
                self.vertices[i].1.retain(|n| *n != removed);
            }
        }

        Some(removed)
    }

    /// Connects `u` and `v`, creating the vertices if they are absent.
    ///
    /// Returns `true` if the edge is new. Self-loops are ignored.
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        match self.try_add_edge(u, v) {
            Ok(added) => added,
            Err(error) => {
                tracing::debug!(%error, "ignoring edge");
                false
            }
        }
    }

    pub fn try_add_edge(&mut self, u: V, v: V) -> Result<bool, AddEdgeError<()>> {
        if u == v {
            return Err(AddEdgeError::new((), AddEdgeErrorKind::SelfLoop));
        }

        let (ui, _) = self.position_or_insert(u.clone());
        let (vi, _) = self.position_or_insert(v.clone());

        if self.vertices[ui].1.contains(&v) {
            return Ok(false);
        }

        self.vertices[ui].1.push(v);
        self.vertices[vi].1.push(u);

        Ok(true)
    }

    /// Disconnects `u` and `v`. Returns `true` if the edge existed.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        match self.try_remove_edge(u, v) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(?u, ?v, %error, "ignoring edge removal");
                false
            }
        }
    }

    pub fn try_remove_edge(&mut self, u: &V, v: &V) -> Result<(), RemoveEdgeError> {
        let ui = *self
            .index
            .get(u)
            .ok_or(RemoveEdgeError::new(RemoveEdgeErrorKind::SourceAbsent))?;
        let vi = *self
            .index
            .get(v)
            .ok_or(RemoveEdgeError::new(RemoveEdgeErrorKind::DestinationAbsent))?;

        if ui == vi {
            return Err(RemoveEdgeError::new(RemoveEdgeErrorKind::SelfLoop));
        }

        let pos = self.vertices[ui]
            .1
            .iter()
            .position(|n| n == v)
            .ok_or(RemoveEdgeError::new(RemoveEdgeErrorKind::EdgeAbsent))?;

        self.vertices[ui].1.remove(pos);
        self.vertices[vi].1.retain(|n| n != u);

        Ok(())
    }

    /// Removes all edges, keeping the vertices.
    pub fn clear_edges(&mut self) {
        for (_, neighbors) in self.vertices.iter_mut() {
            neighbors.clear();
        }
    }

    /// Returns the vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter().map(|(vertex, _)| vertex)
    }

    /// Returns every edge once as `(u, v)`, where `u` was inserted before
    /// `v`.
    ///
    /// The edges are ordered by `u` in insertion order and then by the
    /// neighbor list of `u`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .flat_map(move |(ui, (u, neighbors))| {
                neighbors
                    .iter()
                    .filter(move |n| self.index.get(*n).map_or(false, |vi| ui < *vi))
                    .map(move |n| (u, n))
            })
    }

    /// Returns the neighbors of the vertex in the order the edges were added.
    pub fn adjacent(&self, vertex: &V) -> Option<&[V]> {
        self.index
            .get(vertex)
            .map(|&i| self.vertices[i].1.as_slice())
    }

    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.adjacent(u).map_or(false, |neighbors| neighbors.contains(v))
    }

    /// Returns `true` if each consecutive pair of vertices in the path is
    /// connected by an edge. An empty path is valid, a path with any vertex
    /// outside of the graph is not.
    pub fn is_valid_path(&self, path: &[V]) -> bool {
        path.iter().all(|v| self.contains_vertex(v))
            && path
                .windows(2)
                .all(|pair| self.contains_edge(&pair[0], &pair[1]))
    }

    /// Depth-first traversal from `start`, visiting neighbors in ascending
    /// order. Stops right after `end` is visited.
    pub fn dfs(&self, start: V, end: Option<V>) -> Vec<V> {
        let mut dfs = Dfs::new(self);
        dfs.start(start).collect_until(self, end.as_ref())
    }

    /// Breadth-first traversal from `start`, visiting neighbors in ascending
    /// order. Stops right after `end` is visited.
    pub fn bfs(&self, start: V, end: Option<V>) -> Vec<V> {
        let mut bfs = Bfs::new(self);
        bfs.start(start).collect_until(self, end.as_ref())
    }

    pub fn has_cycle(&self) -> bool {
        is_cyclic_undirected(self)
    }

    pub fn connected_components(&self) -> ConnectedComponents<Self> {
        ConnectedComponents::find(self)
    }

    pub fn count_connected_components(&self) -> usize {
        self.connected_components().len()
    }

    fn position_or_insert(&mut self, vertex: V) -> (usize, bool) {
        if let Some(&i) = self.index.get(&vertex) {
            return (i, false);
        }

        let i = self.vertices.len();
        self.index.insert(vertex.clone(), i);
        self.vertices.push((vertex, Vec::new()));
        (i, true)
    }
}

impl<V> Default for UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Display for UndirectedGraph<V>
where
    V: fmt::Display + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .vertices
            .iter()
            .map(|(vertex, neighbors)| format!("{vertex}: {neighbors:?}"))
            .collect::<Vec<_>>();

        let body = entries.join("\n  ");

        if body.chars().count() < 70 {
            write!(f, "GRAPH: {{{}}}", entries.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {body}}}")
        }
    }
}

impl<V> GraphBase for UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    type VertexId = V;
    type VisitSet = FxHashSet<V>;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: &V) -> bool {
        self.index.contains_key(id)
    }

    fn visit_set(&self) -> Self::VisitSet {
        FxHashSet::default()
    }
}

impl<V> Neighbors for UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    type NeighborsIter<'a> = std::vec::IntoIter<V>
    where
        Self: 'a;

    fn neighbors(&self, from: &V) -> Self::NeighborsIter<'_> {
        let mut neighbors = self.adjacent(from).map(<[V]>::to_vec).unwrap_or_default();
        neighbors.sort_unstable();
        neighbors.into_iter()
    }

    fn degree(&self, from: &V) -> usize {
        self.adjacent(from).map_or(0, <[V]>::len)
    }
}

impl<V> VertexSet for UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    type VertexIdsIter<'a> = VertexIds<'a, V>
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        VertexIds {
            inner: self.vertices.iter(),
        }
    }
}

impl<V> Symmetric for UndirectedGraph<V> where V: Clone + Eq + Hash + Ord + fmt::Debug {}

pub struct VertexIds<'a, V> {
    inner: std::slice::Iter<'a, (V, Vec<V>)>,
}

impl<'a, V: Clone> Iterator for VertexIds<'a, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(vertex, _)| vertex.clone())
    }
}
