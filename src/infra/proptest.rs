use std::{fmt, hash::Hash, marker::PhantomData};

use proptest::{
    prelude::Rng,
    strategy::{Just, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{core::Weight, DirectedGraph, UndirectedGraph};

/// Strategy for directed graphs with edge weights generated by `weight`.
///
/// Weights that are not positive are generated too and do not produce an
/// edge, as in [`DirectedGraph::add_edge`].
pub fn graph_directed<W>(weight: W) -> GraphStrategy<Just<()>, W, DirectedGraph<W::Value>>
where
    W: Strategy,
    W::Value: Weight,
{
    GraphStrategy::new(Just(()), weight)
}

/// Strategy for undirected graphs with vertex labels generated by `vertex`.
///
/// Generated labels may repeat, in which case the vertices are merged.
pub fn graph_undirected<V>(vertex: V) -> GraphStrategy<V, Just<()>, UndirectedGraph<V::Value>>
where
    V: Strategy,
    V::Value: Clone + Eq + Hash + Ord,
{
    GraphStrategy::new(vertex, Just(()))
}

/// Construction of a graph from generated vertices and edges between them.
pub trait FromParts<V, E>: Sized {
    /// Builds the graph. The endpoints of edges are indices into `vertices`.
    ///
    /// If `acyclic` is set, edges that would close a cycle are skipped.
    fn from_parts(vertices: Vec<V>, edges: Vec<(usize, usize, E)>, acyclic: bool) -> Self;
}

impl<W: Weight> FromParts<(), W> for DirectedGraph<W> {
    fn from_parts(vertices: Vec<()>, edges: Vec<(usize, usize, W)>, acyclic: bool) -> Self {
        let mut graph = DirectedGraph::new();

        for _ in vertices {
            graph.add_vertex();
        }

        for (src, dst, weight) in edges {
            // Topological order is given by the indices.
            if acyclic && src > dst {
                continue;
            }

            graph.add_edge(src, dst, weight);
        }

        graph
    }
}

impl<V> FromParts<V, ()> for UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    fn from_parts(vertices: Vec<V>, edges: Vec<(usize, usize, ())>, acyclic: bool) -> Self {
        let mut graph = UndirectedGraph::new();

        for vertex in vertices.iter().cloned() {
            graph.add_vertex(vertex);
        }

        for (u, v, ()) in edges {
            let u = vertices[u].clone();
            let v = vertices[v].clone();

            if acyclic && graph.bfs(u.clone(), Some(v.clone())).last() == Some(&v) {
                continue;
            }

            graph.add_edge(u, v);
        }

        graph
    }
}

pub struct GraphStrategy<V: Strategy, E: Strategy, G> {
    vertex: V,
    edge: E,
    graph: PhantomData<fn() -> G>,
    params: StrategyParams,
}

// G is phantom data, we should not require Debug bound on it.
impl<V: Strategy, E: Strategy, G> fmt::Debug for GraphStrategy<V, E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("vertex", &self.vertex)
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<V: Strategy, E: Strategy, G> GraphStrategy<V, E, G> {
    pub fn new(vertex: V, edge: E) -> Self {
        Self::with_params(vertex, edge, StrategyParams::default())
    }

    pub fn with_params(vertex: V, edge: E, params: StrategyParams) -> Self {
        Self {
            vertex,
            edge,
            graph: PhantomData,
            params,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_directed(1..10).max_size(100).acyclic()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(acyclic);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    acyclic: bool,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 128,
            acyclic: false,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl<V: Strategy, E: Strategy, G> Strategy for GraphStrategy<V, E, G>
where
    G: FromParts<V::Value, E::Value> + fmt::Debug,
{
    type Tree = GraphValueTree<V::Tree, E::Tree, G>;
    type Value = G;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f32>() * self.params.density;

        let mut vertices = Vec::with_capacity(n);

        while vertices.len() < n {
            vertices.push(self.vertex.new_tree(runner)?);
        }

        let mut edges = Vec::new();

        // Every pair of distinct vertices is considered in both directions
        // and connected with probability p.
        for u in 0..n {
            for v in 0..n {
                if u != v && runner.rng().gen_bool(p as f64) {
                    edges.push((u, v, self.edge.new_tree(runner)?));
                }
            }
        }

        Ok(GraphValueTree {
            vertices,
            edges,
            acyclic: self.params.acyclic,
            removed_vertices: FxHashSet::default(),
            removed_edges: FxHashSet::default(),
            next: Some(Shrink::Edge(0)),
            last: None,
            graph: PhantomData,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    Edge(usize),
    Vertex(usize),
}

/// Value tree that shrinks a graph by removing its edges one by one and then
/// its vertices one by one.
pub struct GraphValueTree<V: ValueTree, E: ValueTree, G> {
    vertices: Vec<V>,
    edges: Vec<(usize, usize, E)>,
    acyclic: bool,
    removed_vertices: FxHashSet<usize>,
    removed_edges: FxHashSet<usize>,
    next: Option<Shrink>,
    last: Option<Shrink>,
    graph: PhantomData<fn() -> G>,
}

impl<V: ValueTree, E: ValueTree, G> GraphValueTree<V, E, G> {
    fn advance(&self, shrink: Shrink) -> Option<Shrink> {
        match shrink {
            Shrink::Edge(e) if e + 1 < self.edges.len() => Some(Shrink::Edge(e + 1)),
            Shrink::Edge(_) if !self.vertices.is_empty() => Some(Shrink::Vertex(0)),
            Shrink::Vertex(v) if v + 1 < self.vertices.len() => Some(Shrink::Vertex(v + 1)),
            _ => None,
        }
    }

    fn is_removed(&self, shrink: Shrink) -> bool {
        match shrink {
            Shrink::Edge(e) => e >= self.edges.len() || self.removed_edges.contains(&e),
            Shrink::Vertex(v) => v >= self.vertices.len() || self.removed_vertices.contains(&v),
        }
    }
}

impl<V: ValueTree, E: ValueTree, G> ValueTree for GraphValueTree<V, E, G>
where
    G: FromParts<V::Value, E::Value> + fmt::Debug,
{
    type Value = G;

    fn current(&self) -> Self::Value {
        // Indices shift after removing vertices.
        let mut ids = Vec::with_capacity(self.vertices.len());
        let mut vertices = Vec::with_capacity(self.vertices.len());

        for (v, vertex) in self.vertices.iter().enumerate() {
            if self.removed_vertices.contains(&v) {
                ids.push(None);
            } else {
                ids.push(Some(vertices.len()));
                vertices.push(vertex.current());
            }
        }

        let edges = self
            .edges
            .iter()
            .enumerate()
            .filter(|(e, _)| !self.removed_edges.contains(e))
            .filter_map(|(_, (src, dst, edge))| Some((ids[*src]?, ids[*dst]?, edge.current())))
            .collect();

        G::from_parts(vertices, edges, self.acyclic)
    }

    fn simplify(&mut self) -> bool {
        while let Some(shrink) = self.next {
            self.next = self.advance(shrink);

            if self.is_removed(shrink) {
                continue;
            }

            match shrink {
                Shrink::Edge(e) => self.removed_edges.insert(e),
                Shrink::Vertex(v) => self.removed_vertices.insert(v),
            };

            self.last = Some(shrink);
            return true;
        }

        false
    }

    fn complicate(&mut self) -> bool {
        // The last removal made the test pass, so it is reverted and the
        // shrinking continues with the next candidate.
        match self.last.take() {
            Some(Shrink::Edge(e)) => {
                self.removed_edges.remove(&e);
                true
            }
            Some(Shrink::Vertex(v)) => {
                self.removed_vertices.remove(&v);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn shrinks_to_empty() {
        let mut runner = TestRunner::deterministic();
        let mut tree = graph_directed(1u32..10)
            .max_size(8)
            .new_tree(&mut runner)
            .unwrap();

        while tree.simplify() {}

        let graph = tree.current();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn complicate_restores() {
        let mut runner = TestRunner::deterministic();

        loop {
            let mut tree = graph_directed(1u32..10)
                .max_size(8)
                .new_tree(&mut runner)
                .unwrap();

            let before = tree.current();
            if before.edge_count() == 0 {
                continue;
            }

            assert!(tree.simplify());
            assert_eq!(tree.current().edge_count(), before.edge_count() - 1);

            assert!(tree.complicate());
            assert_eq!(
                tree.current().edges().collect::<Vec<_>>(),
                before.edges().collect::<Vec<_>>()
            );
            break;
        }
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_max_size(graph in graph_directed(any::<i32>()).max_size(16)) {
            prop_assert!(graph.vertex_count() <= 16);
        }
    }
}
