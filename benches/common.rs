#![allow(dead_code)]

use adjgraph::{storage::AdjList, DirectedGraph, UndirectedGraph};
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the generator in adjgraph::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

// Half of the edges go from the higher index to the lower one so that the
// graph has cycles.
fn oriented(u: usize, v: usize, rng: &mut Rng) -> (usize, usize) {
    if rng.bool() {
        (u, v)
    } else {
        (v, u)
    }
}

pub fn adjgraph_random_directed(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::new();

    for _ in 0..vertex_count {
        graph.add_vertex();
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let (src, dst) = oriented(u, v, rng);
        graph.add_edge(src, dst, rng.u32(1..100));
    }

    graph
}

pub fn adjgraph_random_directed_list(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> DirectedGraph<u32, AdjList<u32>> {
    let mut graph = DirectedGraph::new_in(AdjList::new());

    for _ in 0..vertex_count {
        graph.add_vertex();
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let (src, dst) = oriented(u, v, rng);
        graph.add_edge(src, dst, rng.u32(1..100));
    }

    graph
}

pub fn adjgraph_random_undirected(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();

    for v in 0..vertex_count {
        graph.add_vertex(v as u32);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(u as u32, v as u32);
    }

    graph
}

pub fn petgraph_random_directed(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), u32, petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let (src, dst) = oriented(u, v, rng);
        graph.add_edge(NodeIndex::new(src), NodeIndex::new(dst), rng.u32(1..100));
    }

    graph
}

pub fn petgraph_random_undirected(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), (), petgraph::Undirected> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}
