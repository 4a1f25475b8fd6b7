use std::{fmt, hash::Hash};

use thiserror::Error;

use crate::{
    core::{Neighbors, Storage, VertexSet, Weight},
    DirectedGraph, UndirectedGraph,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex ids iterator count ({0}) is not equal to vertex count ({1})")]
    VertexIdsVertexCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to expected ({1})")]
    HandshakingLemma(usize, usize),
    #[error("self-loop on vertex {0}")]
    SelfLoop(String),
    #[error("edge {0} -> {1} has weight that is not positive")]
    NonPositiveWeight(usize, usize),
    #[error("neighbors of vertex {0} are not strictly ascending")]
    NeighborsUnordered(String),
    #[error("edge {0} - {1} is not symmetric")]
    Asymmetric(String, String),
    #[error("neighbor {1} of vertex {0} does not exist")]
    DanglingNeighbor(String, String),
}

fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
where
    F: FnOnce(usize, usize) -> ConsistencyCheckError,
{
    if actual == expected {
        Ok(())
    } else {
        Err(error(actual, expected))
    }
}

fn check_neighbors_ascending<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: Neighbors + VertexSet,
{
    for v in graph.vertex_ids() {
        let neighbors = graph.neighbors(&v).collect::<Vec<_>>();

        if neighbors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConsistencyCheckError::NeighborsUnordered(format!("{v:?}")));
        }
    }

    Ok(())
}

pub fn check_consistency_directed<W, S>(
    graph: &DirectedGraph<W, S>,
) -> Result<(), ConsistencyCheckError>
where
    W: Weight,
    S: Storage<W>,
{
    let vertex_count = graph.vertex_count();

    cmp(
        graph.vertex_ids().count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsVertexCountMismatch,
    )?;

    let edge_count = graph.edge_count();

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    for (src, dst, weight) in graph.edges() {
        if src == dst {
            return Err(ConsistencyCheckError::SelfLoop(src.to_string()));
        }

        if !(weight > W::zero()) {
            return Err(ConsistencyCheckError::NonPositiveWeight(src, dst));
        }
    }

    let deg_sum = graph
        .vertex_ids()
        .map(|v| graph.degree(&v))
        .sum::<usize>();

    cmp(deg_sum, edge_count, ConsistencyCheckError::HandshakingLemma)?;

    check_neighbors_ascending(graph)
}

pub fn check_consistency_undirected<V>(
    graph: &UndirectedGraph<V>,
) -> Result<(), ConsistencyCheckError>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    let vertex_count = graph.vertex_count();

    cmp(
        graph.vertex_ids().count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsVertexCountMismatch,
    )?;

    for u in graph.vertices() {
        for v in graph.adjacent(u).unwrap_or_default() {
            if u == v {
                return Err(ConsistencyCheckError::SelfLoop(format!("{u:?}")));
            }

            if !graph.contains_vertex(v) {
                return Err(ConsistencyCheckError::DanglingNeighbor(
                    format!("{u:?}"),
                    format!("{v:?}"),
                ));
            }

            if !graph.contains_edge(v, u) {
                return Err(ConsistencyCheckError::Asymmetric(
                    format!("{u:?}"),
                    format!("{v:?}"),
                ));
            }
        }
    }

    let edge_count = graph.edge_count();

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    let deg_sum = graph
        .vertex_ids()
        .map(|v| graph.degree(&v))
        .sum::<usize>();

    cmp(
        deg_sum,
        2 * edge_count,
        ConsistencyCheckError::HandshakingLemma,
    )?;

    // Also rules out duplicate entries in the neighbor lists.
    check_neighbors_ascending(graph)
}
