use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap},
};

use rustc_hash::FxHashMap;

use crate::{
    core::{weight::Weighted, EdgeWeights, Neighbors, Weight},
    visit::VisitSet,
};

use super::{Error, ShortestPaths};

pub fn dijkstra<W, G>(
    graph: &G,
    source: G::VertexId,
    goal: Option<G::VertexId>,
) -> Result<ShortestPaths<W, G>, Error>
where
    G: Neighbors + EdgeWeights<W>,
    W: Weight,
{
    if !graph.contains_vertex(&source) {
        return Err(Error::SourceAbsent);
    }

    tracing::trace!(?source, ?goal, "running dijkstra");

    let mut visited = graph.visit_set();
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    dist.insert(source.clone(), W::zero());
    queue.push(Reverse(Weighted(source.clone(), W::Ord::from(W::zero()))));

    while let Some(Reverse(Weighted(vertex, vertex_dist))) = queue.pop() {
        let vertex_dist: W = vertex_dist.into();

        // This can happen due to duplication of vertices when doing relaxation
        // in our implementation.
        if visited.is_visited(&vertex) {
            continue;
        }

        if goal.as_ref() == Some(&vertex) {
            // Mark as visited, because below is a test that checks that goal
            // was visited.
            visited.visit(vertex);
            break;
        }

        for next in graph.neighbors(&vertex) {
            if visited.is_visited(&next) {
                continue;
            }

            let edge_dist = match graph.edge_weight(&vertex, &next) {
                Some(weight) => weight.clone(),
                None => continue,
            };

            if !W::is_unsigned() && edge_dist < W::zero() {
                return Err(Error::NegativeWeight);
            }

            let next_dist = match vertex_dist.clone().checked_add(edge_dist) {
                Some(next_dist) => next_dist,
                // Not representable, the path is never relaxed.
                None => continue,
            };

            match dist.entry(next.clone()) {
                Entry::Occupied(curr_dist) => {
                    // Relaxation operation. If the distance is better than what
                    // we had so far, update it.
                    if next_dist < *curr_dist.get() {
                        *curr_dist.into_mut() = next_dist.clone();
                        // Instead of decreasing the priority of `next`, it is
                        // added again. The stale entry is skipped when popped.
                        queue.push(Reverse(Weighted(next.clone(), next_dist.into())));
                        pred.insert(next, vertex.clone());
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist.clone());
                    queue.push(Reverse(Weighted(next.clone(), next_dist.into())));
                    pred.insert(next, vertex.clone());
                }
            }
        }

        // The vertex is finished.
        visited.visit(vertex);
    }

    if let Some(ref goal) = goal {
        if !visited.is_visited(goal) {
            return Err(Error::GoalNotReached);
        }
    }

    tracing::trace!(reached = dist.len(), "dijkstra finished");

    Ok(ShortestPaths { source, dist, pred })
}
