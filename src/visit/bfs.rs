use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
};

use rustc_hash::FxHashSet;

use crate::core::{GraphBase, Neighbors};

use super::{VisitSet, Visitor};

/// Breadth-first traversal.
///
/// A vertex is marked as visited when it is dequeued. Its unvisited neighbors
/// are enqueued in ascending order.
pub struct Bfs<G>
where
    G: GraphBase,
{
    queue: VecDeque<G::VertexId>,
    visited: FxHashSet<G::VertexId>,
}

pub struct BfsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut Bfs<G>,
}

impl<G> Bfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::with_capacity_and_hasher(
                graph.vertex_count(),
                BuildHasherDefault::default(),
            ),
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> BfsRooted<'_, G> {
        self.queue.clear();
        self.queue.push_back(root);
        BfsRooted { raw: self }
    }

    pub fn reset(&mut self) {
        self.queue.clear();
        self.visited.reset_visited();
    }

    pub fn visited(&self) -> &impl VisitSet<G::VertexId> {
        &self.visited
    }
}

impl<'a, G> Visitor<G> for BfsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        let Bfs { queue, visited } = &mut *self.raw;

        while let Some(vertex) = queue.pop_front() {
            if !graph.contains_vertex(&vertex) || visited.is_visited(&vertex) {
                continue;
            }

            visited.visit(vertex.clone());

            let next = graph
                .neighbors(&vertex)
                .filter(|neighbor| !visited.is_visited(neighbor))
                .collect::<Vec<_>>();
            queue.extend(next);

            return Some(vertex);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{DirectedGraph, UndirectedGraph};

    use super::*;

    #[test]
    fn level_order_directed() {
        let graph = DirectedGraph::from_edges([(0, 2, 1u32), (0, 1, 1), (1, 3, 1), (2, 3, 1), (3, 4, 1)]);

        let mut bfs = Bfs::new(&graph);
        let order = bfs.start(0).into_iter(&graph).collect::<Vec<_>>();

        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn level_order_undirected() {
        let graph = UndirectedGraph::from_edges([("m", "z"), ("m", "b"), ("b", "a"), ("z", "c")]);

        let mut bfs = Bfs::new(&graph);
        let order = bfs.start("m").into_iter(&graph).collect::<Vec<_>>();

        assert_eq!(order, vec!["m", "b", "z", "a", "c"]);
    }

    #[test]
    fn collect_until_stops() {
        let graph = DirectedGraph::from_edges([(0, 1, 1u32), (0, 2, 1), (1, 3, 1)]);

        let mut bfs = Bfs::new(&graph);
        let order = bfs.start(0).collect_until(&graph, Some(&2));

        assert_eq!(order, vec![0, 1, 2]);
    }
}
