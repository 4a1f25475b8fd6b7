use std::{collections::HashSet, hash::BuildHasherDefault};

use rustc_hash::FxHashSet;

use crate::core::{GraphBase, Neighbors};

use super::{VisitSet, Visitor};

/// Depth-first traversal.
///
/// A vertex is marked as visited when it is popped from the stack. Its
/// unvisited neighbors are pushed in descending order so that they are popped
/// (and thus visited) in ascending order.
pub struct Dfs<G>
where
    G: GraphBase,
{
    stack: Vec<G::VertexId>,
    // Not using the graph's visit set, because the visitor is detached from
    // the graph and the graph may change between the steps.
    visited: FxHashSet<G::VertexId>,
}

pub struct DfsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut Dfs<G>,
}

impl<G> Dfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        Self {
            stack: Vec::new(),
            visited: HashSet::with_capacity_and_hasher(
                graph.vertex_count(),
                BuildHasherDefault::default(),
            ),
        }
    }

    /// Starts the traversal from given root.
    ///
    /// Vertices visited by previous traversals are remembered and not visited
    /// again.
    pub fn start(&mut self, root: G::VertexId) -> DfsRooted<'_, G> {
        self.stack.clear();
        self.stack.push(root);
        DfsRooted { raw: self }
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.reset_visited();
    }

    pub fn visited(&self) -> &impl VisitSet<G::VertexId> {
        &self.visited
    }
}

impl<'a, G> Visitor<G> for DfsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        let Dfs { stack, visited } = &mut *self.raw;

        while let Some(vertex) = stack.pop() {
            if !graph.contains_vertex(&vertex) || visited.is_visited(&vertex) {
                continue;
            }

            visited.visit(vertex.clone());

            let next = graph
                .neighbors(&vertex)
                .filter(|neighbor| !visited.is_visited(neighbor))
                .collect::<Vec<_>>();
            stack.extend(next.into_iter().rev());

            return Some(vertex);
        }

        None
    }
}
