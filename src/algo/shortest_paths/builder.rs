use std::marker::PhantomData;

use crate::core::{EdgeWeights, GraphBase, Neighbors, Weight};

use super::{dijkstra::dijkstra, Error, ShortestPaths};

/// Builder for [`ShortestPaths`].
pub struct ShortestPathsBuilder<'a, W, G>
where
    G: GraphBase,
{
    graph: &'a G,
    goal: Option<G::VertexId>,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> ShortestPaths<W, G>
where
    G: GraphBase,
{
    /// Starts building the algorithm run on given graph.
    pub fn on(graph: &G) -> ShortestPathsBuilder<'_, W, G> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G> ShortestPathsBuilder<'a, W, G>
where
    G: GraphBase,
{
    /// Stops the search as soon as the goal vertex is finalized. The run then
    /// fails with [`Error::GoalNotReached`] if the goal is not reachable.
    pub fn goal(self, goal: G::VertexId) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    /// Runs the algorithm from given source vertex.
    pub fn run(self, source: G::VertexId) -> Result<ShortestPaths<W, G>, Error>
    where
        G: Neighbors + EdgeWeights<W>,
        W: Weight,
    {
        dijkstra(self.graph, source, self.goal)
    }
}
