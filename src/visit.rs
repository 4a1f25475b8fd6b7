//! Graph traversals.
//!
//! All traversals in this module are **iterative**, that is, they don't use
//! recursion but an explicit stack or queue. This means that
//!
//! * the visitor is lazy and can be stopped at any vertex,
//! * the visitor state is independent of the graph itself, allowing mutations
//!   of the graph between the steps,
//! * traversal is not limited by the size of the program stack.
//!
//! Neighbors of a vertex are discovered in ascending order, so the order of
//! visited vertices is deterministic. A visitor cannot be rewound; to traverse
//! again, create a fresh one.

pub mod bfs;
pub mod dfs;

mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::Dfs,
    visit_set::{TypedBitSet, VisitSet},
};

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and thus allows modifications to the graph
    /// between individual visitor steps.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }

    /// Collects the visited elements, stopping right after `end` is visited.
    ///
    /// If `end` is `None` or never reached, the traversal runs to completion.
    fn collect_until(self, graph: &G, end: Option<&Self::Item>) -> Vec<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        let mut visited = Vec::new();

        for item in self.into_iter(graph) {
            let done = end == Some(&item);
            visited.push(item);

            if done {
                break;
            }
        }

        visited
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}
