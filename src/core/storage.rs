use super::weight::Weight;

/// Storage of weighted directed edges over dense vertex indices.
///
/// A weight that is not greater than [zero](Weight::zero) means "no edge".
/// The storage does not validate indices; the methods may panic when given an
/// index outside `0..vertex_count()`, except for [`weight`](Storage::weight)
/// and [`successors`](Storage::successors) which treat such indices as
/// having no edges.
pub trait Storage<W: Weight> {
    type SuccessorsIter<'a>: Iterator<Item = (usize, &'a W)>
    where
        Self: 'a,
        W: 'a;

    fn empty() -> Self;

    fn vertex_count(&self) -> usize;

    /// Appends a new vertex and returns the new vertex count.
    fn add_vertex(&mut self) -> usize;

    fn weight(&self, src: usize, dst: usize) -> Option<&W>;

    /// Sets the weight of the edge, returning the previous one. A weight not
    /// greater than zero removes the edge.
    fn set_weight(&mut self, src: usize, dst: usize, weight: W) -> Option<W>;

    /// Removes the edge, returning its weight.
    fn clear_weight(&mut self, src: usize, dst: usize) -> Option<W>;

    /// Returns the successors of `src` in ascending order together with the
    /// edge weights.
    fn successors(&self, src: usize) -> Self::SuccessorsIter<'_>;

    fn edge_count(&self) -> usize;

    fn clear_edges(&mut self);
}
