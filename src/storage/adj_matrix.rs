use std::{iter::Enumerate, slice};

use crate::core::{Storage, Weight};

/// Dense adjacency matrix.
///
/// Rows are owned vectors of weights and [zero](Weight::zero) means "no
/// edge". Adding a vertex appends a zero column to every row and a new zero
/// row. The matrix never shrinks.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjMatrix<W> {
    rows: Vec<Vec<W>>,
    n_edges: usize,
}

impl<W: Weight> AdjMatrix<W> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            n_edges: 0,
        }
    }

    /// Returns the raw row of weights of vertex `src`.
    pub fn row(&self, src: usize) -> Option<&[W]> {
        self.rows.get(src).map(Vec::as_slice)
    }
}

impl<W: Weight> Default for AdjMatrix<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Storage<W> for AdjMatrix<W> {
    type SuccessorsIter<'a> = Successors<'a, W>
    where
        Self: 'a,
        W: 'a;

    fn empty() -> Self {
        Self::new()
    }

    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn add_vertex(&mut self) -> usize {
        let n = self.rows.len() + 1;

        for row in self.rows.iter_mut() {
            row.push(W::zero());
        }
        self.rows.push(vec![W::zero(); n]);

        n
    }

    fn weight(&self, src: usize, dst: usize) -> Option<&W> {
        self.rows
            .get(src)
            .and_then(|row| row.get(dst))
            .filter(|weight| **weight > W::zero())
    }

    fn set_weight(&mut self, src: usize, dst: usize, weight: W) -> Option<W> {
        let present = weight > W::zero();
        let prev = std::mem::replace(&mut self.rows[src][dst], weight);

        match (prev > W::zero(), present) {
            (false, true) => self.n_edges += 1,
            (true, false) => self.n_edges -= 1,
            _ => {}
        }

        (prev > W::zero()).then_some(prev)
    }

    fn clear_weight(&mut self, src: usize, dst: usize) -> Option<W> {
        self.set_weight(src, dst, W::zero())
    }

    fn successors(&self, src: usize) -> Self::SuccessorsIter<'_> {
        let row = self.rows.get(src).map(Vec::as_slice).unwrap_or(&[]);
        Successors {
            inner: row.iter().enumerate(),
        }
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn clear_edges(&mut self) {
        for row in self.rows.iter_mut() {
            row.fill(W::zero());
        }
        self.n_edges = 0;
    }
}

pub struct Successors<'a, W> {
    inner: Enumerate<slice::Iter<'a, W>>,
}

impl<'a, W: Weight> Iterator for Successors<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|(_, weight)| **weight > W::zero())
    }
}
