use std::collections::{btree_map, BTreeMap};

use crate::core::{Storage, Weight};

/// Sparse adjacency list with ordered successor maps.
///
/// Each vertex owns a map from successor index to the edge weight. Only
/// weights greater than [zero](Weight::zero) are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjList<W> {
    rows: Vec<BTreeMap<usize, W>>,
    n_edges: usize,
}

impl<W: Weight> AdjList<W> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            n_edges: 0,
        }
    }
}

impl<W: Weight> Default for AdjList<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Storage<W> for AdjList<W> {
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
        self.rows.push(BTreeMap::new());
        self.rows.len()
    }

    fn weight(&self, src: usize, dst: usize) -> Option<&W> {
        self.rows.get(src).and_then(|row| row.get(&dst))
    }

    fn set_weight(&mut self, src: usize, dst: usize, weight: W) -> Option<W> {
        if !(weight > W::zero()) {
            return self.clear_weight(src, dst);
        }

        let prev = self.rows[src].insert(dst, weight);
        if prev.is_none() {
            self.n_edges += 1;
        }
        prev
    }

    fn clear_weight(&mut self, src: usize, dst: usize) -> Option<W> {
        let prev = self.rows[src].remove(&dst);
        if prev.is_some() {
            self.n_edges -= 1;
        }
        prev
    }

    fn successors(&self, src: usize) -> Self::SuccessorsIter<'_> {
        Successors {
            inner: self.rows.get(src).map(BTreeMap::iter),
        }
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn clear_edges(&mut self) {
        for row in self.rows.iter_mut() {
            row.clear();
        }
        self.n_edges = 0;
    }
}

pub struct Successors<'a, W> {
    inner: Option<btree_map::Iter<'a, usize, W>>,
}

impl<'a, W> Iterator for Successors<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next()
            .map(|(dst, weight)| (*dst, weight))
    }
}
