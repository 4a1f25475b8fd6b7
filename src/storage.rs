//! Storages of weighted directed edges.
//!
//! A _storage_ keeps the edges of a [`DirectedGraph`](crate::DirectedGraph)
//! and implements the [`Storage`](crate::core::Storage) trait. Vertices are
//! dense indices that are only ever appended.
//!
//! |                | **[AdjMatrix]** | **[AdjList]**   |
//! |----------------|-----------------|-----------------|
//! | add vertex     | _O(V)_          | _O*(1)_         |
//! | add edge       | _O(1)_          | _O(log d)_      |
//! | remove edge    | _O(1)_          | _O(log d)_      |
//! | lookup edge    | _O(1)_          | _O(log d)_      |
//! | successors     | _O(V)_          | _O(d)_          |
//! | space          | _O(V²)_         | _O(V + E)_      |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex out-degree
//! * _O*(..)_ – amortized complexity
//!
//! Both storages iterate successors in ascending order, so the edges of a
//! graph are enumerated in the same row-major order regardless of the
//! storage.

pub mod adj_list;
pub mod adj_matrix;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix};

#[cfg(test)]
mod tests {
    use crate::core::Storage;

    pub fn test_basic<S: Storage<u32>>() {
        let mut storage = S::empty();

        assert_eq!(storage.add_vertex(), 1);
        assert_eq!(storage.add_vertex(), 2);
        assert_eq!(storage.add_vertex(), 3);
        assert_eq!(storage.vertex_count(), 3);

        assert_eq!(storage.set_weight(0, 2, 7), None);
        assert_eq!(storage.set_weight(0, 1, 3), None);
        assert_eq!(storage.set_weight(2, 0, 1), None);
        assert_eq!(storage.edge_count(), 3);

        assert_eq!(storage.set_weight(0, 2, 9), Some(7));
        assert_eq!(storage.edge_count(), 3);
        assert_eq!(storage.weight(0, 2), Some(&9));
        assert_eq!(storage.weight(2, 1), None);
        assert_eq!(storage.weight(5, 1), None);

        assert_eq!(
            storage.successors(0).collect::<Vec<_>>(),
            vec![(1, &3), (2, &9)]
        );
        assert_eq!(storage.successors(9).count(), 0);

        // Zero weight means "no edge".
        assert_eq!(storage.set_weight(0, 1, 0), Some(3));
        assert_eq!(storage.weight(0, 1), None);
        assert_eq!(storage.edge_count(), 2);

        assert_eq!(storage.clear_weight(2, 0), Some(1));
        assert_eq!(storage.clear_weight(2, 0), None);
        assert_eq!(storage.edge_count(), 1);

        // New vertex has no edges and existing ones are kept.
        assert_eq!(storage.add_vertex(), 4);
        assert_eq!(storage.successors(3).count(), 0);
        assert_eq!(storage.weight(0, 2), Some(&9));

        storage.clear_edges();
        assert_eq!(storage.edge_count(), 0);
        assert_eq!(storage.vertex_count(), 4);
        assert_eq!(storage.successors(0).count(), 0);
    }
}
