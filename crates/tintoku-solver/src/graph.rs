//! The sudoku constraint graph.

use std::sync::OnceLock;

use tintoku_core::{CellSet, Position, position::CELL_COUNT};

/// The constraint graph of a 9×9 sudoku board.
///
/// One node per cell, an (undirected) edge between every pair of distinct
/// cells sharing a row, a column, or a 3×3 box. The graph is simple: a pair
/// of cells reachable through more than one shared house (row and box, say)
/// still carries a single edge. Every node has exactly 20 neighbors: 8 row
/// peers, 8 column peers, and the 4 box peers not already counted.
///
/// The graph does not depend on any particular puzzle and never changes once
/// built, so it is usually built once per process via [`shared`] and passed
/// by reference to every solve call.
///
/// [`shared`]: ConstraintGraph::shared
///
/// # Examples
///
/// ```
/// use tintoku_core::Position;
/// use tintoku_solver::ConstraintGraph;
///
/// let graph = ConstraintGraph::shared();
/// for pos in Position::all() {
///     assert_eq!(graph.degree(pos), 20);
/// }
/// assert!(graph.are_peers(Position::new(0, 0), Position::new(0, 8)));
/// assert!(!graph.are_peers(Position::new(0, 0), Position::new(8, 4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGraph {
    /// `neighbors[i]` is the neighbor set of the cell with row-major index `i`.
    neighbors: [CellSet; CELL_COUNT],
}

impl Default for ConstraintGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintGraph {
    /// Builds the constraint graph.
    ///
    /// Pure and deterministic: every call produces a structurally identical
    /// graph. Prefer [`shared`](ConstraintGraph::shared) unless an owned
    /// instance is specifically needed.
    #[must_use]
    pub fn new() -> Self {
        let mut neighbors = [CellSet::EMPTY; CELL_COUNT];
        for pos in Position::all() {
            let set = &mut neighbors[pos.index()];
            for i in 0..9 {
                set.insert(Position::new(pos.row(), i));
                set.insert(Position::new(i, pos.col()));
            }
            let box_row = pos.row() / 3 * 3;
            let box_col = pos.col() / 3 * 3;
            for row in box_row..box_row + 3 {
                for col in box_col..box_col + 3 {
                    set.insert(Position::new(row, col));
                }
            }
            // a cell is not its own neighbor
            set.remove(pos);
        }
        Self { neighbors }
    }

    /// Returns the process-wide shared graph, built on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<ConstraintGraph> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }

    /// Returns the neighbor set of a cell: all cells that may not share its
    /// digit.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> CellSet {
        self.neighbors[pos.index()]
    }

    /// Returns the number of neighbors of a cell (always 20 on the 9×9
    /// board).
    #[must_use]
    pub fn degree(&self, pos: Position) -> usize {
        self.neighbors(pos).len()
    }

    /// Returns `true` if the two cells are connected by an edge.
    #[must_use]
    pub fn are_peers(&self, a: Position, b: Position) -> bool {
        self.neighbors(a).contains(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_node_has_20_neighbors() {
        let graph = ConstraintGraph::new();
        for pos in Position::all() {
            assert_eq!(graph.degree(pos), 20, "wrong degree at {pos}");
        }
    }

    #[test]
    fn test_no_self_loops() {
        let graph = ConstraintGraph::new();
        for pos in Position::all() {
            assert!(!graph.are_peers(pos, pos), "self loop at {pos}");
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = ConstraintGraph::new();
        for a in Position::all() {
            for b in graph.neighbors(a) {
                assert!(graph.are_peers(b, a), "asymmetric edge {a} -> {b}");
            }
        }
    }

    #[test]
    fn test_neighbors_match_shared_houses() {
        // The neighbor set of (r, c) must be exactly: the rest of row r, the
        // rest of column c, and the rest of its box.
        let graph = ConstraintGraph::new();
        for pos in Position::all() {
            let expected: CellSet = Position::all()
                .filter(|other| {
                    *other != pos
                        && (other.row() == pos.row()
                            || other.col() == pos.col()
                            || other.box_index() == pos.box_index())
                })
                .collect();
            assert_eq!(graph.neighbors(pos), expected, "wrong neighbors at {pos}");
        }
    }

    #[test]
    fn test_corner_neighbor_set() {
        let graph = ConstraintGraph::new();
        let corner = Position::new(0, 0);
        let neighbors = graph.neighbors(corner);

        // row peers
        for col in 1..9 {
            assert!(neighbors.contains(Position::new(0, col)));
        }
        // column peers
        for row in 1..9 {
            assert!(neighbors.contains(Position::new(row, 0)));
        }
        // box peers not already counted
        for pos in [
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(2, 1),
            Position::new(2, 2),
        ] {
            assert!(neighbors.contains(pos));
        }
        assert_eq!(neighbors.len(), 20);
    }

    #[test]
    fn test_build_is_idempotent() {
        assert_eq!(ConstraintGraph::new(), ConstraintGraph::new());
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let a = ConstraintGraph::shared();
        let b = ConstraintGraph::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(*a, ConstraintGraph::new());
    }
}
