//! Collection of simple utilities for various properties and calculations.

/// Returns the number of edges in an undirected [complete graph] given the
/// node count. Saturates at `usize::MAX` when the count is not representable.
///
/// [complete graph]: https://en.wikipedia.org/wiki/Complete_graph
///
/// # Examples
///
/// ```
/// use geograph::core::facts::complete_graph_edge_count;
///
/// assert_eq!(complete_graph_edge_count(5), 10);
/// assert_eq!(complete_graph_edge_count(1), 0);
/// ```
pub fn complete_graph_edge_count(node_count: usize) -> usize {
    checked_complete_graph_edge_count(node_count).unwrap_or(usize::MAX)
}

/// Same as [`complete_graph_edge_count`], but returns `None` on overflow.
pub fn checked_complete_graph_edge_count(node_count: usize) -> Option<usize> {
    let other = node_count.saturating_sub(1);
    // Halve the even factor first so that the product is exact.
    if node_count % 2 == 0 {
        (node_count / 2).checked_mul(other)
    } else {
        node_count.checked_mul(other / 2)
    }
}

/// Position of the unordered pair `{row, col}` (`row != col`) in the strict
/// lower triangle of a square matrix, stored row by row.
pub fn pair_index(row: usize, col: usize) -> usize {
    // Make sure that the coordinates are in the lower triangle.
    let (row, col) = if row > col { (row, col) } else { (col, row) };
    // The rows are 0 + 1 + 2 + ... + (n - 1) = n (n - 1) / 2.
    row * (row - 1) / 2 + col
}

/// Inverse of [`pair_index`]. Returns `(row, col)` with `row > col`.
pub fn pair_coords(index: usize) -> (usize, usize) {
    // index = row * (row - 1) / 2 + col => row^2 - row - 2 * (index - col) = 0
    //
    // Solve the quadratic equation for col = 0 and round down, then fix the
    // rounding errors of the floating point square root.
    let mut row = ((1.0 + (1.0 + 8.0 * index as f64).sqrt()) / 2.0) as usize;
    while row > 1 && row * (row - 1) / 2 > index {
        row -= 1;
    }
    while (row + 1) * row / 2 <= index {
        row += 1;
    }
    let col = index - row * (row - 1) / 2;
    (row, col)
}
