use crate::grid::Grid;

/// Moore neighborhood offsets, center excluded.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the number of alive neighbors for a cell.
///
/// The board is closed: positions past an edge count as dead, nothing wraps.
pub fn count_alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;

    for (dr, dc) in OFFSETS {
        let (Some(neighbor_row), Some(neighbor_col)) =
            (row.checked_add_signed(dr), col.checked_add_signed(dc))
        else {
            continue;
        };

        if grid.is_alive(neighbor_row, neighbor_col) {
            count += 1;
        }
    }

    count
}
