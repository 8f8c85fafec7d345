use crate::cell::Cell;
use crate::grid::Grid;
use crate::neighbors::count_alive_neighbors;

/// Computes the generation after `current` into `next`.
///
/// Every neighbor count is taken from `current`, which is never written, so
/// the order cells are visited in cannot influence the result. `next` is
/// cleared first and ends up with exactly one cell per grid position.
pub fn evolve_into(current: &Grid, next: &mut Vec<Cell>) {
    next.clear();
    next.extend(
        current
            .cells()
            .map(|(row, col, cell)| cell.evolve(count_alive_neighbors(current, row, col))),
    );
}
