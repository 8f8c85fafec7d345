use crate::cell::Cell;
use crate::error::LifeError;
use std::fmt;

/// A bounded, row-major board of cells.
///
/// The dimensions are fixed at construction. Reads outside the board are
/// answered with a dead cell; writes are only reachable through
/// [`Engine`](crate::Engine) so that every change is published.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    generation: u64,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let invalid = LifeError::InvalidDimension { width, height };
        let len = width
            .checked_mul(height)
            .filter(|_| width > 0 && height > 0)
            .ok_or_else(|| invalid.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::default());

        Ok(Grid {
            width,
            height,
            cells,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations evolved since the last reset or configuration.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        self.index(row, col).ok_or(LifeError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        })
    }

    /// The cell at `(row, col)`, or a dead cell outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.index(row, col)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i].alive)
    }

    /// Iterates over all `(row, col, cell)` triples in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / self.width, i % self.width, cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    pub(crate) fn toggle(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        let i = self.checked_index(row, col)?;
        let cell = &mut self.cells[i];
        *cell = if cell.alive {
            Cell::default()
        } else {
            Cell::newborn()
        };
        Ok(())
    }

    pub(crate) fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        let i = self.checked_index(row, col)?;
        let cell = &mut self.cells[i];
        if cell.alive != alive {
            *cell = if alive { Cell::newborn() } else { Cell::default() };
        }
        Ok(())
    }

    /// Makes an in-bounds cell alive with age 1; returns false when skipped.
    pub(crate) fn revive(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = Cell::newborn();
                true
            }
            None => false,
        }
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    /// Kills every cell and rewinds the generation counter.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.generation = 0;
    }

    /// Swaps in the next generation computed into `next`.
    ///
    /// `next` receives the previous cells so its allocation can be reused.
    pub(crate) fn commit_generation(&mut self, next: &mut Vec<Cell>) {
        debug_assert_eq!(next.len(), self.cells.len());
        std::mem::swap(&mut self.cells, next);
        self.generation += 1;
    }

    pub(crate) fn refresh_transitions(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.transition = cell.baseline_transition();
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation {}", self.generation)?;
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.alive { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
