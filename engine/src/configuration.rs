use crate::cell::Cell;
use crate::error::LifeError;
use crate::grid::Grid;
use rand::Rng;
use std::borrow::Cow;

/// Probability for a cell to start alive, validated to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f64);

impl Density {
    pub fn new(value: f64) -> Result<Self, LifeError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Density(value))
        } else {
            Err(LifeError::InvalidDensity(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Gosper glider gun, as `(row, col)` pairs. Fits a 10x37 board.
#[rustfmt::skip]
pub const GOSPER_GLIDER_GUN: [(usize, usize); 36] = [
    // left block
    (5, 1), (5, 2), (6, 1), (6, 2),
    // left part
    (5, 11), (6, 11), (7, 11),
    (4, 12), (8, 12),
    (3, 13), (9, 13), (3, 14), (9, 14),
    (6, 15),
    (4, 16), (8, 16),
    (5, 17), (6, 17), (7, 17),
    (6, 18),
    // right part
    (3, 21), (4, 21), (5, 21),
    (3, 22), (4, 22), (5, 22),
    (2, 23), (6, 23),
    (1, 25), (2, 25), (6, 25), (7, 25),
    // right block
    (3, 35), (4, 35), (3, 36), (4, 36),
];

/// A named set of alive coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: Cow<'static, str>,
    cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: impl Into<Cow<'static, str>>, cells: Vec<(usize, usize)>) -> Self {
        Pattern {
            name: name.into(),
            cells,
        }
    }

    pub fn gosper_glider_gun() -> Self {
        Pattern::new("Gosper glider gun", GOSPER_GLIDER_GUN.to_vec())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }
}

/// Starting layouts for a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Configuration {
    /// Every cell dead.
    Empty,
    /// Every cell independently alive with the given probability.
    Random(Density),
    /// Exactly the pattern's in-bounds coordinates alive.
    Pattern(Pattern),
}

impl Configuration {
    pub fn random(density: f64) -> Result<Self, LifeError> {
        Density::new(density).map(Configuration::Random)
    }

    /// The Gosper glider gun.
    pub fn cannon() -> Self {
        Configuration::Pattern(Pattern::gosper_glider_gun())
    }

    /// Resets `grid` to generation 0 and lays this configuration out on it.
    ///
    /// Cells made alive start with age 1. Pattern coordinates outside the
    /// grid are skipped.
    pub fn apply<R: Rng>(&self, grid: &mut Grid, rng: &mut R) {
        grid.clear();

        match self {
            Configuration::Empty => {}
            Configuration::Random(density) => {
                let p = density.get();
                for cell in grid.cells_mut() {
                    if rng.random_bool(p) {
                        *cell = Cell::newborn();
                    }
                }
            }
            Configuration::Pattern(pattern) => {
                let mut skipped = 0;
                for &(row, col) in pattern.cells() {
                    if !grid.revive(row, col) {
                        skipped += 1;
                    }
                }
                if skipped > 0 {
                    log::debug!(
                        "skipped {skipped} out-of-bounds cells of pattern '{}'",
                        pattern.name()
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Transition;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SEED: u64 = 42;

    fn dirty_grid(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        let mut next = vec![Cell::newborn(); width * height];
        grid.commit_generation(&mut next);
        grid
    }

    #[test]
    fn test_density_bounds() {
        assert!(Density::new(0.0).is_ok());
        assert!(Density::new(1.0).is_ok());
        assert_eq!(Density::new(-0.1), Err(LifeError::InvalidDensity(-0.1)));
        assert_eq!(Density::new(1.5), Err(LifeError::InvalidDensity(1.5)));
        assert!(Density::new(f64::NAN).is_err());
    }

    #[test]
    fn test_empty_clears_grid() {
        let mut grid = dirty_grid(5, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        Configuration::Empty.apply(&mut grid, &mut rng);

        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_random_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let mut grid = dirty_grid(10, 7);

        Configuration::random(0.0).unwrap().apply(&mut grid, &mut rng);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);

        Configuration::random(1.0).unwrap().apply(&mut grid, &mut rng);
        assert_eq!(grid.population(), 70);
        assert!(grid.cells().all(|(_, _, cell)| cell.age == 1));
    }

    #[test]
    fn test_random_is_reproducible() {
        let config = Configuration::random(0.3).unwrap();
        let mut a = Grid::new(32, 32).unwrap();
        let mut b = Grid::new(32, 32).unwrap();

        config.apply(&mut a, &mut ChaCha8Rng::seed_from_u64(SEED));
        config.apply(&mut b, &mut ChaCha8Rng::seed_from_u64(SEED));

        assert_eq!(a, b);
        let population = a.population();
        assert!(population > 200 && population < 420, "population {population}");
    }

    #[test]
    fn test_pattern_skips_out_of_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let mut grid = dirty_grid(4, 4);
        let pattern = Pattern::new("edge", vec![(0, 0), (3, 3), (4, 0), (0, 9), (2, 1)]);

        Configuration::Pattern(pattern).apply(&mut grid, &mut rng);

        assert_eq!(grid.population(), 3);
        for (row, col) in [(0, 0), (3, 3), (2, 1)] {
            let cell = grid.get(row, col);
            assert!(cell.alive);
            assert_eq!(cell.age, 1);
            assert_eq!(cell.transition, Transition::Initial);
        }
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_cannon() {
        let gun = Pattern::gosper_glider_gun();
        assert_eq!(gun.cells().len(), 36);

        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let mut grid = Grid::new(40, 40).unwrap();
        Configuration::cannon().apply(&mut grid, &mut rng);
        assert_eq!(grid.population(), 36);

        let mut small = Grid::new(20, 20).unwrap();
        Configuration::cannon().apply(&mut small, &mut rng);
        assert_eq!(small.population(), 20);
    }
}
