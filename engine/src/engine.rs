use crate::cell::Cell;
use crate::configuration::Configuration;
use crate::error::LifeError;
use crate::evolution::evolve_into;
use crate::grid::Grid;
use crate::notifier::{ChangeNotifier, Listener, SubscriptionId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;

/// Owns a grid and advances it generation by generation.
///
/// Every mutating call publishes exactly one change event once the grid is
/// fully updated, except writes rejected with [`LifeError::OutOfBounds`].
/// Listeners receive the engine itself and read the state they need.
#[derive(Debug)]
pub struct Engine {
    grid: Grid,
    next: Vec<Cell>,
    rng: ChaCha8Rng,
    notifier: ChangeNotifier<Engine>,
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(x) => ChaCha8Rng::seed_from_u64(x),
        None => ChaCha8Rng::from_os_rng(),
    }
}

impl Engine {
    /// Creates an all-dead `width` x `height` engine at generation 0.
    ///
    /// `seed` - seed for random configurations (if `None`, one is drawn from
    /// the operating system).
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> Result<Self, LifeError> {
        let grid = Grid::new(width, height)?;
        Ok(Engine {
            next: Vec::new(),
            grid,
            rng: make_rng(seed),
            notifier: ChangeNotifier::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.grid.get(row, col)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grid.is_alive(row, col)
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.grid.cells()
    }

    /// Advance the grid by one generation.
    pub fn advance(&mut self) {
        evolve_into(&self.grid, &mut self.next);
        self.grid.commit_generation(&mut self.next);
        log::trace!(
            "generation {}: population {}",
            self.grid.generation(),
            self.grid.population()
        );
        self.publish();
    }

    /// Flips the cell at `(row, col)`. A cell becoming alive gets age 1.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        self.grid
            .toggle(row, col)
            .inspect_err(|err| log::debug!("toggle rejected: {err}"))?;
        self.publish();
        Ok(())
    }

    /// Sets the cell at `(row, col)` alive or dead; a living cell kept alive
    /// keeps its age.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        self.grid
            .set_alive(row, col, alive)
            .inspect_err(|err| log::debug!("set_alive rejected: {err}"))?;
        self.publish();
        Ok(())
    }

    /// Kills every cell and rewinds to generation 0.
    pub fn reset(&mut self) {
        self.grid.clear();
        log::debug!("grid reset");
        self.publish();
    }

    /// Replaces the grid contents with `configuration` at generation 0.
    pub fn apply_configuration(&mut self, configuration: &Configuration) {
        configuration.apply(&mut self.grid, &mut self.rng);
        log::debug!(
            "applied {:?} configuration, population {}",
            ConfigurationKind(configuration),
            self.grid.population()
        );
        self.publish();
    }

    /// Labels alive cells `Surviving` and dead cells `Dead`, leaving ages
    /// and the generation untouched.
    pub fn refresh_display_classification(&mut self) {
        self.grid.refresh_transitions();
        self.publish();
    }

    /// Replaces the random source used by random configurations.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = make_rng(seed);
    }

    pub fn subscribe(&self, listener: Rc<dyn Listener<Engine>>) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&self, listener: &Rc<dyn Listener<Engine>>) -> bool {
        self.notifier.unsubscribe(listener)
    }

    pub fn cancel(&self, id: SubscriptionId) -> bool {
        self.notifier.cancel(id)
    }

    fn publish(&self) {
        self.notifier.publish(self);
    }
}

/// Short description of a configuration for log lines.
struct ConfigurationKind<'a>(&'a Configuration);

impl std::fmt::Debug for ConfigurationKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Configuration::Empty => f.write_str("empty"),
            Configuration::Random(density) => write!(f, "random({})", density.get()),
            Configuration::Pattern(pattern) => write!(f, "pattern '{}'", pattern.name()),
        }
    }
}
