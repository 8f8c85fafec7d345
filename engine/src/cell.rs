/// What happened to a cell during the most recent generation.
///
/// Only used downstream for presentation; the rule itself never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transition {
    /// Made alive by hand or by a configuration, not yet classified.
    Initial,
    Surviving,
    Born,
    Dying,
    /// Died after living exactly one generation.
    Ephemeral,
    #[default]
    Dead,
}

impl Transition {
    /// Classifies a step from `(was_alive, prev_age)` to `is_alive`.
    pub fn classify(was_alive: bool, is_alive: bool, prev_age: u32) -> Self {
        match (was_alive, is_alive) {
            (true, true) => Transition::Surviving,
            (false, true) => Transition::Born,
            (true, false) if prev_age == 1 => Transition::Ephemeral,
            (true, false) => Transition::Dying,
            (false, false) => Transition::Dead,
        }
    }
}

/// Conway's B3/S23 rule table.
///
/// Three neighbors give life (birth or survival), two keep the current
/// state, anything else is death.
pub fn next_alive(alive: bool, neighbors: u8) -> bool {
    match neighbors {
        3 => true,
        2 => alive,
        _ => false,
    }
}

/// A single cell of the board.
///
/// `age` counts the generations the cell has been continuously alive and is
/// zero exactly when the cell is dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub alive: bool,
    pub age: u32,
    pub transition: Transition,
}

impl Cell {
    /// A cell made alive outside of evolution.
    pub fn newborn() -> Self {
        Cell {
            alive: true,
            age: 1,
            transition: Transition::Initial,
        }
    }

    /// The state of this cell one generation later, given the number of
    /// alive neighbors it had before the step.
    pub fn evolve(self, neighbors: u8) -> Cell {
        let alive = next_alive(self.alive, neighbors);
        let age = match (self.alive, alive) {
            (true, true) => self.age.saturating_add(1),
            (false, true) => 1,
            (_, false) => 0,
        };

        Cell {
            alive,
            age,
            transition: Transition::classify(self.alive, alive, self.age),
        }
    }

    /// Label used before any generation has been evolved.
    pub(crate) fn baseline_transition(&self) -> Transition {
        if self.alive {
            Transition::Surviving
        } else {
            Transition::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_with_age(age: u32) -> Cell {
        Cell {
            alive: true,
            age,
            transition: Transition::Surviving,
        }
    }

    #[test]
    fn test_rule_table() {
        for neighbors in 0..=8u8 {
            assert_eq!(next_alive(false, neighbors), neighbors == 3);
            assert_eq!(next_alive(true, neighbors), neighbors == 2 || neighbors == 3);
        }
    }

    #[test]
    fn test_birth_sets_age_one() {
        let cell = Cell::default().evolve(3);
        assert!(cell.alive);
        assert_eq!(cell.age, 1);
        assert_eq!(cell.transition, Transition::Born);
    }

    #[test]
    fn test_survival_increments_age() {
        let cell = alive_with_age(4).evolve(2);
        assert!(cell.alive);
        assert_eq!(cell.age, 5);
        assert_eq!(cell.transition, Transition::Surviving);
    }

    #[test]
    fn test_death_after_one_generation_is_ephemeral() {
        let cell = alive_with_age(1).evolve(1);
        assert!(!cell.alive);
        assert_eq!(cell.age, 0);
        assert_eq!(cell.transition, Transition::Ephemeral);
    }

    #[test]
    fn test_death_of_older_cell_is_dying() {
        let cell = alive_with_age(2).evolve(4);
        assert!(!cell.alive);
        assert_eq!(cell.age, 0);
        assert_eq!(cell.transition, Transition::Dying);
    }

    #[test]
    fn test_dead_stays_dead() {
        for neighbors in [0, 1, 2, 4, 8] {
            assert_eq!(Cell::default().evolve(neighbors), Cell::default());
        }
    }

    #[test]
    fn test_classify_ignores_age_unless_dying() {
        assert_eq!(Transition::classify(true, true, 1), Transition::Surviving);
        assert_eq!(Transition::classify(false, true, 0), Transition::Born);
        assert_eq!(Transition::classify(false, false, 0), Transition::Dead);
        assert_eq!(Transition::classify(true, false, 7), Transition::Dying);
    }
}
