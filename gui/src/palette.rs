use crate::config::Config;
use eframe::egui::Color32;
use life_engine::{Cell, Transition};

/// Color of a cell after the last change.
///
/// Cells that just died keep their death color for one generation. Alive
/// cells that have not lived through a generation yet are gray.
pub fn cell_color(cell: &Cell) -> Color32 {
    match cell.transition {
        Transition::Initial => Config::INITIAL_COLOR,
        Transition::Surviving if cell.age <= 1 => Config::INITIAL_COLOR,
        Transition::Surviving => Config::SURVIVING_COLOR,
        Transition::Born => Config::BORN_COLOR,
        Transition::Dying => Config::DYING_COLOR,
        Transition::Ephemeral => Config::EPHEMERAL_COLOR,
        Transition::Dead => Config::DEAD_COLOR,
    }
}
