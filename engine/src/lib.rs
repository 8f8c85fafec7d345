/*!
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The board is closed: cells past an edge count as dead. Every cell also keeps
* its age and a label of what happened to it in the last generation.
*/
mod cell;
mod configuration;
mod engine;
mod error;
mod evolution;
mod grid;
mod neighbors;
mod notifier;

pub use cell::{next_alive, Cell, Transition};
pub use configuration::{Configuration, Density, Pattern, GOSPER_GLIDER_GUN};
pub use engine::Engine;
pub use error::LifeError;
pub use evolution::evolve_into;
pub use grid::Grid;
pub use neighbors::count_alive_neighbors;
pub use notifier::{ChangeNotifier, Listener, SubscriptionId};
