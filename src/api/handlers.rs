pub mod control;
pub mod grid;
pub mod probes;

pub use control::{execute_commands, get_status, move_probe, turn_probe};
pub use grid::get_grid;
pub use probes::{create_probe, delete_probe, get_probe, list_probes};
