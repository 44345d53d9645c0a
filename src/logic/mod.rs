pub mod commands;
pub mod grid;
pub mod probe;
