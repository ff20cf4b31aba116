pub mod cli;
pub mod commands;
pub mod utils;

// Re-export commonly used items
pub use cli::{Cli, Commands, ParameterArgs};
