pub mod cli;
pub mod commands;
mod console;
pub mod menu;

pub use console::Console;
pub use menu::{run, MenuChoice};
