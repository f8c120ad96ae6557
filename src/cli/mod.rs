pub mod core;
pub mod forms;
pub mod output;
mod shell;
pub mod state;

pub use shell::run_cli;
