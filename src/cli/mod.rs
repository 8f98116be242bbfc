pub mod args;
pub mod commands;
pub mod output;

pub use args::{Cli, Commands, ConnectionOverrides};
pub use commands::CommandHandler;
pub use output::{OutputFormatter, Spinner};
