//! Line-based front end for the wizard.
//!
//! Each input line is one [`Command`]. The session mounts the view model for
//! the routed step and re-renders after every command.

mod command;
mod render;
mod session;

pub use command::{Command, CommandError};
pub use session::{ConsoleSession, Flow};
