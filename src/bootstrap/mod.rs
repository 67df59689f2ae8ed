//! Startup: resolve paths, load config, initialize tracing, wire adapters,
//! mount the wizard, and hand control to the console.

pub mod cli;
pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use cli::Cli;
pub use run::{run_console, start};
