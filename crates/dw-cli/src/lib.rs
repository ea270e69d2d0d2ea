//! dw-cli library
//!
//! Argument definitions and command execution for the `dw` binary.

pub(crate) mod cache_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod contact_commands;
pub(crate) mod error;
pub(crate) mod runner;


pub use cli::Cli;
pub use error::{CliError, Result};
pub use runner::run;

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
