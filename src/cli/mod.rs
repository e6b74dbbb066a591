//! CLI support for clon
//!
//! Provides programmatic access to the clon command so it can be embedded
//! in other tools and tested without spawning a process.

mod generate;

pub use crate::output::value_to_json;
pub use generate::{GenerateOptions, execute_generate};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// The expression did not parse
    #[error(transparent)]
    Parse(#[from] crate::ParseError),

    /// Reading or parsing piped input failed
    #[error(transparent)]
    Input(#[from] crate::input::InputError),

    /// Rendering the result failed
    #[error(transparent)]
    Render(#[from] crate::output::RenderError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No expression arguments and nothing piped in
    #[error("no input provided. Pass an expression as arguments or pipe it to stdin.")]
    NoInput,
}
