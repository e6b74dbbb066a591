//! Joining multi-argument and multi-line input into one expression.

use std::io::{self, BufRead};

use thiserror::Error;

use crate::{
    ast::Forest,
    parser::{ParseError, parse_str},
};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Trim every line and join them with single spaces.
///
/// ```
/// use clon::input::join_lines;
///
/// assert_eq!(join_lines(["  a=1 ", "b=2\t"]), "a=1 b=2");
/// ```
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a sequence of command-line arguments or lines as one expression.
pub fn parse_lines<I, S>(lines: I) -> Result<Forest, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_str(&join_lines(lines))
}

/// Read every line from `reader`, then parse them as one expression.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Forest, InputError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(lines = lines.len(), "read expression lines");
    Ok(parse_lines(lines)?)
}
