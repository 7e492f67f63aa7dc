//! Line tokenizer
//!
//! Splits a console line on spaces into a bounded argument vector. Tokens
//! borrow the line's storage and must not outlive it.

use heapless::Vec;

use crate::error::ShellError;

/// Maximum number of tokens on one line, command name included
pub const SHELL_CMD_ARGC_MAX: usize = 16;

/// Bounded argument vector; entries alias the tokenized line
pub type ArgVec<'a> = Vec<&'a str, SHELL_CMD_ARGC_MAX>;

/// Split a line into tokens
///
/// Runs of spaces collapse and leading/trailing spaces are dropped, so an
/// empty or all-space line yields zero tokens. Indexing past the last token
/// with [`Args::get`](crate::command::Args::get) yields `None`, standing in
/// for the terminating `NULL` of a POSIX argv.
///
/// Fails with [`ShellError::TooManyArgs`] when the line holds more than
/// [`SHELL_CMD_ARGC_MAX`] tokens.
pub fn tokenize(line: &str) -> Result<ArgVec<'_>, ShellError> {
    let mut argv = ArgVec::new();

    for token in line.split(' ').filter(|t| !t.is_empty()) {
        argv.push(token).map_err(|_| ShellError::TooManyArgs)?;
    }

    Ok(argv)
}
