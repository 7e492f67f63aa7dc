//! Command descriptors and handler argument access

use core::fmt::Write;

use crate::error::ShellError;

/// Handler invoked for a resolved command
///
/// Receives the argument view (always starting at the command name,
/// regardless of how the command was addressed) and the console printer.
/// Returning `Err` means the arguments were malformed; the shell then
/// prints the command's own help right after the handler's output.
pub type CommandHandler = fn(&Args<'_>, &mut dyn Write) -> Result<(), ShellError>;

/// Help text attached to a command
#[derive(Clone, Copy)]
pub struct CommandHelp {
    /// One-line description shown in the module command list
    pub summary: Option<&'static str>,
    /// Invocation syntax shown by per-command help
    pub usage: Option<&'static str>,
}

/// Command descriptor
///
/// Owned by the registering subsystem; the shell keeps a non-owning
/// reference to the table for the process lifetime.
pub struct CommandDescriptor {
    pub name: &'static str,
    pub handler: CommandHandler,
    pub help: Option<CommandHelp>,
}

/// Argument view handed to a command handler
///
/// Wraps the token slice for one line. `get` returns `None` past the last
/// argument, so handlers can iterate sentinel-style or index-based
/// interchangeably. Never outlives the line buffer it slices.
pub struct Args<'a> {
    argv: &'a [&'a str],
}

impl<'a> Args<'a> {
    /// Wrap a token slice
    pub fn new(argv: &'a [&'a str]) -> Self {
        Self { argv }
    }

    /// Number of arguments, command name included
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// Get argument by index; index 0 is the command name
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.argv.get(index).copied()
    }

    /// Check if no arguments at all
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// Iterate over arguments, command name first
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.argv.iter().copied()
    }
}
