//! Command resolution
//!
//! Maps a tokenized line to a built-in, a registered command, or nothing,
//! applying module-prefix addressing and the default-module shorthand.

use core::fmt::Write;

use log::debug;

use crate::command::CommandDescriptor;
use crate::prompt::DefaultModule;
use crate::registry::Registry;

/// Outcome of resolving one tokenized line
pub(crate) enum Resolution {
    /// The `help` built-in
    Help,
    /// The `select` built-in
    Select,
    /// A registered command; `strip_prefix` is set when the module-name
    /// token must be dropped before invocation
    Command {
        descriptor: &'static CommandDescriptor,
        strip_prefix: bool,
    },
    /// Nothing resolved; diagnostics already printed where applicable
    Unresolved,
}

/// Determine the target module index and command name
///
/// Without a default module, `argv[0]` addresses the module and `argv[1]`
/// the command. With one selected, `argv[0]` alone is the command name.
pub(crate) fn command_and_module<'a, const N: usize>(
    registry: &Registry<N>,
    selection: &DefaultModule,
    argv: &[&'a str],
    out: &mut dyn Write,
) -> Option<(usize, &'a str)> {
    let first = *argv.first()?;

    if let Some(module) = selection.selected() {
        return Some((module, first));
    }

    let Some(command) = argv.get(1).copied() else {
        let _ = writeln!(out, "Unrecognized command: {}", first);
        return None;
    };

    let Some(module) = registry.find(first) else {
        let _ = writeln!(out, "Illegal module {}", first);
        return None;
    };

    Some((module, command))
}

/// Resolve a tokenized line to an executable target
///
/// `argv` must be non-empty. The built-in names `help` and `select` are
/// checked before any registered table and cannot be shadowed.
pub(crate) fn resolve<const N: usize>(
    registry: &Registry<N>,
    selection: &DefaultModule,
    argv: &[&str],
    out: &mut dyn Write,
) -> Resolution {
    let first = argv[0];

    if first == "help" {
        return Resolution::Help;
    }
    if first == "select" {
        return Resolution::Select;
    }

    if argv.len() == 1 && selection.selected().is_none() {
        let _ = writeln!(out, "Missing parameter");
        return Resolution::Unresolved;
    }

    let Some((module, command)) = command_and_module(registry, selection, argv, out) else {
        return Resolution::Unresolved;
    };

    let Some(entry) = registry.get(module) else {
        return Resolution::Unresolved;
    };

    for descriptor in entry.commands {
        if descriptor.name == command {
            debug!("module: {}, command: {}", module, command);
            return Resolution::Command {
                descriptor,
                strip_prefix: selection.selected().is_none(),
            };
        }
    }

    Resolution::Unresolved
}
