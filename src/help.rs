//! Help rendering
//!
//! Three granularities, picked from the argument count and the
//! default-module state: every module, one module's commands, or one
//! command's usage.

use core::fmt::Write;

use crate::prompt::DefaultModule;
use crate::registry::Registry;
use crate::resolver;

/// Handle the `help` built-in; `argv[0]` is the literal `help`
pub(crate) fn show_help<const N: usize>(
    registry: &Registry<N>,
    selection: &DefaultModule,
    argv: &[&str],
    out: &mut dyn Write,
) {
    let argc = argv.len();
    let selected = selection.selected().is_some();

    // help for one command
    if argc > 2 || (selected && argc == 2) {
        show_cmd_help(registry, selection, &argv[1..], out);
        return;
    }

    // help for one module
    if argc == 2 || (selected && argc == 1) {
        let module = match selection.selected() {
            Some(module) => module,
            None => match registry.find(argv[1]) {
                Some(module) => module,
                None => {
                    let _ = writeln!(out, "Illegal module {}", argv[1]);
                    return;
                }
            },
        };
        print_module_commands(registry, module, out);
        return;
    }

    // help for everything
    let _ = writeln!(out, "Available modules:");
    for module in registry.iter() {
        let _ = writeln!(out, "{}", module.name);
    }
    let _ = writeln!(out, "To select a module, enter 'select <module name>'.");
}

/// Print one command's usage, falling back to its summary, then to a blank
/// line
///
/// `argv` starts at the addressing tokens (module and command, or just the
/// command while a module is selected). Also used to auto-display help when
/// a handler rejects its arguments.
pub(crate) fn show_cmd_help<const N: usize>(
    registry: &Registry<N>,
    selection: &DefaultModule,
    argv: &[&str],
    out: &mut dyn Write,
) {
    let Some((module, command)) = resolver::command_and_module(registry, selection, argv, out)
    else {
        return;
    };

    let Some(entry) = registry.get(module) else {
        return;
    };

    for descriptor in entry.commands {
        if descriptor.name == command {
            let _ = writeln!(out, "{}:", descriptor.name);

            match &descriptor.help {
                Some(help) => {
                    if let Some(usage) = help.usage {
                        let _ = writeln!(out, "{}", usage);
                    } else if let Some(summary) = help.summary {
                        let _ = writeln!(out, "{}", summary);
                    } else {
                        let _ = writeln!(out);
                    }
                }
                None => {
                    let _ = writeln!(out);
                }
            }
            return;
        }
    }

    let _ = writeln!(out, "Unrecognized command: {}", argv[0]);
}

/// List one module's commands with their summaries
///
/// The `help` built-in is listed first; it is available in every module
/// without appearing in any table.
fn print_module_commands<const N: usize>(
    registry: &Registry<N>,
    module: usize,
    out: &mut dyn Write,
) {
    let Some(entry) = registry.get(module) else {
        return;
    };

    let _ = writeln!(out, "help");

    for descriptor in entry.commands {
        let _ = write!(out, "{:<30}", descriptor.name);
        if let Some(help) = &descriptor.help {
            if let Some(summary) = help.summary {
                let _ = write!(out, "{}", summary);
            }
        }
        let _ = writeln!(out);
    }
}
