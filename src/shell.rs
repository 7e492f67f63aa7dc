//! Shell runtime: registration API, dispatch, execution loop
//!
//! One [`Shell`] owns the module registry, the default-module selection,
//! and the line-buffer pool; everything the original exposes as file-scope
//! state lives here and is passed by reference where needed. Registration
//! happens single-threaded at startup, then [`Shell::run`] consumes line
//! events for the rest of the process lifetime.

use core::fmt::Write;

use crate::command::{Args, CommandDescriptor, CommandHandler};
use crate::error::ShellError;
use crate::help;
use crate::pool::{BufferPool, BufferToken, SHELL_MAX_CMD_QUEUED};
use crate::prompt::{DefaultModule, PromptProvider, SHELL_PROMPT};
use crate::registry::{Registry, SHELL_MAX_MODULES};
use crate::resolver::{self, Resolution};
use crate::tokenizer::{tokenize, ArgVec, SHELL_CMD_ARGC_MAX};
use crate::VERSION;

/// Console input source: the producer side of the buffer handoff
///
/// `pump` is the shell's only suspension point. An implementation waits
/// (cooperatively) for input, takes free buffers from the pool, fills them
/// with completed lines, and submits them in arrival order. Handing the
/// pool to `pump` pairs the source with the availability and ready queues,
/// and with nothing else.
pub trait ConsoleSource<const N: usize> {
    fn pump(&mut self, pool: &mut BufferPool<N>);
}

/// The shell runtime
///
/// `MODULES` bounds the registry, `QUEUED` the line buffers in flight.
///
/// # Example
///
/// ```ignore
/// static NET_COMMANDS: &[CommandDescriptor] = &[/* ... */];
///
/// let mut shell: Shell = Shell::new();
/// shell.register("net", NET_COMMANDS)?;
/// shell.print_banner(&mut uart);
/// shell.run(&mut uart_source, &mut uart);
/// ```
pub struct Shell<const MODULES: usize = SHELL_MAX_MODULES, const QUEUED: usize = SHELL_MAX_CMD_QUEUED>
{
    registry: Registry<MODULES>,
    selection: DefaultModule,
    pool: BufferPool<QUEUED>,
    app_handler: Option<CommandHandler>,
    prompt_provider: Option<PromptProvider>,
}

impl<const MODULES: usize, const QUEUED: usize> Shell<MODULES, QUEUED> {
    /// Create a shell with no modules registered
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            selection: DefaultModule::new(),
            pool: BufferPool::new(),
            app_handler: None,
            prompt_provider: None,
        }
    }

    /// Register a module's command table
    ///
    /// Call once per subsystem at startup, before [`Shell::run`]. The
    /// names `help` and `select` are reserved and resolve before any
    /// registered table.
    pub fn register(
        &mut self,
        name: &'static str,
        commands: &'static [CommandDescriptor],
    ) -> Result<(), ShellError> {
        self.registry.register(name, commands)
    }

    /// Install a catch-all handler for unrecognized commands
    ///
    /// The fallback receives the full original argument vector, module
    /// prefix included.
    pub fn set_app_cmd_handler(&mut self, handler: CommandHandler) {
        self.app_handler = Some(handler);
    }

    /// Install an application prompt override
    pub fn set_prompt_handler(&mut self, provider: PromptProvider) {
        self.prompt_provider = Some(provider);
    }

    /// Select a default module at startup, as if `select <name>` was typed
    ///
    /// On success prints a newline and the new prompt.
    pub fn set_default_module(
        &mut self,
        name: &str,
        out: &mut dyn Write,
    ) -> Result<(), ShellError> {
        self.selection.select(&self.registry, name, out)?;
        let _ = writeln!(out);
        let _ = write!(out, "{}", self.selection.prompt());
        Ok(())
    }

    /// Current prompt text
    ///
    /// Precedence: application prompt provider (when it returns a
    /// non-empty string), then the selected module's cached prompt, then
    /// the base prompt.
    pub fn prompt(&self) -> &str {
        prompt_text(self.prompt_provider, &self.selection)
    }

    /// Print the prompt
    pub fn print_prompt(&self, out: &mut dyn Write) {
        let _ = write!(out, "{}", self.prompt());
    }

    /// Print welcome banner
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = writeln!(out, "\r\n{}", VERSION);
        let _ = writeln!(out, "Type 'help' for list of available commands");
        self.print_prompt(out);
    }

    /// Access the buffer pool, for wiring up a console source by hand
    pub fn pool_mut(&mut self) -> &mut BufferPool<QUEUED> {
        &mut self.pool
    }

    /// Process one line synchronously
    ///
    /// The full dispatch for a single line: tokenize, resolve, execute,
    /// reprint the prompt. Every error path is non-fatal and ends back at
    /// a fresh prompt.
    pub fn process_line(&mut self, line: &str, out: &mut dyn Write) {
        Self::process(
            &self.registry,
            &mut self.selection,
            self.app_handler,
            self.prompt_provider,
            line,
            out,
        );
    }

    /// Dispatch one queued line buffer, then recycle it
    pub fn handle_event(&mut self, token: BufferToken, out: &mut dyn Write) {
        let Self {
            registry,
            selection,
            pool,
            app_handler,
            prompt_provider,
        } = self;

        let line = pool.buffer(&token).as_str();
        Self::process(registry, selection, *app_handler, *prompt_provider, line, out);

        pool.release(token);
    }

    /// Run the shell for the rest of the process lifetime
    ///
    /// Call exactly once, after every registration. Alternates between the
    /// source's cooperative wait and draining ready lines in FIFO order.
    pub fn run(&mut self, source: &mut dyn ConsoleSource<QUEUED>, out: &mut dyn Write) -> ! {
        self.print_prompt(out);

        loop {
            source.pump(&mut self.pool);

            while let Some(token) = self.pool.next_ready() {
                self.handle_event(token, out);
            }
        }
    }

    fn process(
        registry: &Registry<MODULES>,
        selection: &mut DefaultModule,
        app_handler: Option<CommandHandler>,
        prompt_provider: Option<PromptProvider>,
        line: &str,
        out: &mut dyn Write,
    ) {
        let argv = match tokenize(line) {
            Ok(argv) => argv,
            Err(_) => {
                let _ = writeln!(out, "Too many parameters (max {})", SHELL_CMD_ARGC_MAX);
                ArgVec::new()
            }
        };

        if argv.is_empty() {
            let _ = write!(out, "{}", prompt_text(prompt_provider, selection));
            return;
        }

        match resolver::resolve(registry, selection, &argv, out) {
            Resolution::Help => {
                help::show_help(registry, selection, &argv, out);
            }

            Resolution::Select => {
                if argv.len() == 1 {
                    selection.clear();
                } else {
                    // failure is already reported on the console
                    let _ = selection.select(registry, argv[1], out);
                }
            }

            Resolution::Command {
                descriptor,
                strip_prefix,
            } => {
                // A command must not know how it was addressed: drop the
                // module-name token so argv[0] is always the command name.
                let offset = usize::from(strip_prefix);
                let args = Args::new(&argv[offset..]);

                if (descriptor.handler)(&args, out).is_err() {
                    help::show_cmd_help(registry, selection, &argv, out);
                }
            }

            Resolution::Unresolved => match app_handler {
                Some(handler) => {
                    let args = Args::new(&argv);
                    if handler(&args, out).is_err() {
                        help::show_cmd_help(registry, selection, &argv, out);
                    }
                }
                None => {
                    let _ = writeln!(out, "Unrecognized command: {}", argv[0]);
                    let _ = writeln!(out, "Type 'help' for list of available commands");
                }
            },
        }

        let _ = write!(out, "{}", prompt_text(prompt_provider, selection));
    }
}

impl<const MODULES: usize, const QUEUED: usize> Default for Shell<MODULES, QUEUED> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompt precedence shared by the dispatch path and [`Shell::prompt`]
fn prompt_text(provider: Option<PromptProvider>, selection: &DefaultModule) -> &str {
    if let Some(provider) = provider {
        if let Some(text) = provider() {
            if !text.is_empty() {
                return text;
            }
        }
    }

    if selection.selected().is_some() {
        return selection.prompt();
    }

    SHELL_PROMPT
}
