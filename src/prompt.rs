//! Prompt text and default-module selection state

use core::fmt::Write;

use heapless::String;

use crate::error::ShellError;
use crate::registry::{Registry, MODULE_NAME_MAX_LEN};

/// Base prompt, shown while no module is selected
pub const SHELL_PROMPT: &str = "shell> ";

/// Suffix appended to a selected module's name
const PROMPT_SUFFIX: &str = "> ";

/// Longest possible cached prompt
pub const PROMPT_MAX_LEN: usize = MODULE_NAME_MAX_LEN + PROMPT_SUFFIX.len();

/// Application prompt override, consulted on every prompt reprint
///
/// Returning `None` or an empty string falls through to the default-module
/// prompt, then to [`SHELL_PROMPT`].
pub type PromptProvider = fn() -> Option<&'static str>;

/// Single-slot module selection with prompt caching
///
/// The cached prompt is rebuilt exactly when the selection changes; while a
/// module is selected it always reads `name> `.
pub struct DefaultModule {
    selected: Option<usize>,
    prompt: String<PROMPT_MAX_LEN>,
}

impl DefaultModule {
    /// Create with no module selected
    pub const fn new() -> Self {
        Self {
            selected: None,
            prompt: String::new(),
        }
    }

    /// Index of the selected module, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Cached prompt; meaningful only while a module is selected
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    /// Drop the selection unconditionally
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Select a module by name
    ///
    /// Rejects names over [`MODULE_NAME_MAX_LEN`] and names that resolve to
    /// no module, printing the diagnostic and leaving the selection and the
    /// cached prompt untouched.
    pub fn select<const N: usize>(
        &mut self,
        registry: &Registry<N>,
        name: &str,
        out: &mut dyn Write,
    ) -> Result<(), ShellError> {
        if name.len() > MODULE_NAME_MAX_LEN {
            let _ = writeln!(out, "Module name {} is too long, default is not changed", name);
            return Err(ShellError::NameTooLong);
        }

        let Some(index) = registry.find(name) else {
            let _ = writeln!(out, "Illegal module {}, default is not changed", name);
            return Err(ShellError::UnknownModule);
        };

        self.selected = Some(index);
        self.prompt.clear();
        // name length checked above, the buffer cannot overflow
        let _ = self.prompt.push_str(name);
        let _ = self.prompt.push_str(PROMPT_SUFFIX);

        Ok(())
    }
}

impl Default for DefaultModule {
    fn default() -> Self {
        Self::new()
    }
}
