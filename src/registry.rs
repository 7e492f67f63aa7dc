//! Module registry: named command tables in registration order

use heapless::Vec;
use log::debug;

use crate::command::CommandDescriptor;
use crate::error::ShellError;

/// Default number of module slots
pub const SHELL_MAX_MODULES: usize = 8;

/// Maximum module name length considered during lookup
pub const MODULE_NAME_MAX_LEN: usize = 20;

/// One registered module: a name and its command table
pub struct ModuleEntry {
    pub name: &'static str,
    pub commands: &'static [CommandDescriptor],
}

/// Fixed-capacity module table
///
/// Append-only: entries are registered during single-threaded startup and
/// never removed or mutated afterwards.
pub struct Registry<const N: usize = SHELL_MAX_MODULES> {
    modules: Vec<ModuleEntry, N>,
}

impl<const N: usize> Registry<N> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module's command table
    ///
    /// Fails with [`ShellError::RegistryFull`] once every slot is taken,
    /// leaving previously registered modules undisturbed.
    pub fn register(
        &mut self,
        name: &'static str,
        commands: &'static [CommandDescriptor],
    ) -> Result<(), ShellError> {
        self.modules
            .push(ModuleEntry { name, commands })
            .map_err(|_| ShellError::RegistryFull)?;

        debug!("registered module {} ({} commands)", name, commands.len());
        Ok(())
    }

    /// Find a module by name, first match in registration order
    pub fn find(&self, name: &str) -> Option<usize> {
        self.modules
            .iter()
            .position(|module| names_match(module.name, name))
    }

    /// Get a module by index
    pub fn get(&self, index: usize) -> Option<&ModuleEntry> {
        self.modules.get(index)
    }

    /// Iterate over modules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.modules.iter()
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if no modules are registered
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<const N: usize> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounded name comparison: only the first [`MODULE_NAME_MAX_LEN`] bytes of
/// each side participate, so names at the maximum length match any longer
/// text sharing that prefix. For shorter names this is an exact match.
fn names_match(a: &str, b: &str) -> bool {
    a.bytes()
        .take(MODULE_NAME_MAX_LEN)
        .eq(b.bytes().take(MODULE_NAME_MAX_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_compare_exact_for_short_names() {
        assert!(names_match("net", "net"));
        assert!(!names_match("net", "ne"));
        assert!(!names_match("net", "netx"));
    }

    #[test]
    fn test_bounded_compare_truncates_at_max() {
        let stored = "abcdefghijklmnopqrst"; // exactly 20 chars
        let typed = "abcdefghijklmnopqrstuvwx";
        assert!(names_match(stored, typed));
    }
}
