//! Key chords → commands.

use crate::core::event::{Key, Modifiers};
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

pub struct KeybindingService {
    bindings: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            bindings: default_keybindings(),
        }
    }

    pub fn resolve(&self, key: &Key) -> Option<&Command> {
        self.bindings.get(key)
    }

    pub fn bindings(&self) -> &FxHashMap<Key, Command> {
        &self.bindings
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }

    /// Applies user rules on top of the current bindings. An empty command
    /// removes the binding. Returns how many rules were applied.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring unparsable keybinding");
                continue;
            };
            if rule.command.trim().is_empty() {
                let _ = self.unbind(&key);
            } else {
                self.bind(key, Command::from_name(&rule.command));
            }
            applied += 1;
        }
        applied
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::ctrl('s'), Command::Save);
    bindings.insert(Key::meta('s'), Command::Save);
    bindings.insert(Key::ctrl('w'), Command::CloseTab);
    bindings.insert(Key::named("tab", Modifiers::CTRL), Command::NextTab);
    bindings.insert(
        Key::named("tab", Modifiers::CTRL.with_shift()),
        Command::PrevTab,
    );
    bindings.insert(
        Key::char('r', Modifiers::CTRL.with_shift()),
        Command::RefreshPreview,
    );

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
