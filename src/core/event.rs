//! Key chords as delivered by the host page.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    pub const META: Modifiers = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Modifiers::NONE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Printable keys are normalized to lowercase so `Ctrl+S` and `Ctrl+s` match.
    pub fn char(ch: char, modifiers: Modifiers) -> Self {
        Self::new(KeyCode::Char(ch.to_ascii_lowercase()), modifiers)
    }

    pub fn ctrl(ch: char) -> Self {
        Self::char(ch, Modifiers::CTRL)
    }

    pub fn meta(ch: char) -> Self {
        Self::char(ch, Modifiers::META)
    }

    pub fn named(name: &str, modifiers: Modifiers) -> Self {
        Self::new(KeyCode::Named(name.to_ascii_lowercase()), modifiers)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        for (on, label) in [
            (m.ctrl, "ctrl+"),
            (m.meta, "cmd+"),
            (m.alt, "alt+"),
            (m.shift, "shift+"),
        ] {
            if on {
                f.write_str(label)?;
            }
        }
        match &self.code {
            KeyCode::Char(ch) => write!(f, "{ch}"),
            KeyCode::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
