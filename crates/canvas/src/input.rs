//! Raw input as the editor sees it.

use strum_macros::Display;

/// A key the editor reacts to.
///
/// Letters are stored lowercase so `G` and `g` mean the same thing.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Plus,
    Minus,
    Escape,
}

impl Key {
    /// Parses a key symbol as reported by a windowing toolkit (`"Up"`,
    /// `"plus"`, `"Escape"`) or a single printable character.
    pub fn from_keysym(keysym: &str) -> Option<Key> {
        let key = match keysym {
            "Up" => Key::Up,
            "Down" => Key::Down,
            "Left" => Key::Left,
            "Right" => Key::Right,
            "plus" | "+" | "KP_Add" => Key::Plus,
            "minus" | "-" | "KP_Subtract" => Key::Minus,
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = keysym.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn any(&self) -> bool {
        self.shift || self.ctrl
    }
}
