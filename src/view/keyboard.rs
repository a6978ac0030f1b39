//! WASD keyboard navigation.

/// Index of the upward neighbor in a nav tuple.
pub const NAV_UP: usize = 0;
/// Index of the left sibling.
pub const NAV_LEFT: usize = 1;
/// Index of the downward neighbor.
pub const NAV_DOWN: usize = 2;
/// Index of the right sibling.
pub const NAV_RIGHT: usize = 3;

/// Keys the navigator reacts to. Anything else stays with the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Backspace,
}

impl Key {
    /// Map a typed character to a navigation key, if it is one.
    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_lowercase() {
            'w' => Some(Key::W),
            'a' => Some(Key::A),
            's' => Some(Key::S),
            'd' => Some(Key::D),
            ' ' => Some(Key::Space),
            '\u{8}' => Some(Key::Backspace),
            _ => None,
        }
    }

    /// Nav-tuple direction this key moves in, for the four movement keys.
    /// S and D cross the usual WASD layout (S → right, D → down); the nav
    /// tuples the generator emits pair them this way.
    pub fn direction(self) -> Option<usize> {
        match self {
            Key::W => Some(NAV_UP),
            Key::A => Some(NAV_LEFT),
            Key::S => Some(NAV_RIGHT),
            Key::D => Some(NAV_DOWN),
            Key::Space | Key::Backspace => None,
        }
    }
}
