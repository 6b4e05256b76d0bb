//! Keyboard mapping and input buffering

use crate::sim::Direction;

/// Keys the game listens to (arrows and WASD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowUp"`, `"w"`, `"KeyW"`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "w" | "W" | "KeyW" => Some(Key::W),
            "a" | "A" | "KeyA" => Some(Key::A),
            "s" | "S" | "KeyS" => Some(Key::S),
            "d" | "D" | "KeyD" => Some(Key::D),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Key::Up | Key::W => Direction::North,
            Key::Down | Key::S => Direction::South,
            Key::Left | Key::A => Direction::West,
            Key::Right | Key::D => Direction::East,
        }
    }
}

/// Currently held keys; the most recently pressed one decides the direction
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: Vec<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // Auto-repeat sends repeated downs; move the key to the top either way
        self.held.retain(|k| *k != key);
        self.held.push(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.retain(|k| *k != key);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn direction(&self) -> Direction {
        self.held
            .last()
            .map(|k| k.direction())
            .unwrap_or(Direction::None)
    }
}

/// Latest-value slot between input events and the next tick.
///
/// Writes simply overwrite; the game loop reads it once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputBuffer {
    latest: Direction,
}

impl InputBuffer {
    pub fn set(&mut self, dir: Direction) {
        self.latest = dir;
    }

    pub fn latest(&self) -> Direction {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("KeyD"), Some(Key::D));
        assert_eq!(Key::from_name("s"), Some(Key::S));
        assert_eq!(Key::from_name("Escape"), None);
        assert_eq!(Key::W.direction(), Key::Up.direction());
    }

    #[test]
    fn test_last_pressed_held_key_wins() {
        let mut keys = KeyState::new();
        assert_eq!(keys.direction(), Direction::None);

        keys.key_down(Key::Right);
        keys.key_down(Key::W);
        assert_eq!(keys.direction(), Direction::North);

        keys.key_up(Key::W);
        assert_eq!(keys.direction(), Direction::East);

        keys.key_down(Key::Right);
        keys.key_up(Key::Right);
        assert_eq!(keys.direction(), Direction::None);
    }

    #[test]
    fn test_buffer_keeps_latest_value() {
        let mut buffer = InputBuffer::default();
        buffer.set(Direction::South);
        buffer.set(Direction::West);
        assert_eq!(buffer.latest(), Direction::West);
        assert_eq!(buffer.latest(), Direction::West);
    }
}
