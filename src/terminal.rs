#![cfg(feature = "std")]

//! Raw-mode keyboard input.

use std::io::{self, Stdin, Stdout};

use termion::event::Key;
use termion::input::{Keys, TermRead};
use termion::raw::{IntoRawMode, RawTerminal};

use crate::input::{map_key, InputEvent, InputSource};

/// Map a terminal key to an event. Arrow keys move like `wasd`.
pub fn map_termion_key(key: Key) -> Option<InputEvent> {
    match key {
        Key::Up => Some(InputEvent::MoveUp),
        Key::Down => Some(InputEvent::MoveDown),
        Key::Left => Some(InputEvent::MoveLeft),
        Key::Right => Some(InputEvent::MoveRight),
        Key::Char(c) => map_key(c),
        _ => None,
    }
}

/// Whether `key` asks to leave the game.
pub fn is_quit(key: Key) -> bool {
    matches!(key, Key::Esc | Key::Ctrl('c') | Key::Char('q'))
}

/// Blocking keyboard source. Holds stdout in raw mode until dropped.
pub struct TerminalInput {
    keys: Keys<Stdin>,
    _raw: RawTerminal<Stdout>,
}

impl TerminalInput {
    pub fn new() -> io::Result<Self> {
        let raw = io::stdout().into_raw_mode()?;
        Ok(Self {
            keys: io::stdin().keys(),
            _raw: raw,
        })
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> anyhow::Result<Option<InputEvent>> {
        for key in self.keys.by_ref() {
            let key = key?;
            if is_quit(key) {
                return Ok(None);
            }
            if let Some(event) = map_termion_key(key) {
                return Ok(Some(event));
            }
            log::trace!("ignored key {:?}", key);
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters_map_to_moves() {
        assert_eq!(map_termion_key(Key::Up), Some(InputEvent::MoveUp));
        assert_eq!(map_termion_key(Key::Char('d')), Some(InputEvent::MoveRight));
        assert_eq!(map_termion_key(Key::Char('\n')), Some(InputEvent::Confirm));
        assert_eq!(map_termion_key(Key::F(1)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(Key::Esc));
        assert!(is_quit(Key::Ctrl('c')));
        assert!(is_quit(Key::Char('q')));
        assert!(!is_quit(Key::Char('w')));
    }
}
