//! Input boundary: the closed set of events the game understands and the
//! sources that produce them.

use alloc::collections::VecDeque;

use crate::engine::vec2::Direction;

/// One player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Rotate,
    Confirm,
}

impl InputEvent {
    /// Movement direction carried by this event, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputEvent::MoveUp => Some(Direction::Up),
            InputEvent::MoveDown => Some(Direction::Down),
            InputEvent::MoveLeft => Some(Direction::Left),
            InputEvent::MoveRight => Some(Direction::Right),
            InputEvent::Rotate | InputEvent::Confirm => None,
        }
    }
}

/// Blocking supplier of human input.
pub trait InputSource {
    /// Wait for the next event. `Ok(None)` means the input has closed and no
    /// more events will arrive.
    fn next_event(&mut self) -> anyhow::Result<Option<InputEvent>>;
}

/// Map a typed character to an event: `wasd` move, `r` rotates, Enter or
/// space confirms. Other keys are ignored.
pub fn map_key(c: char) -> Option<InputEvent> {
    match c.to_ascii_lowercase() {
        'w' => Some(InputEvent::MoveUp),
        's' => Some(InputEvent::MoveDown),
        'a' => Some(InputEvent::MoveLeft),
        'd' => Some(InputEvent::MoveRight),
        'r' => Some(InputEvent::Rotate),
        '\n' | '\r' | ' ' => Some(InputEvent::Confirm),
        _ => None,
    }
}

/// Pre-recorded events, replayed in order. Closes once drained.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Build a script from key presses, skipping unmapped characters.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().filter_map(map_key))
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, events: I) {
        self.events.extend(events);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> anyhow::Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_wasd_and_confirm() {
        assert_eq!(map_key('w'), Some(InputEvent::MoveUp));
        assert_eq!(map_key('A'), Some(InputEvent::MoveLeft));
        assert_eq!(map_key('R'), Some(InputEvent::Rotate));
        assert_eq!(map_key('\r'), Some(InputEvent::Confirm));
        assert_eq!(map_key('x'), None);
    }

    #[test]
    fn scripted_input_drains_then_closes() {
        let mut input = ScriptedInput::from_keys("dx\n");
        assert_eq!(input.remaining(), 2);
        assert_eq!(input.next_event().unwrap(), Some(InputEvent::MoveRight));
        assert_eq!(input.next_event().unwrap(), Some(InputEvent::Confirm));
        assert_eq!(input.next_event().unwrap(), None);
    }
}
