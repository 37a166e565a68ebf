//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, CpuPlayer, Direction, Game, GameResult, InputEvent, InputSource,
    Opponent, Orientation, Phase, Renderer, ScriptedInput, Ship, Torpedo, Turn, Vec2,
};

#[cfg(feature = "std")]
pub use crate::{TerminalInput, TerminalRenderer};
