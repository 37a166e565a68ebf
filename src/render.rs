//! Render boundary: a snapshot of what the human may see, and the trait a
//! front end implements to draw it.

use alloc::vec::Vec;

use crate::engine::board::{CandidateCell, Grid};
use crate::engine::common::GameResult;
use crate::engine::game::{Phase, Turn};

/// The candidate being positioned on the human board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Ship cells, drawn on the home grid.
    Ship(Vec<CandidateCell>),
    /// Torpedo aim point, drawn on the strategy grid.
    Torpedo(CandidateCell),
}

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub phase: Phase,
    pub turn: Turn,
    /// Human fleet and the CPU's shots against it.
    pub home: Grid,
    /// Human shots against the CPU. Never contains `ShipPresent`.
    pub strategy: Grid,
    pub candidate: Option<Candidate>,
    /// The CPU is about to act on the next tick.
    pub opponent_thinking: bool,
}

pub trait Renderer {
    fn render(&mut self, frame: &Frame) -> anyhow::Result<()>;

    /// Called exactly once, after the final render.
    fn announce(&mut self, result: GameResult) -> anyhow::Result<()>;
}
