#![cfg(feature = "std")]

//! ANSI terminal renderer.

use std::io::Write;
use std::thread;
use std::time::Duration;

use termion::{clear, color, cursor, style};

use crate::engine::{
    board::{CandidateCell, CellState, Grid},
    common::GameResult,
    config::{HEIGHT, WIDTH},
    game::{Phase, Turn},
};
use crate::render::{Candidate, Frame, Renderer};

/// How a single cell is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    Plain,
    Hit,
    Candidate,
    Conflict,
}

/// Draws frames to any writer. Lines end in `\r\n` so output stays aligned
/// while the terminal is in raw mode.
pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
    think_delay: Duration,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: true,
            think_delay: Duration::ZERO,
        }
    }

    /// Disable ANSI colors and screen clearing.
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    /// Pause for `delay` whenever the CPU is about to act.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> std::io::Result<()> {
        write!(self.out, "{}\r\n", text)
    }

    fn cell(&mut self, symbol: char, paint: Paint) -> std::io::Result<()> {
        if !self.color {
            return write!(self.out, "{} ", symbol);
        }
        match paint {
            Paint::Plain => write!(self.out, "{} ", symbol),
            Paint::Hit => write!(self.out, "{}{}{} ", color::Fg(color::Red), symbol, style::Reset),
            Paint::Candidate => write!(
                self.out,
                "{}{}{} ",
                color::Fg(color::LightBlue),
                symbol,
                style::Reset
            ),
            Paint::Conflict => write!(
                self.out,
                "{}{}{} ",
                color::Bg(color::Red),
                symbol,
                style::Reset
            ),
        }
    }

    fn header(&mut self) -> std::io::Result<()> {
        write!(self.out, "    ")?;
        for c in 0..WIDTH {
            write!(self.out, "{} ", (b'A' + c as u8) as char)?;
        }
        write!(self.out, "\r\n")
    }

    fn grid(
        &mut self,
        grid: &Grid,
        overlay: &[CandidateCell],
        candidate_symbol: char,
        reveal_ships: bool,
    ) -> std::io::Result<()> {
        self.header()?;
        for (y, row) in grid.iter().enumerate().take(HEIGHT) {
            write!(self.out, " {:2} ", y + 1)?;
            for (x, state) in row.iter().enumerate() {
                if let Some(c) = overlay.iter().find(|c| c.pos.x == x && c.pos.y == y) {
                    let paint = if c.conflict {
                        Paint::Conflict
                    } else {
                        Paint::Candidate
                    };
                    self.cell(candidate_symbol, paint)?;
                    continue;
                }
                match state {
                    CellState::Empty => self.cell('~', Paint::Plain)?,
                    CellState::Miss => self.cell('o', Paint::Plain)?,
                    CellState::Hit => self.cell('X', Paint::Hit)?,
                    CellState::ShipPresent if reveal_ships => self.cell('#', Paint::Plain)?,
                    CellState::ShipPresent => unreachable!("strategy view never reveals ships"),
                }
            }
            write!(self.out, "\r\n")?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) -> anyhow::Result<()> {
        if self.color {
            write!(self.out, "{}{}", clear::All, cursor::Goto(1, 1))?;
        }
        match frame.turn {
            Turn::Human => self.line("It's your turn")?,
            Turn::Opponent if frame.opponent_thinking => self.line("The CPU is thinking...")?,
            Turn::Opponent => self.line("It's the CPU's turn")?,
        }
        match frame.phase {
            Phase::ShipPlacement => self.line(
                "Select where to place your ship! (WASD to move; r to rotate; Enter to confirm)",
            )?,
            Phase::TorpedoExchange => {
                self.line("Select where to fire your torpedo! (WASD to move; Enter to fire)")?
            }
        }

        let (ship_overlay, torpedo_overlay): (Vec<CandidateCell>, Vec<CandidateCell>) =
            match &frame.candidate {
                Some(Candidate::Ship(cells)) => (cells.clone(), Vec::new()),
                Some(Candidate::Torpedo(cell)) => (Vec::new(), vec![*cell]),
                None => (Vec::new(), Vec::new()),
            };

        self.line("")?;
        self.line("Enemy waters:")?;
        self.grid(&frame.strategy, &torpedo_overlay, '+', false)?;
        self.line("")?;
        self.line("Your fleet:")?;
        self.grid(&frame.home, &ship_overlay, '#', true)?;
        self.line("Legend: #=Ship  X=Hit  o=Miss  ~=Water")?;
        self.out.flush()?;

        if frame.opponent_thinking && !self.think_delay.is_zero() {
            thread::sleep(self.think_delay);
        }
        Ok(())
    }

    fn announce(&mut self, result: GameResult) -> anyhow::Result<()> {
        self.line("")?;
        match result {
            GameResult::HumanWon => self.line("Congratulations, you sank the entire CPU fleet!")?,
            GameResult::OpponentWon => {
                self.line("All your ships have been destroyed. Better luck next time.")?
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
