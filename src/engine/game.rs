//! Turn controller: drives both boards through ship placement and the
//! torpedo exchange, one actor per tick.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::engine::{
    board::{Board, PlacementMode},
    common::{BoardError, GameResult},
    config::{CELL_COUNT, NUM_SHIPS, SHIP_LENGTHS},
    torpedo::Torpedo,
};
use crate::input::{InputEvent, InputSource};
use crate::player::{CpuPlayer, Opponent};
use crate::render::{Candidate, Frame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ShipPlacement,
    TorpedoExchange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Opponent,
}

impl Turn {
    pub fn other(self) -> Self {
        match self {
            Turn::Human => Turn::Opponent,
            Turn::Opponent => Turn::Human,
        }
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The human input closed before a winner was decided.
    InputClosed,
    Finished(GameResult),
}

/// Deliver `torpedo` from `attacker` to `defender` and copy the verdict back.
fn exchange(
    attacker: &mut Board,
    defender: &mut Board,
    torpedo: Torpedo,
) -> Result<Torpedo, BoardError> {
    let resolved = defender.receive_torpedo(torpedo)?;
    attacker.record_outcome(resolved)?;
    Ok(resolved)
}

/// Human versus opponent game state.
pub struct Game<O: Opponent = CpuPlayer> {
    human: Board,
    cpu: Board,
    opponent: O,
    rng: SmallRng,
    phase: Phase,
    turn: Turn,
    human_ships_placed: usize,
    cpu_ships_placed: usize,
    winner: Option<GameResult>,
}

impl Game<CpuPlayer> {
    /// Game against the uniform-random CPU with a fixed RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Game::new(CpuPlayer::new(), SmallRng::seed_from_u64(seed))
    }
}

impl<O: Opponent> Game<O> {
    pub fn new(opponent: O, rng: SmallRng) -> Self {
        Self {
            human: Board::new(),
            cpu: Board::new(),
            opponent,
            rng,
            phase: Phase::ShipPlacement,
            turn: Turn::Human,
            human_ships_placed: 0,
            cpu_ships_placed: 0,
            winner: None,
        }
    }

    pub fn human_board(&self) -> &Board {
        &self.human
    }

    pub fn opponent_board(&self) -> &Board {
        &self.cpu
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn winner(&self) -> Option<GameResult> {
        self.winner
    }

    pub fn human_ships_placed(&self) -> usize {
        self.human_ships_placed
    }

    pub fn opponent_ships_placed(&self) -> usize {
        self.cpu_ships_placed
    }

    /// `true` when the next tick is opponent work rather than a pass.
    pub fn opponent_to_act(&self) -> bool {
        self.winner.is_none() && self.turn == Turn::Opponent && !self.human.is_placing()
    }

    /// Snapshot for the renderer.
    pub fn frame(&self) -> Frame {
        let candidate = match self.human.placement() {
            PlacementMode::Idle => None,
            PlacementMode::PlacingShip(_) => Some(Candidate::Ship(self.human.candidate_cells())),
            PlacementMode::PlacingTorpedo(_) => self
                .human
                .candidate_cells()
                .first()
                .copied()
                .map(Candidate::Torpedo),
        };
        Frame {
            phase: self.phase,
            turn: self.turn,
            home: self.human.home_view(),
            strategy: self.human.strategy_view(),
            candidate,
            opponent_thinking: self.opponent_to_act(),
        }
    }

    /// Advance the game by one actor step.
    ///
    /// The human's turn consumes at most one input event; the opponent's turn
    /// places one ship or fires one torpedo. The turn always passes.
    pub fn tick(&mut self, input: &mut dyn InputSource) -> anyhow::Result<TickOutcome> {
        if let Some(result) = self.winner {
            return Ok(TickOutcome::Finished(result));
        }

        match self.turn {
            Turn::Opponent => {
                if !self.human.is_placing() {
                    self.opponent_move()?;
                }
            }
            Turn::Human => {
                if !self.human_move(input)? {
                    return Ok(TickOutcome::InputClosed);
                }
            }
        }

        self.turn = self.turn.other();
        Ok(match self.winner {
            Some(result) => TickOutcome::Finished(result),
            None => TickOutcome::Continue,
        })
    }

    /// Render, tick until a winner is decided, announce once and stop.
    ///
    /// Returns `Ok(None)` if the input closes first.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> anyhow::Result<Option<GameResult>> {
        log::info!("game started");
        renderer.render(&self.frame())?;
        loop {
            let outcome = self.tick(input)?;
            match outcome {
                TickOutcome::Continue => renderer.render(&self.frame())?,
                TickOutcome::InputClosed => {
                    log::info!("input closed before the game finished");
                    return Ok(None);
                }
                TickOutcome::Finished(result) => {
                    renderer.render(&self.frame())?;
                    renderer.announce(result)?;
                    log::info!("game over: {:?}", result);
                    return Ok(Some(result));
                }
            }
        }
    }

    fn opponent_move(&mut self) -> anyhow::Result<()> {
        if self.phase == Phase::ShipPlacement && self.cpu_ships_placed < NUM_SHIPS {
            let length = SHIP_LENGTHS[self.cpu_ships_placed];
            self.opponent
                .place_ship(&mut self.rng, &mut self.cpu, length)
                .map_err(|e| anyhow::anyhow!(e))?;
            self.cpu_ships_placed += 1;
            return Ok(());
        }
        self.opponent_fire()
    }

    fn opponent_fire(&mut self) -> anyhow::Result<()> {
        if self.cpu.sent_torpedoes().len() >= CELL_COUNT {
            return Err(anyhow::anyhow!("opponent has no untargeted cells left"));
        }
        let torpedo = loop {
            let target = self.opponent.select_target(&mut self.rng, &self.cpu);
            match self.cpu.fire_torpedo(target) {
                Ok(t) => break t,
                Err(BoardError::AlreadyFired) => continue,
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        };
        let resolved =
            exchange(&mut self.cpu, &mut self.human, torpedo).map_err(|e| anyhow::anyhow!(e))?;
        log::debug!(
            "cpu fired at {}: {}",
            resolved.position,
            if resolved.hit { "hit" } else { "miss" }
        );
        if self.human.is_defeated() {
            self.winner = Some(GameResult::OpponentWon);
        }
        Ok(())
    }

    /// Returns `false` when input closed.
    fn human_move(&mut self, input: &mut dyn InputSource) -> anyhow::Result<bool> {
        if !self.human.is_placing() {
            match self.phase {
                Phase::ShipPlacement => match SHIP_LENGTHS.get(self.human_ships_placed) {
                    Some(&length) => self
                        .human
                        .start_ship_placement(length)
                        .map_err(|e| anyhow::anyhow!(e))?,
                    None => {
                        log::debug!("all ships placed, torpedo exchange begins");
                        self.phase = Phase::TorpedoExchange;
                    }
                },
                Phase::TorpedoExchange => self.human.start_torpedo_placement(),
            }
            return Ok(true);
        }

        let event = match input.next_event()? {
            Some(event) => event,
            None => return Ok(false),
        };
        match self.phase {
            Phase::ShipPlacement => self.apply_ship_event(event),
            Phase::TorpedoExchange => self.apply_torpedo_event(event)?,
        }
        Ok(true)
    }

    fn apply_ship_event(&mut self, event: InputEvent) {
        if let Some(direction) = event.direction() {
            self.human.move_candidate(direction);
            return;
        }
        match event {
            InputEvent::Rotate => self.human.rotate_candidate(),
            InputEvent::Confirm => match self.human.commit_ship_placement() {
                Ok(_) => self.human_ships_placed += 1,
                Err(e) => log::debug!("ship placement rejected: {}", e),
            },
            _ => {}
        }
    }

    fn apply_torpedo_event(&mut self, event: InputEvent) -> anyhow::Result<()> {
        if let Some(direction) = event.direction() {
            self.human.move_candidate(direction);
            return Ok(());
        }
        if event != InputEvent::Confirm {
            return Ok(());
        }
        let torpedo = match self.human.commit_torpedo_placement() {
            Ok(t) => t,
            Err(e) => {
                log::debug!("torpedo rejected: {}", e);
                return Ok(());
            }
        };
        let resolved =
            exchange(&mut self.human, &mut self.cpu, torpedo).map_err(|e| anyhow::anyhow!(e))?;
        log::debug!(
            "human fired at {}: {}",
            resolved.position,
            if resolved.hit { "hit" } else { "miss" }
        );
        if self.cpu.is_defeated() {
            self.winner = Some(GameResult::HumanWon);
        }
        Ok(())
    }
}
