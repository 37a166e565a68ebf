#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod engine;
pub mod input;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
pub mod render;
#[cfg(feature = "std")]
pub mod terminal;
#[cfg(feature = "std")]
mod ui;

pub use engine::*;
pub use input::{map_key, InputEvent, InputSource, ScriptedInput};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::{CpuPlayer, Opponent};
pub use render::{Candidate, Frame, Renderer};
#[cfg(feature = "std")]
pub use terminal::TerminalInput;
#[cfg(feature = "std")]
pub use ui::TerminalRenderer;
