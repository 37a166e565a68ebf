use crate::engine::vec2::Vec2;

/// A committed shot. `hit` is decided by the receiving board; the sender's
/// copy stays `false` until the resolved copy is recorded back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torpedo {
    pub position: Vec2,
    pub hit: bool,
}

impl Torpedo {
    /// An unresolved shot at `position`.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            hit: false,
        }
    }
}
