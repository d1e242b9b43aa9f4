//! Module lifecycle shared by both games.

use crate::render::Renderer;
use crate::types::{GameEvent, GameKind, InputEvent};

/// A game the host can switch on and off.
///
/// `start` and `stop` are idempotent. A stopped module ignores input and
/// `advance`, and holds no loop state; starting it again resets every entity.
pub trait GameModule {
    fn kind(&self) -> GameKind;

    fn start(&mut self);

    fn stop(&mut self);

    fn is_active(&self) -> bool;

    fn handle_input(&mut self, event: InputEvent);

    /// Advance game time by `elapsed_ms`.
    fn advance(&mut self, elapsed_ms: u32);

    /// Draw the current frame. Always safe to call, active or not.
    fn draw(&self, out: &mut dyn Renderer);

    /// Move pending cues into `out`.
    fn drain_events(&mut self, out: &mut Vec<GameEvent>);
}

/// Converts variable elapsed time into a whole number of fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStep {
    step_ms: u32,
    max_steps: u32,
    acc_ms: u32,
}

impl FixedStep {
    pub fn new(step_ms: u32, max_steps: u32) -> Self {
        Self {
            step_ms: step_ms.max(1),
            max_steps: max_steps.max(1),
            acc_ms: 0,
        }
    }

    /// Add elapsed time and return how many steps to run now.
    ///
    /// After a long stall the backlog beyond `max_steps` is dropped instead of
    /// replayed.
    pub fn accumulate(&mut self, elapsed_ms: u32) -> u32 {
        self.acc_ms = self.acc_ms.saturating_add(elapsed_ms);
        let steps = self.acc_ms / self.step_ms;
        if steps > self.max_steps {
            self.acc_ms = 0;
            return self.max_steps;
        }
        self.acc_ms -= steps * self.step_ms;
        steps
    }

    pub fn pending_ms(&self) -> u32 {
        self.acc_ms
    }
}
