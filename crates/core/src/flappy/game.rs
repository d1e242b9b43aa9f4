//! Flappy as a switchable module.

use crate::flappy::session::FlappySession;
use crate::flappy::view;
use crate::module::{FixedStep, GameModule};
use crate::render::Renderer;
use crate::store::ScoreStore;
use crate::types::{GameEvent, GameKind, InputEvent, FLAPPY_MAX_CATCH_UP, FLAPPY_STEP_MS};

pub struct FlappyGame {
    session: FlappySession,
    /// Present exactly while the module is running.
    clock: Option<FixedStep>,
    events: Vec<GameEvent>,
}

impl FlappyGame {
    pub fn new(seed: u64, store: Box<dyn ScoreStore>) -> Self {
        Self::from_session(FlappySession::new(seed, store))
    }

    pub fn from_session(session: FlappySession) -> Self {
        Self {
            session,
            clock: None,
            events: Vec::new(),
        }
    }

    pub fn session(&self) -> &FlappySession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FlappySession {
        &mut self.session
    }
}

impl GameModule for FlappyGame {
    fn kind(&self) -> GameKind {
        GameKind::Flappy
    }

    fn start(&mut self) {
        if self.clock.is_some() {
            return;
        }
        self.session.restart();
        self.clock = Some(FixedStep::new(FLAPPY_STEP_MS, FLAPPY_MAX_CATCH_UP));
        self.session.drain_events(&mut self.events);
        self.events.push(GameEvent::Started);
    }

    fn stop(&mut self) {
        if self.clock.take().is_none() {
            return;
        }
        self.session.drain_events(&mut self.events);
        self.events.push(GameEvent::Stopped);
    }

    fn is_active(&self) -> bool {
        self.clock.is_some()
    }

    fn handle_input(&mut self, event: InputEvent) {
        if self.clock.is_none() {
            return;
        }
        self.session.handle_input(event);
    }

    fn advance(&mut self, elapsed_ms: u32) {
        let Some(clock) = self.clock.as_mut() else {
            return;
        };
        for _ in 0..clock.accumulate(elapsed_ms) {
            self.session.step();
        }
    }

    fn draw(&self, out: &mut dyn Renderer) {
        view::draw(&self.session, out);
    }

    fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        self.session.drain_events(&mut self.events);
        out.append(&mut self.events);
    }
}
