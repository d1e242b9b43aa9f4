//! Tetris as a switchable module.

use crate::module::GameModule;
use crate::render::Renderer;
use crate::tetris::session::{TetrisAction, TetrisSession};
use crate::tetris::view;
use crate::types::{GameEvent, GameKind, InputEvent, Key};

/// Map a key to a Tetris action.
pub fn action_for_key(key: Key) -> Option<TetrisAction> {
    match key {
        Key::Left => Some(TetrisAction::MoveLeft),
        Key::Right => Some(TetrisAction::MoveRight),
        Key::Up => Some(TetrisAction::Rotate),
        Key::Down => Some(TetrisAction::SoftDrop),
        Key::Char(' ') => Some(TetrisAction::HardDrop),
        Key::Char('p') | Key::Char('P') => Some(TetrisAction::Pause),
        Key::Char('r') | Key::Char('R') => Some(TetrisAction::Reset),
        _ => None,
    }
}

pub struct TetrisGame {
    session: TetrisSession,
    active: bool,
    events: Vec<GameEvent>,
}

impl TetrisGame {
    pub fn new(seed: u64) -> Self {
        Self {
            session: TetrisSession::new(seed),
            active: false,
            events: Vec::new(),
        }
    }

    pub fn session(&self) -> &TetrisSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TetrisSession {
        &mut self.session
    }
}

impl GameModule for TetrisGame {
    fn kind(&self) -> GameKind {
        GameKind::Tetris
    }

    fn start(&mut self) {
        if self.active {
            return;
        }
        self.session.reset();
        self.active = true;
        self.session.drain_events(&mut self.events);
        self.events.push(GameEvent::Started);
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.session.drain_events(&mut self.events);
        self.events.push(GameEvent::Stopped);
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn handle_input(&mut self, event: InputEvent) {
        if !self.active {
            return;
        }
        if let InputEvent::Key { key, .. } = event {
            if let Some(action) = action_for_key(key) {
                self.session.apply(action);
            }
        }
    }

    fn advance(&mut self, elapsed_ms: u32) {
        if !self.active {
            return;
        }
        self.session.advance(elapsed_ms);
    }

    fn draw(&self, out: &mut dyn Renderer) {
        view::draw(&self.session, self.active, out);
    }

    fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        self.session.drain_events(&mut self.events);
        out.append(&mut self.events);
    }
}
