//! Two-game host: owns both modules, keeps exactly one running.

use crate::core::{FlappyGame, GameModule, Renderer, ScoreStore, TetrisGame};
use crate::types::{GameEvent, GameKind, InputEvent};

/// Mixed into the seed so the two games do not share a random stream.
const TETRIS_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct Arcade {
    flappy: FlappyGame,
    tetris: TetrisGame,
    current: GameKind,
}

impl Arcade {
    pub fn new(seed: u64, store: Box<dyn ScoreStore>, initial: GameKind) -> Self {
        Self {
            flappy: FlappyGame::new(seed, store),
            tetris: TetrisGame::new(seed ^ TETRIS_SEED_SALT),
            current: initial,
        }
    }

    pub fn current(&self) -> GameKind {
        self.current
    }

    pub fn flappy(&self) -> &FlappyGame {
        &self.flappy
    }

    pub fn tetris(&self) -> &TetrisGame {
        &self.tetris
    }

    pub fn module(&self, kind: GameKind) -> &dyn GameModule {
        match kind {
            GameKind::Flappy => &self.flappy,
            GameKind::Tetris => &self.tetris,
        }
    }

    fn module_mut(&mut self, kind: GameKind) -> &mut dyn GameModule {
        match kind {
            GameKind::Flappy => &mut self.flappy,
            GameKind::Tetris => &mut self.tetris,
        }
    }

    fn active_mut(&mut self) -> &mut dyn GameModule {
        self.module_mut(self.current)
    }

    /// Start the current game.
    pub fn start(&mut self) {
        self.active_mut().start();
    }

    /// Stop whichever game is running.
    pub fn stop(&mut self) {
        self.active_mut().stop();
    }

    /// Stop the current game and start `kind`.
    pub fn switch_to(&mut self, kind: GameKind) {
        if kind == self.current {
            self.start();
            return;
        }
        self.stop();
        self.current = kind;
        self.start();
    }

    pub fn toggle(&mut self) {
        self.switch_to(self.current.other());
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.active_mut().handle_input(event);
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.active_mut().advance(elapsed_ms);
    }

    pub fn draw(&self, out: &mut dyn Renderer) {
        self.module(self.current).draw(out);
    }

    /// Pending cues from both games, tagged with their source.
    pub fn drain_events(&mut self, out: &mut Vec<(GameKind, GameEvent)>) {
        let mut buf = Vec::new();
        for kind in [GameKind::Flappy, GameKind::Tetris] {
            self.module_mut(kind).drain_events(&mut buf);
            out.extend(buf.drain(..).map(|ev| (kind, ev)));
        }
    }
}
