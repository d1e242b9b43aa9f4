//! Tetris session - the complete game state
//!
//! Ties the board, the active and next pieces, scoring and the drop timer
//! together. Everything is driven by explicit calls: [`TetrisSession::apply`]
//! for player actions and [`TetrisSession::advance`] for elapsed time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tetris::board::Board;
use crate::tetris::scoring::{
    drop_interval_ms, hard_drop_points, level_for_lines, line_clear_points,
};
use crate::tetris::shape::Shape;
use crate::types::{
    GameEvent, PieceKind, BASE_DROP_MS, BOARD_WIDTH, SOFT_DROP_POINTS, SPAWN_Y, START_LEVEL,
};

/// The falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece in spawn orientation, horizontally centered, above the board.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::spawn(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH as i8 - shape.cols() as i8) / 2,
            y: SPAWN_Y,
        }
    }
}

/// Player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Pause,
    Reset,
}

/// What a gravity step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened (paused, over, or timer not due).
    Idle,
    /// The piece moved down one row.
    Fell,
    /// The piece locked; `lines` rows were cleared.
    Locked { lines: u32 },
    /// The piece locked above the board or the next one could not spawn.
    GameOver,
}

#[derive(Debug, Clone)]
pub struct TetrisSession {
    board: Board,
    piece: Piece,
    next: Piece,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl TetrisSession {
    /// Create a fresh game with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let piece = Piece::spawn(random_kind(&mut rng));
        let next = Piece::spawn(random_kind(&mut rng));
        Self {
            board: Board::new(),
            piece,
            next,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            rng,
            events: Vec::new(),
        }
    }

    /// Clear the board and counters and deal two new pieces.
    ///
    /// The RNG keeps running, so consecutive games differ.
    pub fn reset(&mut self) {
        self.board.clear();
        self.piece = Piece::spawn(random_kind(&mut self.rng));
        self.next = Piece::spawn(random_kind(&mut self.rng));
        self.score = 0;
        self.lines = 0;
        self.level = START_LEVEL;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.events.push(GameEvent::Reset);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether gravity and moves currently apply.
    pub fn running(&self) -> bool {
        !self.game_over
    }

    pub fn collide(&self, x: i8, y: i8, shape: &Shape) -> bool {
        self.board.collides(x, y, shape)
    }

    /// Replace the active piece with a fresh `kind` at column `x`.
    ///
    /// Rejected (returns false) if that placement collides.
    pub fn place_active(&mut self, kind: PieceKind, x: i8) -> bool {
        let mut piece = Piece::spawn(kind);
        piece.x = x;
        if self.collide(piece.x, piece.y, &piece.shape) {
            return false;
        }
        self.piece = piece;
        true
    }

    /// Replace the queued next piece.
    pub fn set_next(&mut self, kind: PieceKind) {
        self.next = Piece::spawn(kind);
    }

    /// Shift the active piece horizontally if the target is free.
    pub fn try_shift(&mut self, dx: i8) -> bool {
        if self.game_over {
            return false;
        }
        let p = self.piece;
        if self.collide(p.x + dx, p.y, &p.shape) {
            return false;
        }
        self.piece.x += dx;
        true
    }

    /// Rotate the active piece clockwise in place. No kicks.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let rotated = self.piece.shape.rotate_cw();
        if self.collide(self.piece.x, self.piece.y, &rotated) {
            return false;
        }
        self.piece.shape = rotated;
        true
    }

    /// One gravity step: fall a row, or lock and bring in the next piece.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }

        let p = self.piece;
        if !self.collide(p.x, p.y + 1, &p.shape) {
            self.piece.y += 1;
            return TickOutcome::Fell;
        }

        // Cells above row 0 are lost on merge; a lock up there tops out.
        let locked_out = p.shape.minos().iter().any(|&(_, dy)| p.y + dy < 0);
        self.board.merge(p.x, p.y, &p.shape, p.kind);
        self.events.push(GameEvent::PieceLocked { kind: p.kind });
        let lines = self.clear_lines();

        self.piece = self.next;
        self.next = Piece::spawn(random_kind(&mut self.rng));

        if locked_out || self.collide(self.piece.x, self.piece.y, &self.piece.shape) {
            self.game_over = true;
            self.events.push(GameEvent::GameOver { score: self.score });
            return TickOutcome::GameOver;
        }

        TickOutcome::Locked { lines }
    }

    /// Remove full rows and apply scoring, level and speed.
    ///
    /// Scoring uses the level in effect before the clear.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows();
        if cleared == 0 {
            return 0;
        }

        let points = line_clear_points(cleared, self.level);
        self.lines += cleared as u32;
        self.score += points;
        self.level = level_for_lines(self.lines);
        self.drop_interval_ms = drop_interval_ms(self.level);

        self.events.push(GameEvent::LinesCleared {
            count: cleared as u32,
            points,
        });
        cleared as u32
    }

    /// Manual one-row descent; always worth the soft drop bonus.
    pub fn soft_drop(&mut self) -> TickOutcome {
        let outcome = self.tick();
        self.score += SOFT_DROP_POINTS;
        outcome
    }

    /// Drop to the lowest free row and lock. Returns rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let mut rows = 0;
        while !self.collide(self.piece.x, self.piece.y + 1, &self.piece.shape) {
            self.piece.y += 1;
            rows += 1;
        }
        self.score += hard_drop_points(rows);
        self.tick();
        rows
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.events.push(GameEvent::Paused {
            paused: self.paused,
        });
    }

    /// Apply a player action. Returns whether anything changed.
    ///
    /// While paused only `Pause` is honored. After game over only `Reset` is.
    pub fn apply(&mut self, action: TetrisAction) -> bool {
        if self.game_over {
            if action == TetrisAction::Reset {
                self.reset();
                return true;
            }
            return false;
        }
        if self.paused && action != TetrisAction::Pause {
            return false;
        }

        match action {
            TetrisAction::MoveLeft => self.try_shift(-1),
            TetrisAction::MoveRight => self.try_shift(1),
            TetrisAction::Rotate => self.rotate(),
            TetrisAction::SoftDrop => {
                self.soft_drop();
                true
            }
            TetrisAction::HardDrop => {
                self.hard_drop();
                true
            }
            TetrisAction::Reset => {
                self.reset();
                true
            }
            TetrisAction::Pause => {
                self.toggle_pause();
                true
            }
        }
    }

    /// Advance the drop timer by `elapsed_ms`, firing one gravity tick when due.
    pub fn advance(&mut self, elapsed_ms: u32) -> TickOutcome {
        if self.paused || self.game_over {
            return TickOutcome::Idle;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms {
            return TickOutcome::Idle;
        }
        self.drop_timer_ms = 0;
        self.tick()
    }

    pub fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        out.append(&mut self.events);
    }
}

fn random_kind(rng: &mut StdRng) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}
