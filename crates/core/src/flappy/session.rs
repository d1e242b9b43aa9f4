//! Flappy session: bird, pipes, ground, name entry and the 3-state machine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::flappy::assets::SpriteMetrics;
use crate::flappy::bird::Bird;
use crate::flappy::leaderboard::Leaderboard;
use crate::flappy::pipes::{Contact, PipeStream};
use crate::store::ScoreStore;
use crate::types::{
    GameEvent, InputEvent, Key, FLAPPY_SCROLL, NAME_MAX_CHARS, PIPE_SPAWN_EVERY, SURFACE_HEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyState {
    ReadyToStart,
    Playing,
    /// `landed` turns true when the bird comes to rest on the ground.
    GameOver { landed: bool },
}

/// Name typed on the ready screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub active: bool,
    pub text: String,
}

impl Default for NameEntry {
    fn default() -> Self {
        Self {
            active: true,
            text: String::new(),
        }
    }
}

impl NameEntry {
    /// Append a character unless the name is already full.
    pub fn push(&mut self, c: char) -> bool {
        if self.text.chars().count() >= NAME_MAX_CHARS {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// The trimmed name, if there is one.
    pub fn trimmed(&self) -> Option<&str> {
        match self.text.trim() {
            "" => None,
            t => Some(t),
        }
    }
}

pub struct FlappySession {
    metrics: SpriteMetrics,
    state: FlappyState,
    bird: Bird,
    pipes: PipeStream,
    ground_x: f32,
    tap_frame: u8,
    frames: u32,
    score: u32,
    player_name: String,
    name_entry: NameEntry,
    leaderboard: Leaderboard,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl FlappySession {
    pub fn new(seed: u64, store: Box<dyn ScoreStore>) -> Self {
        Self::with_metrics(seed, store, SpriteMetrics::default())
    }

    pub fn with_metrics(seed: u64, store: Box<dyn ScoreStore>, metrics: SpriteMetrics) -> Self {
        Self {
            metrics,
            state: FlappyState::ReadyToStart,
            bird: Bird::new(),
            pipes: PipeStream::new(),
            ground_x: 0.0,
            tap_frame: 0,
            frames: 0,
            score: 0,
            player_name: String::new(),
            name_entry: NameEntry::default(),
            leaderboard: Leaderboard::new(store),
            rng: StdRng::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Back to the ready screen with a fresh name prompt.
    pub fn reset(&mut self) {
        self.state = FlappyState::ReadyToStart;
        self.name_entry = NameEntry::default();
        self.player_name.clear();
        self.bird.reset();
        self.pipes.clear();
        self.score = 0;
        self.events.push(GameEvent::Reset);
    }

    /// Full reinitialization used when the module is started.
    pub fn restart(&mut self) {
        self.reset();
        self.frames = 0;
        self.tap_frame = 0;
        self.ground_x = 0.0;
        self.bird = Bird::new();
        self.leaderboard.reload();
    }

    pub fn state(&self) -> FlappyState {
        self.state
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn pipes(&self) -> &PipeStream {
        &self.pipes
    }

    pub fn pipes_mut(&mut self) -> &mut PipeStream {
        &mut self.pipes
    }

    pub fn metrics(&self) -> &SpriteMetrics {
        &self.metrics
    }

    pub fn ground_x(&self) -> f32 {
        self.ground_x
    }

    /// Top edge of the ground strip.
    pub fn ground_y(&self) -> f32 {
        SURFACE_HEIGHT - self.metrics.ground.h
    }

    pub fn tap_frame(&self) -> u8 {
        self.tap_frame
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Larger of the current score and the top stored score.
    pub fn best_score(&self) -> u32 {
        self.leaderboard.best().unwrap_or(0).max(self.score)
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn name_entry(&self) -> &NameEntry {
        &self.name_entry
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Begin playing under `name` without going through the prompt.
    pub fn begin(&mut self, name: &str) {
        self.player_name = name.trim().to_string();
        self.name_entry.active = false;
        self.state = FlappyState::Playing;
        self.events.push(GameEvent::StartCue);
    }

    /// One fixed 20 ms step: bird, ground, pipes, then UI.
    pub fn step(&mut self) {
        self.update_bird();
        self.update_ground();
        self.update_pipes();
        self.update_ui();
        self.frames = self.frames.wrapping_add(1);
    }

    fn update_bird(&mut self) {
        let radius = self.metrics.bird_radius();
        let ground_y = self.ground_y();
        match self.state {
            FlappyState::ReadyToStart => self.bird.hover(self.frames),
            FlappyState::Playing => {
                self.bird.fly(self.frames);
                if self.bird.y + radius >= ground_y {
                    self.end_round();
                    return;
                }
                match self.pipes.contact(&self.bird, &self.metrics) {
                    Contact::Hit => {
                        self.events.push(GameEvent::Hit);
                        self.end_round();
                    }
                    Contact::Passed => {
                        self.score += 1;
                        self.events.push(GameEvent::Score { score: self.score });
                    }
                    Contact::None => {}
                }
            }
            FlappyState::GameOver { landed } => {
                let on_ground = self.bird.fall(ground_y, radius);
                if on_ground && !landed {
                    self.state = FlappyState::GameOver { landed: true };
                    self.events.push(GameEvent::Die);
                }
            }
        }
    }

    fn update_ground(&mut self) {
        if self.state != FlappyState::Playing {
            return;
        }
        self.ground_x = (self.ground_x - FLAPPY_SCROLL) % (self.metrics.ground.w / 2.0);
    }

    fn update_pipes(&mut self) {
        if self.state != FlappyState::Playing {
            return;
        }
        if self.frames % PIPE_SPAWN_EVERY == 0 {
            let u: f32 = self.rng.gen();
            self.pipes.spawn(u);
        }
        self.pipes.scroll(self.metrics.pipe.w);
    }

    fn update_ui(&mut self) {
        if self.state == FlappyState::Playing {
            return;
        }
        if self.frames % 10 == 0 {
            self.tap_frame = (self.tap_frame + 1) % 2;
        }
    }

    /// Playing -> GameOver.
    fn end_round(&mut self) {
        self.state = FlappyState::GameOver { landed: false };
        self.record_round();
    }

    /// Write the finished round to the leaderboard.
    fn record_round(&mut self) {
        let name = if self.player_name.is_empty() {
            self.name_entry.text.as_str()
        } else {
            self.player_name.as_str()
        };
        if let Some(record) = self.leaderboard.record(name, self.score) {
            self.events.push(GameEvent::LeaderboardSaved {
                name: record.name,
                score: record.score,
            });
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        if let InputEvent::Key {
            key: Key::Char('~'),
            shift: true,
        } = event
        {
            self.leaderboard.clear();
            self.events.push(GameEvent::LeaderboardCleared);
            // A round already over is written back into the emptied list.
            if matches!(self.state, FlappyState::GameOver { .. }) {
                self.record_round();
            }
            return;
        }

        match self.state {
            FlappyState::ReadyToStart => self.handle_name_entry(event),
            FlappyState::Playing => {
                if self.bird.flap() {
                    self.events.push(GameEvent::Flap);
                }
            }
            FlappyState::GameOver { .. } => self.reset(),
        }
    }

    fn handle_name_entry(&mut self, event: InputEvent) {
        let key = match event {
            InputEvent::Click => {
                match self.name_entry.trimmed().map(str::to_string) {
                    Some(name) => self.begin(&name),
                    None => self.events.push(GameEvent::StartCue),
                }
                return;
            }
            InputEvent::Key { key, .. } => key,
        };
        match key {
            Key::Enter => {
                if let Some(name) = self.name_entry.trimmed().map(str::to_string) {
                    self.begin(&name);
                }
            }
            Key::Backspace => self.name_entry.pop(),
            Key::Char(c) if !c.is_control() => {
                self.name_entry.push(c);
            }
            _ => {}
        }
    }

    pub fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        out.append(&mut self.events);
    }
}
