//! Canvas arcade runner (default binary).
//!
//! Uses crossterm for input and the framebuffer canvas for output. Tab
//! switches between Flappy and Tetris, Esc or Ctrl-C quits.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use canvas_arcade::core::{MemoryStore, ScoreStore};
use canvas_arcade::input::{host_command, map_key_event, map_mouse_event, HostCommand};
use canvas_arcade::store::JsonFileStore;
use canvas_arcade::term::TerminalRenderer;
use canvas_arcade::types::{GameEvent, GameKind};
use canvas_arcade::{Arcade, ArcadeConfig, EventLog};

fn main() -> Result<()> {
    let config = ArcadeConfig::from_env();

    let mut log = match EventLog::open(config.log_path.as_deref()) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("[Arcade] event log disabled: {}", e);
            EventLog::disabled()
        }
    };

    let store: Box<dyn ScoreStore> = match &config.leaderboard_path {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };
    let mut arcade = Arcade::new(config.seed, store, config.game);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut arcade, &mut log, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    arcade: &mut Arcade,
    log: &mut EventLog,
    config: &ArcadeConfig,
) -> Result<()> {
    let started = Instant::now();
    let frame = Duration::from_millis(config.frame_ms);
    let mut last_frame = Instant::now();
    let mut events: Vec<(GameKind, GameEvent)> = Vec::new();

    arcade.start();

    loop {
        // Render.
        let status = status_line(arcade.current());
        term.present(&status, |canvas| arcade.draw(canvas))?;

        // Input with timeout until next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match host_command(key) {
                    Some(HostCommand::Quit) => {
                        arcade.stop();
                        flush_events(arcade, log, &mut events, started);
                        return Ok(());
                    }
                    Some(HostCommand::SwitchGame) => arcade.toggle(),
                    None => {
                        if let Some(input) = map_key_event(key) {
                            arcade.handle_input(input);
                        }
                    }
                },
                Event::Mouse(mouse) => {
                    if let Some(input) = map_mouse_event(mouse) {
                        arcade.handle_input(input);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            arcade.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }

        flush_events(arcade, log, &mut events, started);
    }
}

fn flush_events(
    arcade: &mut Arcade,
    log: &mut EventLog,
    events: &mut Vec<(GameKind, GameEvent)>,
    started: Instant,
) {
    arcade.drain_events(events);
    let t_ms = started.elapsed().as_millis() as u64;
    for (kind, event) in events.drain(..) {
        log.record(t_ms, kind, &event);
    }
}

fn status_line(current: GameKind) -> String {
    let (flappy, tetris) = match current {
        GameKind::Flappy => ("[FLAPPY]", " tetris "),
        GameKind::Tetris => (" flappy ", "[TETRIS]"),
    };
    format!("{} {}   Tab: switch   Esc: quit", flappy, tetris)
}
