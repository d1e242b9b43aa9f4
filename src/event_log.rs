//! JSONL event log.
//!
//! One JSON object per game cue, appended to `ARCADE_LOG_PATH`:
//! `{"t_ms":1200,"game":"flappy","event":"score","score":3}`.
//! A failed write disables the log for the rest of the run.

use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};

use serde::Serialize;

use crate::types::{GameEvent, GameKind};

#[derive(Debug, Default, Serialize)]
struct LogRecord<'a> {
    t_ms: u64,
    game: &'a str,
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    piece: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paused: Option<bool>,
}

impl<'a> LogRecord<'a> {
    fn new(t_ms: u64, game: GameKind, event: &'a GameEvent) -> Self {
        let mut rec = LogRecord {
            t_ms,
            game: game.as_str(),
            event: event.name(),
            ..LogRecord::default()
        };
        match event {
            GameEvent::Score { score } | GameEvent::GameOver { score } => {
                rec.score = Some(*score);
            }
            GameEvent::LeaderboardSaved { name, score } => {
                rec.name = Some(name.as_str());
                rec.score = Some(*score);
            }
            GameEvent::PieceLocked { kind } => rec.piece = Some(kind.as_str()),
            GameEvent::LinesCleared { count, points } => {
                rec.count = Some(*count);
                rec.points = Some(*points);
            }
            GameEvent::Paused { paused } => rec.paused = Some(*paused),
            _ => {}
        }
        rec
    }
}

pub struct EventLog<W: Write = LineWriter<File>> {
    sink: Option<W>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Open `path` for appending, or a disabled log when `path` is `None`.
    pub fn open(path: Option<&str>) -> io::Result<Self> {
        let sink = match path {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Some(LineWriter::new(file))
            }
            None => None,
        };
        Ok(Self {
            sink,
            buf: Vec::with_capacity(256),
        })
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Some(sink),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, t_ms: u64, game: GameKind, event: &GameEvent) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &LogRecord::new(t_ms, game, event)).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if sink.write_all(&self.buf).is_err() {
            self.sink = None;
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.sink
    }
}
