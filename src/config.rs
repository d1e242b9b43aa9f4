//! Host configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::GameKind;

/// Frame pacing used when `ARCADE_FRAME_MS` is unset or invalid.
pub const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    /// Game shown first.
    pub game: GameKind,
    pub seed: u64,
    /// `None` when no path is configured and the home directory is unknown;
    /// scores are then kept in memory only.
    pub leaderboard_path: Option<PathBuf>,
    pub log_path: Option<String>,
    pub frame_ms: u64,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            game: GameKind::Flappy,
            seed: 1,
            leaderboard_path: None,
            log_path: None,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl ArcadeConfig {
    /// Create from environment variables.
    ///
    /// - `ARCADE_GAME`: `flappy` or `tetris`
    /// - `ARCADE_SEED`: u64, defaults to the current time
    /// - `ARCADE_LEADERBOARD_PATH`: defaults to `~/.canvas-arcade/leaderboard.json`
    /// - `ARCADE_LOG_PATH`: JSONL event log, off when unset
    /// - `ARCADE_FRAME_MS`: host frame interval
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ArcadeConfig::from_env`] over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let game = non_empty("ARCADE_GAME")
            .and_then(|s| GameKind::from_str(&s))
            .unwrap_or(GameKind::Flappy);

        let seed = non_empty("ARCADE_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(time_seed);

        let leaderboard_path = non_empty("ARCADE_LEADERBOARD_PATH")
            .map(PathBuf::from)
            .or_else(|| arcade_store::default_leaderboard_path().ok());

        let log_path = non_empty("ARCADE_LOG_PATH");

        let frame_ms = non_empty("ARCADE_FRAME_MS")
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);

        Self {
            game,
            seed,
            leaderboard_path,
            log_path,
            frame_ms,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let config = ArcadeConfig::from_lookup(lookup(&[
            ("ARCADE_GAME", "Tetris"),
            ("ARCADE_SEED", "42"),
            ("ARCADE_LEADERBOARD_PATH", "/tmp/lb.json"),
            ("ARCADE_LOG_PATH", " /tmp/events.jsonl "),
            ("ARCADE_FRAME_MS", "33"),
        ]));
        assert_eq!(config.game, GameKind::Tetris);
        assert_eq!(config.seed, 42);
        assert_eq!(config.leaderboard_path, Some(PathBuf::from("/tmp/lb.json")));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/events.jsonl"));
        assert_eq!(config.frame_ms, 33);
    }

    #[test]
    fn test_fallbacks() {
        let config = ArcadeConfig::from_lookup(lookup(&[
            ("ARCADE_GAME", "pong"),
            ("ARCADE_LOG_PATH", "   "),
            ("ARCADE_FRAME_MS", "0"),
        ]));
        assert_eq!(config.game, GameKind::Flappy);
        assert_eq!(config.log_path, None);
        assert_eq!(config.frame_ms, DEFAULT_FRAME_MS);
        if let Some(path) = config.leaderboard_path {
            assert!(path.ends_with("leaderboard.json"));
        }
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = ArcadeConfig::from_env();
    }
}
