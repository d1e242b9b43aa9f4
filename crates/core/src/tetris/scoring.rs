//! Scoring and speed rules.
//!
//! Classic tiered line scores scaled by `1 + level / 2`, one level per ten
//! lines starting from level 1, and a gravity interval that shrinks by a
//! fixed step per level down to a floor.

use crate::types::{
    BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES,
    MAX_LEVEL, START_LEVEL,
};

/// Level-dependent multiplier applied to line scores.
pub fn level_multiplier(level: u32) -> u32 {
    1 + level / 2
}

/// Points for clearing `lines` rows at once while at `level`.
///
/// Anything outside 1..=4 scores nothing.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0) * level_multiplier(level)
}

/// Level reached after `total_lines` cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    (START_LEVEL + total_lines / LINES_PER_LEVEL).min(MAX_LEVEL)
}

/// Gravity interval in milliseconds at `level`.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_mul(DROP_STEP_MS))
        .max(DROP_FLOOR_MS)
}

/// Points for a hard drop over `rows` rows.
pub fn hard_drop_points(rows: u32) -> u32 {
    rows * HARD_DROP_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_table_at_level_one() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 1), 500);
        assert_eq!(line_clear_points(4, 1), 800);
        assert_eq!(line_clear_points(5, 1), 0);
    }

    #[test]
    fn multiplier_grows_every_two_levels() {
        assert_eq!(level_multiplier(1), 1);
        assert_eq!(level_multiplier(2), 2);
        assert_eq!(level_multiplier(3), 2);
        assert_eq!(level_multiplier(15), 8);
        assert_eq!(line_clear_points(4, 15), 6400);
    }

    #[test]
    fn level_progression_is_capped() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(140), 15);
        assert_eq!(level_for_lines(10_000), 15);
    }

    #[test]
    fn drop_interval_has_floor() {
        assert_eq!(drop_interval_ms(1), 660);
        assert_eq!(drop_interval_ms(10), 300);
        assert_eq!(drop_interval_ms(15), 100);
        assert_eq!(drop_interval_ms(16), 90);
        assert_eq!(drop_interval_ms(u32::MAX), 90);
    }
}
