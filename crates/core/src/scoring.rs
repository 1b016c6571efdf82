//! Scoring module - line-clear points, level progression and fall speed
//!
//! - Each cleared line is worth 100 points times the level *before* the clear.
//! - Level is `1 + lines / 10`.
//! - Gravity interval is `max(1000 - (level - 1) * 60, 100)` milliseconds. The
//!   engine does not run timers; callers use this to schedule gravity ticks.

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_POINTS, MIN_FALL_MS,
};

/// Points for clearing `cleared` rows at `level`
pub fn line_clear_points(cleared: u32, level: u32) -> u32 {
    LINE_CLEAR_POINTS.saturating_mul(cleared).saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level (in milliseconds)
///
/// Level 0 is treated as level 1.
pub fn fall_interval_ms(level: u32) -> u32 {
    let steps = level.max(1) - 1;
    BASE_FALL_MS
        .saturating_sub(steps.saturating_mul(FALL_STEP_MS))
        .max(MIN_FALL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0, 5), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(3, 2), 600);
        assert_eq!(line_clear_points(4, 3), 1200);
    }

    #[test]
    fn test_line_clear_points_saturates() {
        assert_eq!(line_clear_points(4, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_fall_intervals() {
        assert_eq!(fall_interval_ms(0), 1000);
        assert_eq!(fall_interval_ms(1), 1000);
        assert_eq!(fall_interval_ms(2), 940);
        assert_eq!(fall_interval_ms(10), 460);
        assert_eq!(fall_interval_ms(16), 100);
        assert_eq!(fall_interval_ms(17), 100);
        assert_eq!(fall_interval_ms(u32::MAX), 100);
    }
}
