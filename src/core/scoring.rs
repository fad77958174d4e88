//! Scoring module - pure point arithmetic
//!
//! Base points scale super-linearly with the simultaneous clear count so a
//! double is worth more than two singles, and the combo bonus rewards
//! consecutive clearing placements. The combo index counts completed
//! clears before this one, so the first clear of a chain carries no bonus.

use crate::types::{COMBO_BASE, POINTS_PER_LINE_STEP};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Base points for the cleared lines
    pub line_points: u32,
    /// Combo bonus added on top of `line_points`
    pub combo_bonus: u32,
    pub total: u32,
}

/// Base points for `lines` simultaneous clears: 10, 30, 60, 100, ...
/// (the n-th triangular number times `POINTS_PER_LINE_STEP`).
pub fn line_points(lines: usize) -> u32 {
    let n = lines as u32;
    POINTS_PER_LINE_STEP * n * (n + 1) / 2
}

/// Combo bonus: `COMBO_BASE * combo * lines`, zero when nothing cleared
pub fn combo_bonus(lines: usize, combo: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    COMBO_BASE
        .saturating_mul(combo)
        .saturating_mul(lines as u32)
}

/// Full breakdown for a placement that cleared `lines` lines with the
/// given combo index (clears in the chain before this one).
pub fn calculate_score(lines: usize, combo: u32) -> ScoreBreakdown {
    let line_points = line_points(lines);
    let combo_bonus = combo_bonus(lines, combo);
    ScoreBreakdown {
        line_points,
        combo_bonus,
        total: line_points.saturating_add(combo_bonus),
    }
}

/// Total points only
pub fn calculate_points(lines: usize, combo: u32) -> u32 {
    calculate_score(lines, combo).total
}
