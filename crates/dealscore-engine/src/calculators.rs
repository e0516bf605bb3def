//! Tier calculators
//!
//! Five pure functions, one per scoring variable, mapping a raw value to
//! `{points, progress, color}`. Buckets are inclusive on the lower end and
//! exclusive on the upper end; the terminal bucket is unbounded. The
//! bucket tables are hardcoded: they match the `balanced` preset's
//! ladders, not whatever config is currently being edited.
//!
//! The color here is derived from the `points / MAX_POINTS` ratio and is
//! intentionally independent of the hand-authored color stored on a tier;
//! the two paths may disagree and are not reconciled.
//!
//! Non-finite input (NaN, ±inf) scores the variable's worst bucket rather
//! than erroring: unknown input is deliberately treated as worst case.

use dealscore_core::{BandColor, VariableId};
use serde::Serialize;

/// Maximum points for every variable, including the floored ones
pub const MAX_POINTS: i32 = 5;

/// Result of scoring one raw value against one variable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierScore {
    /// Points awarded, 0..=5 (1..=5 for floored variables)
    pub points: i32,

    /// Progress-bar fill percentage, exactly `points / 5 * 100`
    pub progress: f64,

    /// Ratio-derived hex fill color
    pub color: &'static str,
}

impl TierScore {
    fn from_points(points: i32) -> Self {
        let ratio = points as f64 / MAX_POINTS as f64;
        TierScore {
            points,
            progress: (ratio * 100.0).clamp(0.0, 100.0),
            color: BandColor::from_ratio(ratio).hex(),
        }
    }
}

/// Score time in business, in years
pub fn tib_score(years: f64) -> TierScore {
    let points = if !years.is_finite() {
        0
    } else if years >= 10.0 {
        5
    } else if years >= 7.0 {
        4
    } else if years >= 4.0 {
        3
    } else if years >= 2.0 {
        2
    } else if years >= 1.0 {
        1
    } else {
        0
    };
    TierScore::from_points(points)
}

/// Score a seasonality category, matched against the lowercase label
///
/// Unrecognized categories score 0: unknown is worst case, by design.
pub fn seasonality_score(category: &str) -> TierScore {
    let points = match category {
        "none" => 5,
        "very low" => 4,
        "low" => 3,
        "moderate" => 2,
        "high" => 1,
        _ => 0, // includes "very high"
    };
    TierScore::from_points(points)
}

/// Score warehouse lending share, in percent (higher is worse)
pub fn wh_score(pct: f64) -> TierScore {
    let points = if !pct.is_finite() {
        0
    } else if pct >= 20.0 {
        0
    } else if pct >= 15.0 {
        1
    } else if pct >= 10.0 {
        2
    } else if pct >= 5.0 {
        3
    } else if pct >= 1.0 {
        4
    } else {
        5
    };
    TierScore::from_points(points)
}

/// Score a personal credit score (floored at 1 point)
pub fn credit_score(score: f64) -> TierScore {
    let points = if !score.is_finite() {
        1
    } else if score >= 750.0 {
        5
    } else if score >= 650.0 {
        4
    } else if score >= 600.0 {
        3
    } else if score >= 550.0 {
        2
    } else {
        1
    };
    TierScore::from_points(points)
}

/// Score a regional unemployment rate, in percent (higher is worse,
/// floored at 1 point)
pub fn ue_score(pct: f64) -> TierScore {
    let points = if !pct.is_finite() {
        1
    } else if pct >= 6.0 {
        1
    } else if pct >= 4.0 {
        2
    } else if pct >= 3.0 {
        3
    } else if pct >= 2.0 {
        4
    } else {
        5
    };
    TierScore::from_points(points)
}

/// Dispatch a numeric raw value to the matching calculator
///
/// Returns `None` for the categorical seasonality variable.
pub fn numeric_score(id: VariableId, value: f64) -> Option<TierScore> {
    match id {
        VariableId::Tib => Some(tib_score(value)),
        VariableId::Wh => Some(wh_score(value)),
        VariableId::CreditScore => Some(credit_score(value)),
        VariableId::Ue => Some(ue_score(value)),
        VariableId::Seasonality => None,
    }
}
