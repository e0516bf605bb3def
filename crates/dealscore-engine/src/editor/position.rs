//! Position ↔ value mapping for drag handles
//!
//! A ladder editor renders its handles on a 0–100 position axis. The value
//! range behind that axis spans all tier bounds plus 10% padding on each
//! side. `Direction` decides which end of the axis is the low value:
//! ascending maps position 0 to the range minimum; descending is mirrored.

use dealscore_core::{Direction, ScoringTier};

/// Value range a ladder editor maps its position axis onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderRange {
    pub min: f64,
    pub max: f64,
}

impl LadderRange {
    fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Compute the padded value range of a ladder
///
/// Runs on every pointer-move tick, so it folds over the bounds without
/// allocating.
pub fn ladder_range(tiers: &[ScoringTier]) -> LadderRange {
    let (lo, hi) = tiers
        .iter()
        .flat_map(|t| t.min.into_iter().chain(t.max))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), b| {
            (lo.min(b), hi.max(b))
        });

    if lo > hi {
        // ladder with no interior bounds
        return LadderRange { min: 0.0, max: 1.0 };
    }

    let pad = if hi > lo { (hi - lo) * 0.1 } else { 1.0 };
    LadderRange {
        min: lo - pad,
        max: hi + pad,
    }
}

/// Map a 0–100 handle position to a value
pub fn position_to_value(range: LadderRange, direction: Direction, position: f64) -> f64 {
    let t = (position / 100.0).clamp(0.0, 1.0);
    match direction {
        Direction::Ascending => range.min + t * range.span(),
        Direction::Descending => range.max - t * range.span(),
    }
}

/// Map a value back to a 0–100 handle position
pub fn value_to_position(range: LadderRange, direction: Direction, value: f64) -> f64 {
    if range.span() <= 0.0 {
        return 0.0;
    }
    let t = ((value - range.min) / range.span()).clamp(0.0, 1.0);
    let t = match direction {
        Direction::Ascending => t,
        Direction::Descending => 1.0 - t,
    };
    t * 100.0
}
