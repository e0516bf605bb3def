//! Numeric scoring tiers
//!
//! A numeric variable is scored against an ordered ladder of tiers. Each
//! tier covers a half-open range `[min, max)`: the first tier has no lower
//! bound, the last tier has no upper bound, and adjacent tiers share their
//! boundary value (`tier[i].max == tier[i+1].min`).

use serde::{Deserialize, Serialize};

use super::color::BandColor;

/// One rung of a numeric scoring ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringTier {
    /// Ordinal position, 1-based, strictly increasing within a variable
    pub tier: u32,

    /// Lower bound (inclusive); absent only on the first tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound (exclusive); absent only on the last tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Score awarded when a value falls inside this tier
    pub points: i32,

    /// Human-readable tier name (e.g. "Poor", "Excellent")
    pub label: String,

    /// Hand-authored risk band, not derived from `points`
    pub color: BandColor,
}

impl ScoringTier {
    /// Create a new tier
    pub fn new(
        tier: u32,
        min: Option<f64>,
        max: Option<f64>,
        points: i32,
        label: impl Into<String>,
        color: BandColor,
    ) -> Self {
        ScoringTier {
            tier,
            min,
            max,
            points,
            label: label.into(),
            color,
        }
    }

    /// Whether `value` falls inside this tier's half-open range
    ///
    /// A missing bound is unbounded on that side.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value < max)
    }
}

/// Find the tier a raw value lands in
///
/// Returns `None` for an empty ladder or non-finite input; a well-formed
/// ladder covers the whole number line otherwise.
pub fn resolve_tier(tiers: &[ScoringTier], value: f64) -> Option<&ScoringTier> {
    if !value.is_finite() {
        return None;
    }
    tiers.iter().find(|t| t.contains(value))
}
