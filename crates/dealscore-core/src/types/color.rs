//! Coarse risk-band colors
//!
//! Two independent color paths exist in the system. A tier or category
//! stores a hand-authored `color`, and the calculators derive a second
//! color from the `points / max_points` ratio. The two are allowed to
//! disagree and are never reconciled.

use serde::{Deserialize, Serialize};

/// Coarse risk-banding color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl BandColor {
    /// Hex color used by the presentation layer
    pub fn hex(&self) -> &'static str {
        match self {
            BandColor::Red => "#ef4444",
            BandColor::Orange => "#f97316",
            BandColor::Yellow => "#eab308",
            BandColor::Green => "#22c55e",
        }
    }

    /// Derive a band from a `points / max_points` ratio
    ///
    /// Ratio ≤ 0.2 is red, ≤ 0.4 orange, ≤ 0.6 yellow, anything above is
    /// green. This is the calculators' color path, independent of the
    /// hand-authored color stored on a tier.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 0.2 {
            BandColor::Red
        } else if ratio <= 0.4 {
            BandColor::Orange
        } else if ratio <= 0.6 {
            BandColor::Yellow
        } else {
            BandColor::Green
        }
    }
}
