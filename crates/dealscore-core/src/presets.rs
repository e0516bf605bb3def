//! Built-in scoring presets
//!
//! Three complete hand-authored configurations representing different
//! underwriting postures:
//! - `balanced`: the default; its ladders match the calculator buckets
//! - `conservative`: stricter boundaries (more years, lower exposure,
//!   higher credit required per point)
//! - `lenient`: looser boundaries
//!
//! Seasonality and unemployment share the same definition in all three
//! presets; time-in-business, warehouse lending and credit score differ.
//! Presets are constructed fresh on every call, so resetting one variable
//! to its default can never corrupt another config's copy.

use crate::types::{
    BandColor, CategoryOption, Direction, InputType, ScoringConfig, ScoringTier, VariableConfig,
    VariableId,
};

fn tier(
    ordinal: u32,
    min: Option<f64>,
    max: Option<f64>,
    points: i32,
    label: &str,
    color: BandColor,
) -> ScoringTier {
    ScoringTier::new(ordinal, min, max, points, label, color)
}

/// Ladder over the five interior boundaries of a six-tier variable
fn six_tier_ladder(bounds: [f64; 5], labels: [&str; 6], ascending: bool) -> Vec<ScoringTier> {
    let [b1, b2, b3, b4, b5] = bounds;
    let colors_up = [
        BandColor::Red,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Green,
    ];
    let points_up = [0, 1, 2, 3, 4, 5];
    let mins = [None, Some(b1), Some(b2), Some(b3), Some(b4), Some(b5)];
    let maxs = [Some(b1), Some(b2), Some(b3), Some(b4), Some(b5), None];

    (0..6)
        .map(|i| {
            // descending ladders award high points at the low end
            let (points, color) = if ascending {
                (points_up[i], colors_up[i])
            } else {
                (points_up[5 - i], colors_up[5 - i])
            };
            tier(i as u32 + 1, mins[i], maxs[i], points, labels[i], color)
        })
        .collect()
}

fn tib_variable(bounds: [f64; 5]) -> VariableConfig {
    VariableConfig::numeric(
        VariableId::Tib,
        "Time in Business",
        six_tier_ladder(
            bounds,
            [
                "New Business",
                "Early Stage",
                "Developing",
                "Established",
                "Mature",
                "Veteran",
            ],
            true,
        ),
        InputType::Duration,
        Some("years".to_string()),
        Direction::Ascending,
    )
}

fn wh_variable(bounds: [f64; 5]) -> VariableConfig {
    VariableConfig::numeric(
        VariableId::Wh,
        "Warehouse Lending",
        six_tier_ladder(
            bounds,
            [
                "Minimal", "Low", "Moderate", "Elevated", "High", "Critical",
            ],
            false,
        ),
        InputType::Percentage,
        Some("%".to_string()),
        Direction::Descending,
    )
}

fn credit_score_variable(bounds: [f64; 4]) -> VariableConfig {
    let [b1, b2, b3, b4] = bounds;
    VariableConfig::numeric(
        VariableId::CreditScore,
        "Credit Score",
        vec![
            tier(1, None, Some(b1), 1, "Poor", BandColor::Red),
            tier(2, Some(b1), Some(b2), 2, "Fair", BandColor::Orange),
            tier(3, Some(b2), Some(b3), 3, "Good", BandColor::Yellow),
            tier(4, Some(b3), Some(b4), 4, "Very Good", BandColor::Green),
            tier(5, Some(b4), None, 5, "Excellent", BandColor::Green),
        ],
        InputType::Number,
        None,
        Direction::Ascending,
    )
}

/// Seasonality options, shared by every preset
fn seasonality_variable() -> VariableConfig {
    VariableConfig::categorical(
        VariableId::Seasonality,
        "Seasonality",
        vec![
            CategoryOption::new("veryHigh", "Very High", 0, BandColor::Red),
            CategoryOption::new("high", "High", 1, BandColor::Orange),
            CategoryOption::new("moderate", "Moderate", 2, BandColor::Yellow),
            CategoryOption::new("low", "Low", 3, BandColor::Yellow),
            CategoryOption::new("veryLow", "Very Low", 4, BandColor::Green),
            CategoryOption::new("none", "None", 5, BandColor::Green),
        ],
    )
}

/// Unemployment-rate ladder, shared by every preset
///
/// Five tiers with a floor of 1 point: even the worst regional market does
/// not zero out a deal on its own.
fn ue_variable() -> VariableConfig {
    VariableConfig::numeric(
        VariableId::Ue,
        "Unemployment Rate",
        vec![
            tier(1, None, Some(2.0), 5, "Very Low", BandColor::Green),
            tier(2, Some(2.0), Some(3.0), 4, "Low", BandColor::Green),
            tier(3, Some(3.0), Some(4.0), 3, "Moderate", BandColor::Yellow),
            tier(4, Some(4.0), Some(6.0), 2, "Elevated", BandColor::Orange),
            tier(5, Some(6.0), None, 1, "High", BandColor::Red),
        ],
        InputType::Percentage,
        Some("%".to_string()),
        Direction::Descending,
    )
}

/// The default underwriting posture
///
/// Numeric ladders here match the hardcoded calculator buckets exactly.
pub fn balanced() -> ScoringConfig {
    ScoringConfig {
        tib: tib_variable([1.0, 2.0, 4.0, 7.0, 10.0]),
        seasonality: seasonality_variable(),
        wh: wh_variable([1.0, 5.0, 10.0, 15.0, 20.0]),
        credit_score: credit_score_variable([550.0, 600.0, 650.0, 750.0]),
        ue: ue_variable(),
    }
}

/// Stricter underwriting standards
pub fn conservative() -> ScoringConfig {
    ScoringConfig {
        tib: tib_variable([2.0, 3.0, 5.0, 8.0, 12.0]),
        seasonality: seasonality_variable(),
        wh: wh_variable([0.5, 3.0, 8.0, 12.0, 15.0]),
        credit_score: credit_score_variable([580.0, 620.0, 680.0, 780.0]),
        ue: ue_variable(),
    }
}

/// Looser underwriting standards
pub fn lenient() -> ScoringConfig {
    ScoringConfig {
        tib: tib_variable([0.5, 1.0, 3.0, 5.0, 8.0]),
        seasonality: seasonality_variable(),
        wh: wh_variable([2.0, 8.0, 15.0, 20.0, 25.0]),
        credit_score: credit_score_variable([500.0, 550.0, 600.0, 700.0]),
        ue: ue_variable(),
    }
}

/// Look up a preset by name
pub fn by_name(name: &str) -> Option<ScoringConfig> {
    match name {
        "balanced" => Some(balanced()),
        "conservative" => Some(conservative()),
        "lenient" => Some(lenient()),
        _ => None,
    }
}
