//! Composite-score presentation adapter
//!
//! Translates a `ScoringConfig` plus the current control values into
//! renderable per-control state: resolved tier or category label, points,
//! progress fill and fill color. Controls carry string-typed raw values
//! straight from input fields; anything invalid degrades to a worst-case
//! reading instead of erroring.

use dealscore_core::{
    types::category::resolve_category, types::tier::resolve_tier, InputType, ScoringConfig,
    VariableId, VariableKind,
};
use serde::Serialize;

use crate::calculators::{self, TierScore, MAX_POINTS};
use crate::editor::format;

/// Display metadata for a numeric control's raw input
///
/// These are the input widget's bounds and step, distinct from the tier
/// boundaries in the scoring config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariableMeta {
    pub id: VariableId,
    pub label: &'static str,
    pub input_type: InputType,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
}

/// Input metadata for the four numeric variables
pub const VARIABLE_METAS: [VariableMeta; 4] = [
    VariableMeta {
        id: VariableId::Tib,
        label: "Time in Business",
        input_type: InputType::Duration,
        min: 0.0,
        max: 50.0,
        step: 0.5,
        unit: "years",
    },
    VariableMeta {
        id: VariableId::Wh,
        label: "Warehouse Lending",
        input_type: InputType::Percentage,
        min: 0.0,
        max: 100.0,
        step: 0.5,
        unit: "%",
    },
    VariableMeta {
        id: VariableId::CreditScore,
        label: "Credit Score",
        input_type: InputType::Number,
        min: 300.0,
        max: 850.0,
        step: 1.0,
        unit: "",
    },
    VariableMeta {
        id: VariableId::Ue,
        label: "Unemployment Rate",
        input_type: InputType::Percentage,
        min: 0.0,
        max: 25.0,
        step: 0.1,
        unit: "%",
    },
];

/// Metadata for one numeric variable; `None` for seasonality
pub fn variable_meta(id: VariableId) -> Option<&'static VariableMeta> {
    VARIABLE_METAS.iter().find(|m| m.id == id)
}

/// One scoring card control: a variable and its current raw input
///
/// Runtime presentation state only, never persisted. Numeric variables
/// carry a numeric string; seasonality carries a category label.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlValue {
    pub variable: VariableId,
    pub raw: String,
}

impl ControlValue {
    pub fn new(variable: VariableId, raw: impl Into<String>) -> Self {
        ControlValue {
            variable,
            raw: raw.into(),
        }
    }
}

/// Renderable state for one control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlReading {
    pub variable: VariableId,

    /// Label of the resolved tier or category in the active config, if any
    pub label: Option<String>,

    pub points: i32,

    /// Progress-bar fill percentage
    pub progress: f64,

    /// Hex fill color
    pub color: &'static str,
}

/// Aggregate presentation of a set of controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeScore {
    pub total_points: i32,
    pub max_points: i32,
    pub grade: char,
    pub readings: Vec<ControlReading>,
}

fn worst_case_reading(variable: VariableId) -> ControlReading {
    ControlReading {
        variable,
        label: None,
        points: 0,
        progress: 0.0,
        color: "#ef4444",
    }
}

fn reading_from_score(
    variable: VariableId,
    label: Option<String>,
    score: TierScore,
) -> ControlReading {
    ControlReading {
        variable,
        label,
        points: score.points,
        progress: score.progress,
        color: score.color,
    }
}

/// Resolve one control against the active config
///
/// Empty or unparseable raw input yields `{points 0, progress 0, red}`
/// without erroring; unknown seasonality labels score worst case.
pub fn read_control(config: &ScoringConfig, control: &ControlValue) -> ControlReading {
    let var = config.variable(control.variable);
    match &var.kind {
        VariableKind::Categorical { categories } => {
            let key = control.raw.trim().to_lowercase();
            let score = calculators::seasonality_score(&key);
            let label = resolve_category(categories, control.raw.trim()).map(|c| c.label.clone());
            reading_from_score(control.variable, label, score)
        }
        VariableKind::Numeric {
            tiers, input_type, ..
        } => {
            let value = match format::parse_value(*input_type, &control.raw) {
                Some(v) => v,
                None => return worst_case_reading(control.variable),
            };
            let score = match calculators::numeric_score(control.variable, value) {
                Some(s) => s,
                None => return worst_case_reading(control.variable),
            };
            let label = resolve_tier(tiers, value).map(|t| t.label.clone());
            reading_from_score(control.variable, label, score)
        }
    }
}

/// Resolve every control and aggregate the composite grade
pub fn composite_score(config: &ScoringConfig, controls: &[ControlValue]) -> CompositeScore {
    let readings: Vec<ControlReading> = controls
        .iter()
        .map(|c| read_control(config, c))
        .collect();

    let total_points: i32 = readings.iter().map(|r| r.points).sum();
    let max_points = MAX_POINTS * readings.len() as i32;
    let ratio = if max_points > 0 {
        total_points as f64 / max_points as f64
    } else {
        0.0
    };
    let grade = if ratio >= 0.8 {
        'A'
    } else if ratio >= 0.6 {
        'B'
    } else if ratio >= 0.4 {
        'C'
    } else {
        'D'
    };

    CompositeScore {
        total_points,
        max_points,
        grade,
        readings,
    }
}

/// Settle a numeric control's raw input on blur
///
/// Clamps the typed value into the variable's display bounds (metadata,
/// not tier boundaries); empty or unparseable input resets to the
/// configured minimum. Seasonality controls pass through unchanged.
pub fn clamp_on_blur(variable: VariableId, raw: &str) -> String {
    let meta = match variable_meta(variable) {
        Some(meta) => meta,
        None => return raw.to_string(),
    };
    let value = match format::parse_value(meta.input_type, raw) {
        Some(v) => v.clamp(meta.min, meta.max),
        None => meta.min,
    };
    format::format_value(meta.input_type, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealscore_core::presets;

    #[test]
    fn test_read_numeric_control() {
        let config = presets::balanced();
        let reading = read_control(
            &config,
            &ControlValue::new(VariableId::CreditScore, "680"),
        );
        assert_eq!(reading.points, 4);
        assert_eq!(reading.progress, 80.0);
        assert_eq!(reading.color, "#22c55e");
        assert_eq!(reading.label.as_deref(), Some("Very Good"));
    }

    #[test]
    fn test_invalid_raw_defaults_worst_case() {
        let config = presets::balanced();
        for raw in ["", "  ", "abc", "12x"] {
            let reading = read_control(&config, &ControlValue::new(VariableId::Tib, raw));
            assert_eq!(reading.points, 0);
            assert_eq!(reading.progress, 0.0);
            assert_eq!(reading.color, "#ef4444");
            assert_eq!(reading.label, None);
        }
    }

    #[test]
    fn test_seasonality_label_lookup_is_case_insensitive() {
        let config = presets::balanced();
        let reading = read_control(
            &config,
            &ControlValue::new(VariableId::Seasonality, "Very Low"),
        );
        assert_eq!(reading.points, 4);
        assert_eq!(reading.label.as_deref(), Some("Very Low"));
    }

    #[test]
    fn test_seasonality_unknown_scores_worst_case() {
        let config = presets::balanced();
        let reading = read_control(
            &config,
            &ControlValue::new(VariableId::Seasonality, "monsoon"),
        );
        assert_eq!(reading.points, 0);
        assert_eq!(reading.color, "#ef4444");
        assert_eq!(reading.label, None);
    }

    #[test]
    fn test_label_follows_edited_config_points_do_not() {
        // the resolved label comes from the config; points come from the
        // hardcoded calculators
        let mut config = presets::balanced();
        if let VariableKind::Numeric { tiers, .. } = &mut config.credit_score.kind {
            tiers[3].label = "Renamed".to_string();
        }
        let reading = read_control(
            &config,
            &ControlValue::new(VariableId::CreditScore, "680"),
        );
        assert_eq!(reading.label.as_deref(), Some("Renamed"));
        assert_eq!(reading.points, 4);
    }

    #[test]
    fn test_composite_grade() {
        let config = presets::balanced();
        let controls = vec![
            ControlValue::new(VariableId::Tib, "12"),        // 5
            ControlValue::new(VariableId::CreditScore, "760"), // 5
            ControlValue::new(VariableId::Wh, "0.5"),        // 5
            ControlValue::new(VariableId::Ue, "1.5"),        // 5
            ControlValue::new(VariableId::Seasonality, "None"), // 5
        ];
        let composite = composite_score(&config, &controls);
        assert_eq!(composite.total_points, 25);
        assert_eq!(composite.max_points, 25);
        assert_eq!(composite.grade, 'A');

        let weak = vec![
            ControlValue::new(VariableId::Tib, "0.5"),          // 0
            ControlValue::new(VariableId::CreditScore, "500"),  // 1
        ];
        let composite = composite_score(&config, &weak);
        assert_eq!(composite.total_points, 1);
        assert_eq!(composite.max_points, 10);
        assert_eq!(composite.grade, 'D');
    }

    #[test]
    fn test_composite_empty_controls() {
        let composite = composite_score(&presets::balanced(), &[]);
        assert_eq!(composite.total_points, 0);
        assert_eq!(composite.max_points, 0);
        assert_eq!(composite.grade, 'D');
        assert!(composite.readings.is_empty());
    }

    #[test]
    fn test_clamp_on_blur_uses_display_bounds() {
        assert_eq!(clamp_on_blur(VariableId::CreditScore, "900"), "850");
        assert_eq!(clamp_on_blur(VariableId::CreditScore, "120"), "300");
        assert_eq!(clamp_on_blur(VariableId::CreditScore, "680"), "680");
    }

    #[test]
    fn test_clamp_on_blur_empty_resets_to_minimum() {
        assert_eq!(clamp_on_blur(VariableId::Tib, ""), "0");
        assert_eq!(clamp_on_blur(VariableId::CreditScore, "abc"), "300");
    }

    #[test]
    fn test_clamp_on_blur_passes_seasonality_through() {
        assert_eq!(clamp_on_blur(VariableId::Seasonality, "High"), "High");
    }

    #[test]
    fn test_variable_meta_lookup() {
        assert!(variable_meta(VariableId::Seasonality).is_none());
        assert_eq!(variable_meta(VariableId::Ue).unwrap().max, 25.0);
    }
}
