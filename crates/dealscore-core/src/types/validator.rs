//! Structural validation for scoring configurations
//!
//! Hand-edited presets are exactly where ladder drift happens silently, so
//! configs are validated at load/preset time and a violation is fatal.
//! Checks per numeric variable:
//! - tier ordinals are 1-based and sequential
//! - the first tier has no lower bound, the last no upper bound, and every
//!   interior boundary is present
//! - adjacent tiers share their boundary (`tier[i].max == tier[i+1].min`)
//! - no tier has `min > max`
//! - points stay within 0..=5
//!
//! Categorical variables must have unique ids and points within 0..=5.

use std::collections::HashSet;

use super::config::ScoringConfig;
use super::variable::{VariableConfig, VariableId, VariableKind};
use crate::error::{ConfigError, Result};

/// Validate a full five-variable configuration
pub fn validate_config(config: &ScoringConfig) -> Result<()> {
    for slot in VariableId::ALL {
        let var = config.variable(slot);
        if var.id != slot {
            return Err(ConfigError::MismatchedSlot {
                slot,
                found: var.id,
            });
        }
        validate_variable(var)?;
    }
    Ok(())
}

/// Validate one variable definition
pub fn validate_variable(var: &VariableConfig) -> Result<()> {
    // seasonality is the only categorical dimension in the closed set
    match (&var.kind, var.id) {
        (VariableKind::Categorical { .. }, VariableId::Seasonality) => {}
        (VariableKind::Numeric { .. }, VariableId::Seasonality) => {
            return Err(ConfigError::WrongKind {
                variable: var.id,
                expected: "categorical",
            })
        }
        (VariableKind::Categorical { .. }, _) => {
            return Err(ConfigError::WrongKind {
                variable: var.id,
                expected: "numeric",
            })
        }
        (VariableKind::Numeric { .. }, _) => {}
    }

    match &var.kind {
        VariableKind::Numeric { tiers, .. } => validate_tiers(var.id, tiers),
        VariableKind::Categorical { categories } => validate_categories(var.id, categories),
    }
}

fn validate_tiers(variable: VariableId, tiers: &[super::tier::ScoringTier]) -> Result<()> {
    if tiers.is_empty() {
        return Err(ConfigError::EmptyTiers { variable });
    }

    let last = tiers.len() - 1;
    for (index, tier) in tiers.iter().enumerate() {
        let expected = index as u32 + 1;
        if tier.tier != expected {
            return Err(ConfigError::NonSequentialTier {
                variable,
                index,
                found: tier.tier,
                expected,
            });
        }

        if index == 0 && tier.min.is_some() {
            return Err(ConfigError::UnexpectedLowerBound { variable });
        }
        if index == last && tier.max.is_some() {
            return Err(ConfigError::UnexpectedUpperBound { variable });
        }
        if index > 0 && tier.min.is_none() || index < last && tier.max.is_none() {
            return Err(ConfigError::MissingBound {
                variable,
                tier: tier.tier,
            });
        }

        if let (Some(min), Some(max)) = (tier.min, tier.max) {
            if min > max {
                return Err(ConfigError::InvertedBounds {
                    variable,
                    tier: tier.tier,
                    min,
                    max,
                });
            }
        }

        if !(0..=5).contains(&tier.points) {
            return Err(ConfigError::PointsOutOfRange {
                variable,
                points: tier.points,
            });
        }
    }

    for pair in tiers.windows(2) {
        let (cur, next) = (&pair[0], &pair[1]);
        match (cur.max, next.min) {
            (Some(max), Some(min)) if max == min => {}
            (max, min) => {
                return Err(ConfigError::Discontinuity {
                    variable,
                    tier: cur.tier,
                    max: max.unwrap_or(f64::NAN),
                    next_tier: next.tier,
                    next_min: min.unwrap_or(f64::NAN),
                });
            }
        }
    }

    Ok(())
}

fn validate_categories(
    variable: VariableId,
    categories: &[super::category::CategoryOption],
) -> Result<()> {
    if categories.is_empty() {
        return Err(ConfigError::EmptyCategories { variable });
    }

    let mut seen = HashSet::new();
    for cat in categories {
        if !seen.insert(cat.id.as_str()) {
            return Err(ConfigError::DuplicateCategoryId {
                variable,
                id: cat.id.clone(),
            });
        }
        if !(0..=5).contains(&cat.points) {
            return Err(ConfigError::PointsOutOfRange {
                variable,
                points: cat.points,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::types::category::CategoryOption;
    use crate::types::color::BandColor;
    use crate::types::tier::ScoringTier;
    use crate::types::variable::{Direction, InputType};

    fn numeric_var(tiers: Vec<ScoringTier>) -> VariableConfig {
        VariableConfig::numeric(
            VariableId::Tib,
            "Time in Business",
            tiers,
            InputType::Duration,
            Some("years".to_string()),
            Direction::Ascending,
        )
    }

    #[test]
    fn test_all_presets_validate() {
        presets::balanced().validate().unwrap();
        presets::conservative().validate().unwrap();
        presets::lenient().validate().unwrap();
    }

    #[test]
    fn test_discontinuity_rejected() {
        let var = numeric_var(vec![
            ScoringTier::new(1, None, Some(2.0), 0, "A", BandColor::Red),
            ScoringTier::new(2, Some(3.0), None, 5, "B", BandColor::Green),
        ]);
        assert!(matches!(
            validate_variable(&var),
            Err(ConfigError::Discontinuity { .. })
        ));
    }

    #[test]
    fn test_non_sequential_ordinal_rejected() {
        let var = numeric_var(vec![
            ScoringTier::new(1, None, Some(2.0), 0, "A", BandColor::Red),
            ScoringTier::new(3, Some(2.0), None, 5, "B", BandColor::Green),
        ]);
        assert!(matches!(
            validate_variable(&var),
            Err(ConfigError::NonSequentialTier { found: 3, .. })
        ));
    }

    #[test]
    fn test_bounded_first_tier_rejected() {
        let var = numeric_var(vec![
            ScoringTier::new(1, Some(0.0), Some(2.0), 0, "A", BandColor::Red),
            ScoringTier::new(2, Some(2.0), None, 5, "B", BandColor::Green),
        ]);
        assert_eq!(
            validate_variable(&var),
            Err(ConfigError::UnexpectedLowerBound {
                variable: VariableId::Tib
            })
        );
    }

    #[test]
    fn test_missing_interior_bound_rejected() {
        let var = numeric_var(vec![
            ScoringTier::new(1, None, None, 0, "A", BandColor::Red),
            ScoringTier::new(2, Some(2.0), None, 5, "B", BandColor::Green),
        ]);
        assert!(matches!(
            validate_variable(&var),
            Err(ConfigError::MissingBound { .. })
        ));
    }

    #[test]
    fn test_duplicate_category_id_rejected() {
        let var = VariableConfig::categorical(
            VariableId::Seasonality,
            "Seasonality",
            vec![
                CategoryOption::new("high", "High", 1, BandColor::Orange),
                CategoryOption::new("high", "Also High", 2, BandColor::Yellow),
            ],
        );
        assert_eq!(
            validate_variable(&var),
            Err(ConfigError::DuplicateCategoryId {
                variable: VariableId::Seasonality,
                id: "high".to_string()
            })
        );
    }

    #[test]
    fn test_points_out_of_range_rejected() {
        let var = numeric_var(vec![ScoringTier::new(
            1,
            None,
            None,
            9,
            "A",
            BandColor::Green,
        )]);
        assert!(matches!(
            validate_variable(&var),
            Err(ConfigError::PointsOutOfRange { points: 9, .. })
        ));
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let var = VariableConfig::categorical(
            VariableId::Wh,
            "Warehouse Lending",
            vec![CategoryOption::new("none", "None", 5, BandColor::Green)],
        );
        assert!(matches!(
            validate_variable(&var),
            Err(ConfigError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_mismatched_slot_rejected() {
        let mut config = presets::balanced();
        config.tib.id = VariableId::Wh;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MismatchedSlot { .. })
        ));
    }
}
