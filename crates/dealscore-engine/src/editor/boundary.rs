//! The boundary-edit command
//!
//! Adjacent tiers share their boundary value, so setting tier `i`'s max
//! also sets tier `i+1`'s min (and symmetrically for min edits). The
//! command is a pure function over `ScoringConfig` values, free of any
//! event-loop or UI binding: drag handlers and input fields both funnel
//! through `apply_boundary_edit`.
//!
//! A boundary may only move within the window formed by the preceding
//! tier's own min and the following tier's own max, so an edit can never
//! produce `min > max` anywhere in the ladder.

use dealscore_core::{ScoringConfig, VariableConfig, VariableId, VariableKind};

use crate::error::{EditError, Result};

/// Which side of a tier a boundary edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// The window a boundary may move within
///
/// `None` on a side means unbounded (the neighbour's outer bound is the
/// ladder edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryLimits {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl BoundaryLimits {
    /// Clamp a candidate value into this window (drag path)
    pub fn clamp(&self, value: f64) -> f64 {
        let mut v = value;
        if let Some(lower) = self.lower {
            v = v.max(lower);
        }
        if let Some(upper) = self.upper {
            v = v.min(upper);
        }
        v
    }

    /// Check a candidate value against this window (typed-input path)
    pub fn check(&self, value: f64) -> Result<()> {
        if let Some(lower) = self.lower {
            if value < lower {
                return Err(EditError::BelowLimit { limit: lower });
            }
        }
        if let Some(upper) = self.upper {
            if value > upper {
                return Err(EditError::AboveLimit { limit: upper });
            }
        }
        Ok(())
    }
}

/// The window tier `tier_index`'s `bound` may move within
pub fn boundary_limits(
    var: &VariableConfig,
    tier_index: usize,
    bound: Bound,
) -> Result<BoundaryLimits> {
    let tiers = match &var.kind {
        VariableKind::Numeric { tiers, .. } => tiers,
        VariableKind::Categorical { .. } => {
            return Err(EditError::NotNumeric { variable: var.id })
        }
    };
    if tier_index >= tiers.len() {
        return Err(EditError::TierOutOfRange {
            variable: var.id,
            index: tier_index,
        });
    }

    match bound {
        Bound::Max => {
            // the last tier's max is unbounded
            if tier_index + 1 >= tiers.len() {
                return Err(EditError::UnboundedEdge {
                    variable: var.id,
                    index: tier_index,
                });
            }
            Ok(BoundaryLimits {
                lower: tiers[tier_index].min,
                upper: tiers[tier_index + 1].max,
            })
        }
        Bound::Min => {
            if tier_index == 0 {
                return Err(EditError::UnboundedEdge {
                    variable: var.id,
                    index: tier_index,
                });
            }
            Ok(BoundaryLimits {
                lower: tiers[tier_index - 1].min,
                upper: tiers[tier_index].max,
            })
        }
    }
}

/// Set one tier boundary and propagate it to the adjacent tier
///
/// Functional update: the input config is untouched and a new config value
/// is returned. Values outside the boundary window are rejected; drag
/// handlers clamp with [`BoundaryLimits::clamp`] before calling.
pub fn apply_boundary_edit(
    config: &ScoringConfig,
    variable: VariableId,
    tier_index: usize,
    bound: Bound,
    value: f64,
) -> Result<ScoringConfig> {
    if !value.is_finite() {
        return Err(EditError::NonFiniteValue);
    }

    let var = config.variable(variable);
    boundary_limits(var, tier_index, bound)?.check(value)?;

    let mut next = config.clone();
    let tiers = next
        .variable_mut(variable)
        .kind
        .tiers_mut()
        .ok_or(EditError::NotNumeric { variable })?;

    match bound {
        Bound::Max => {
            tiers[tier_index].max = Some(value);
            tiers[tier_index + 1].min = Some(value);
        }
        Bound::Min => {
            tiers[tier_index].min = Some(value);
            tiers[tier_index - 1].max = Some(value);
        }
    }

    tracing::debug!(
        variable = %variable,
        tier_index,
        value,
        "boundary committed"
    );

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealscore_core::presets;

    #[test]
    fn test_max_edit_propagates_to_next_min() {
        let config = presets::balanced();
        let edited =
            apply_boundary_edit(&config, VariableId::CreditScore, 1, Bound::Max, 625.0).unwrap();
        let tiers = edited.credit_score.kind.tiers().unwrap();
        assert_eq!(tiers[1].max, Some(625.0));
        assert_eq!(tiers[2].min, Some(625.0));
        // input untouched
        assert_eq!(
            config.credit_score.kind.tiers().unwrap()[1].max,
            Some(600.0)
        );
    }

    #[test]
    fn test_min_edit_propagates_to_previous_max() {
        let config = presets::balanced();
        let edited = apply_boundary_edit(&config, VariableId::Tib, 2, Bound::Min, 2.5).unwrap();
        let tiers = edited.tib.kind.tiers().unwrap();
        assert_eq!(tiers[2].min, Some(2.5));
        assert_eq!(tiers[1].max, Some(2.5));
    }

    #[test]
    fn test_continuity_holds_after_every_edit_on_every_preset() {
        for config in [
            presets::balanced(),
            presets::conservative(),
            presets::lenient(),
        ] {
            for id in [
                VariableId::Tib,
                VariableId::Wh,
                VariableId::CreditScore,
                VariableId::Ue,
            ] {
                let tiers = config.variable(id).kind.tiers().unwrap().to_vec();
                for i in 0..tiers.len() - 1 {
                    let limits = boundary_limits(config.variable(id), i, Bound::Max).unwrap();
                    let midpoint = match (limits.lower, limits.upper) {
                        (Some(lo), Some(hi)) => (lo + hi) / 2.0,
                        (Some(lo), None) => lo + 1.0,
                        (None, Some(hi)) => hi - 1.0,
                        (None, None) => 0.0,
                    };
                    let edited =
                        apply_boundary_edit(&config, id, i, Bound::Max, midpoint).unwrap();
                    edited.validate().unwrap();
                    let edited_tiers = edited.variable(id).kind.tiers().unwrap();
                    for pair in edited_tiers.windows(2) {
                        assert_eq!(pair[0].max, pair[1].min);
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_window_value_rejected() {
        let config = presets::balanced();
        // tier 2 (index 1) of creditScore may move within [550, 650]
        assert_eq!(
            apply_boundary_edit(&config, VariableId::CreditScore, 1, Bound::Max, 660.0),
            Err(EditError::AboveLimit { limit: 650.0 })
        );
        assert_eq!(
            apply_boundary_edit(&config, VariableId::CreditScore, 1, Bound::Max, 540.0),
            Err(EditError::BelowLimit { limit: 550.0 })
        );
    }

    #[test]
    fn test_clamp_against_both_neighbours() {
        let config = presets::balanced();
        let limits = boundary_limits(config.variable(VariableId::CreditScore), 1, Bound::Max)
            .unwrap();
        assert_eq!(limits.clamp(660.0), 650.0);
        assert_eq!(limits.clamp(540.0), 550.0);
        assert_eq!(limits.clamp(625.0), 625.0);
    }

    #[test]
    fn test_unbounded_edges_not_editable() {
        let config = presets::balanced();
        let tiers = config.tib.kind.tiers().unwrap();
        let last = tiers.len() - 1;
        assert!(matches!(
            apply_boundary_edit(&config, VariableId::Tib, last, Bound::Max, 99.0),
            Err(EditError::UnboundedEdge { .. })
        ));
        assert!(matches!(
            apply_boundary_edit(&config, VariableId::Tib, 0, Bound::Min, -1.0),
            Err(EditError::UnboundedEdge { .. })
        ));
    }

    #[test]
    fn test_categorical_variable_rejected() {
        let config = presets::balanced();
        assert_eq!(
            apply_boundary_edit(&config, VariableId::Seasonality, 0, Bound::Max, 1.0),
            Err(EditError::NotNumeric {
                variable: VariableId::Seasonality
            })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = presets::balanced();
        assert_eq!(
            apply_boundary_edit(&config, VariableId::Tib, 0, Bound::Max, f64::NAN),
            Err(EditError::NonFiniteValue)
        );
    }
}
