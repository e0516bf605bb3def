//! Error types for Dealscore Core

use thiserror::Error;

use crate::types::VariableId;

/// Structural configuration error
///
/// A `ScoringConfig` that fails validation is treated as a fatal
/// configuration error at load time. Errors are never produced during
/// scoring itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("variable '{variable}': tier ladder is empty")]
    EmptyTiers { variable: VariableId },

    #[error("variable '{variable}': category list is empty")]
    EmptyCategories { variable: VariableId },

    #[error("variable '{variable}': tier at index {index} has ordinal {found}, expected {expected}")]
    NonSequentialTier {
        variable: VariableId,
        index: usize,
        found: u32,
        expected: u32,
    },

    #[error("variable '{variable}': first tier must not have a lower bound")]
    UnexpectedLowerBound { variable: VariableId },

    #[error("variable '{variable}': last tier must not have an upper bound")]
    UnexpectedUpperBound { variable: VariableId },

    #[error("variable '{variable}': tier {tier} is missing an interior bound")]
    MissingBound { variable: VariableId, tier: u32 },

    #[error("variable '{variable}': tier {tier} has min {min} greater than max {max}")]
    InvertedBounds {
        variable: VariableId,
        tier: u32,
        min: f64,
        max: f64,
    },

    #[error(
        "variable '{variable}': tier {tier} max {max} does not meet tier {next_tier} min {next_min}"
    )]
    Discontinuity {
        variable: VariableId,
        tier: u32,
        max: f64,
        next_tier: u32,
        next_min: f64,
    },

    #[error("variable '{variable}': duplicate category id '{id}'")]
    DuplicateCategoryId { variable: VariableId, id: String },

    #[error("variable '{variable}': points {points} outside the 0..=5 range")]
    PointsOutOfRange { variable: VariableId, points: i32 },

    #[error("slot '{slot}' holds the definition of variable '{found}'")]
    MismatchedSlot { slot: VariableId, found: VariableId },

    #[error("variable '{variable}': expected a {expected} definition")]
    WrongKind {
        variable: VariableId,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
