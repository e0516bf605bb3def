//! Dealscore Core - Scoring model for the dealscore engine
//!
//! This crate provides the fundamental types used across the dealscore
//! workspace:
//! - Tier and category definitions for scoring variables
//! - The five-variable `ScoringConfig` record
//! - Structural validation for hand-authored configurations
//! - The three built-in presets (balanced, conservative, lenient)
//! - Error types

pub mod error;
pub mod presets;
pub mod types;

// Re-export commonly used types
pub use error::ConfigError;
pub use types::{
    BandColor, CategoryOption, Direction, InputType, ScoringConfig, ScoringTier, VariableConfig,
    VariableId, VariableKind,
};
