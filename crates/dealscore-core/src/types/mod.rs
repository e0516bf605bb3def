//! Scoring model types
//!
//! This module contains the data model for configurable deal scoring:
//! - Tier and category definitions
//! - Variable configuration (numeric ladder or categorical lookup)
//! - The five-variable `ScoringConfig` record
//! - Structural validation

pub mod category;
pub mod color;
pub mod config;
pub mod tier;
pub mod validator;
pub mod variable;

pub use category::CategoryOption;
pub use color::BandColor;
pub use config::ScoringConfig;
pub use tier::ScoringTier;
pub use variable::{Direction, InputType, VariableConfig, VariableId, VariableKind};
