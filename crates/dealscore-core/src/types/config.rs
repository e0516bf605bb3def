//! The five-variable scoring configuration record
//!
//! `ScoringConfig` is the unit of save/load/reset: a closed record of the
//! five variable definitions. Configs are plain values; editing produces a
//! new value rather than mutating a shared one.

use serde::{Deserialize, Serialize};

use super::validator;
use super::variable::{VariableConfig, VariableId};
use crate::error::Result;

/// Complete scoring configuration: exactly five variable definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub tib: VariableConfig,
    pub seasonality: VariableConfig,
    pub wh: VariableConfig,
    pub credit_score: VariableConfig,
    pub ue: VariableConfig,
}

impl ScoringConfig {
    /// The definition for one variable
    pub fn variable(&self, id: VariableId) -> &VariableConfig {
        match id {
            VariableId::Tib => &self.tib,
            VariableId::Seasonality => &self.seasonality,
            VariableId::Wh => &self.wh,
            VariableId::CreditScore => &self.credit_score,
            VariableId::Ue => &self.ue,
        }
    }

    /// Mutable definition for one variable
    pub fn variable_mut(&mut self, id: VariableId) -> &mut VariableConfig {
        match id {
            VariableId::Tib => &mut self.tib,
            VariableId::Seasonality => &mut self.seasonality,
            VariableId::Wh => &mut self.wh,
            VariableId::CreditScore => &mut self.credit_score,
            VariableId::Ue => &mut self.ue,
        }
    }

    /// All five definitions in display order
    pub fn variables(&self) -> impl Iterator<Item = &VariableConfig> {
        VariableId::ALL.iter().map(move |id| self.variable(*id))
    }

    /// Validate the structural invariants of every variable
    ///
    /// Hand-edited presets and externally loaded configs go through this
    /// before use; a violation is a fatal configuration error.
    pub fn validate(&self) -> Result<()> {
        validator::validate_config(self)
    }
}
