//! Scoring variable definitions
//!
//! A variable is either a numeric tier ladder or a categorical lookup. The
//! two shapes are a tagged union so a definition can never carry both
//! tiers and categories at once.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryOption;
use super::tier::ScoringTier;

/// The closed set of scoring variables
///
/// Scoring configs always describe exactly these five dimensions; there is
/// no dynamic variable registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableId {
    /// Time in business (years)
    Tib,
    /// Revenue seasonality (categorical)
    Seasonality,
    /// Warehouse lending share (%)
    Wh,
    /// Personal credit score
    CreditScore,
    /// Regional unemployment rate (%)
    Ue,
}

impl VariableId {
    /// All five variables, in display order
    pub const ALL: [VariableId; 5] = [
        VariableId::Tib,
        VariableId::Seasonality,
        VariableId::Wh,
        VariableId::CreditScore,
        VariableId::Ue,
    ];

    /// Stable wire name, matching the persisted JSON keys
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableId::Tib => "tib",
            VariableId::Seasonality => "seasonality",
            VariableId::Wh => "wh",
            VariableId::CreditScore => "creditScore",
            VariableId::Ue => "ue",
        }
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a numeric variable's raw value is entered and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Thousands-separated display, commas stripped on parse
    Currency,
    Duration,
    Percentage,
    Number,
}

/// Whether higher raw values are better or worse on the visual spectrum
///
/// Direction only affects position↔value mapping when rendering or
/// dragging; the calculators hardcode their own bucket order per variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

/// The shape of one scoring variable: a tier ladder or a category list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VariableKind {
    #[serde(rename_all = "camelCase")]
    Numeric {
        tiers: Vec<ScoringTier>,
        input_type: InputType,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        direction: Direction,
    },
    Categorical { categories: Vec<CategoryOption> },
}

impl VariableKind {
    /// The tier ladder, if this is a numeric variable
    pub fn tiers(&self) -> Option<&[ScoringTier]> {
        match self {
            VariableKind::Numeric { tiers, .. } => Some(tiers),
            VariableKind::Categorical { .. } => None,
        }
    }

    /// Mutable tier ladder, if this is a numeric variable
    pub fn tiers_mut(&mut self) -> Option<&mut Vec<ScoringTier>> {
        match self {
            VariableKind::Numeric { tiers, .. } => Some(tiers),
            VariableKind::Categorical { .. } => None,
        }
    }

    /// The category list, if this is a categorical variable
    pub fn categories(&self) -> Option<&[CategoryOption]> {
        match self {
            VariableKind::Numeric { .. } => None,
            VariableKind::Categorical { categories } => Some(categories),
        }
    }

    /// Mutable category list, if this is a categorical variable
    pub fn categories_mut(&mut self) -> Option<&mut Vec<CategoryOption>> {
        match self {
            VariableKind::Numeric { .. } => None,
            VariableKind::Categorical { categories } => Some(categories),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, VariableKind::Numeric { .. })
    }
}

/// One scoring dimension: identity, display name and shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableConfig {
    /// Which of the five fixed variables this defines
    pub id: VariableId,

    /// Display name (e.g. "Time in Business")
    pub name: String,

    /// Numeric ladder or categorical lookup
    #[serde(flatten)]
    pub kind: VariableKind,
}

impl VariableConfig {
    /// Create a numeric variable definition
    pub fn numeric(
        id: VariableId,
        name: impl Into<String>,
        tiers: Vec<ScoringTier>,
        input_type: InputType,
        unit: Option<String>,
        direction: Direction,
    ) -> Self {
        VariableConfig {
            id,
            name: name.into(),
            kind: VariableKind::Numeric {
                tiers,
                input_type,
                unit,
                direction,
            },
        }
    }

    /// Create a categorical variable definition
    pub fn categorical(
        id: VariableId,
        name: impl Into<String>,
        categories: Vec<CategoryOption>,
    ) -> Self {
        VariableConfig {
            id,
            name: name.into(),
            kind: VariableKind::Categorical { categories },
        }
    }
}
