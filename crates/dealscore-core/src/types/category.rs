//! Categorical scoring options
//!
//! A categorical variable is scored by lookup, not by position: options are
//! siblings with no ordering or continuity constraint between them.

use serde::{Deserialize, Serialize};

use super::color::BandColor;

/// A named discrete option for a categorical variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOption {
    /// Stable identifier (e.g. "veryHigh"), unique within a variable
    pub id: String,

    /// Display string (e.g. "Very High")
    pub label: String,

    /// Score awarded for this option, 0..=5
    pub points: i32,

    /// Hand-authored risk band
    pub color: BandColor,
}

impl CategoryOption {
    /// Create a new category option
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        points: i32,
        color: BandColor,
    ) -> Self {
        CategoryOption {
            id: id.into(),
            label: label.into(),
            points,
            color,
        }
    }
}

/// Look up a category by its stable id
pub fn resolve_category_by_id<'a>(
    categories: &'a [CategoryOption],
    id: &str,
) -> Option<&'a CategoryOption> {
    categories.iter().find(|c| c.id == id)
}

/// Look up a category by display label, case-insensitively
///
/// Controls carry the display label, not the id, so "very high" and
/// "Very High" both resolve.
pub fn resolve_category<'a>(
    categories: &'a [CategoryOption],
    label: &str,
) -> Option<&'a CategoryOption> {
    categories
        .iter()
        .find(|c| c.label.eq_ignore_ascii_case(label))
}
