//! Error types for the editing protocol

use dealscore_core::VariableId;
use thiserror::Error;

/// Errors raised by boundary and category edits
///
/// `BelowLimit` / `AboveLimit` double as the inline validation messages a
/// tier input field shows without committing the change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("variable '{variable}' is not a numeric ladder")]
    NotNumeric { variable: VariableId },

    #[error("variable '{variable}' is not categorical")]
    NotCategorical { variable: VariableId },

    #[error("tier index {index} out of range for variable '{variable}'")]
    TierOutOfRange { variable: VariableId, index: usize },

    /// The first tier's min and the last tier's max are unbounded and
    /// cannot be edited.
    #[error("tier {index} of variable '{variable}' has no editable bound on that side")]
    UnboundedEdge { variable: VariableId, index: usize },

    #[error("Must be greater than {limit}")]
    BelowLimit { limit: f64 },

    #[error("Must be less than {limit}")]
    AboveLimit { limit: f64 },

    #[error("value is not a finite number")]
    NonFiniteValue,

    #[error("unknown category '{id}' for variable '{variable}'")]
    UnknownCategory { variable: VariableId, id: String },
}

pub type Result<T> = std::result::Result<T, EditError>;
