//! Dealscore Engine - Scoring and editing logic for the dealscore workspace
//!
//! This crate provides:
//! - The five hardcoded tier calculators
//! - The ladder boundary-editing protocol and `EditSession` state machine
//! - The composite-score presentation adapter
//! - Error types for the editing protocol

pub mod calculators;
pub mod composite;
pub mod editor;
pub mod error;

// Re-export commonly used types
pub use calculators::{TierScore, MAX_POINTS};
pub use composite::{
    clamp_on_blur, composite_score, read_control, CompositeScore, ControlReading, ControlValue,
    VariableMeta, VARIABLE_METAS,
};
pub use editor::{apply_boundary_edit, Bound, EditSession, EditorState, InputOutcome};
pub use error::EditError;
