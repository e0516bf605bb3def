//! Ladder boundary-editing protocol
//!
//! This module contains the interactive editing machinery:
//! - the pure boundary-edit command and its clamp window
//! - position ↔ value mapping for drag handles
//! - display formatting/parsing for boundary input fields
//! - the `EditSession` state machine (working copy, Save/Cancel, reset)

pub mod boundary;
pub mod format;
pub mod position;
pub mod session;

pub use boundary::{apply_boundary_edit, boundary_limits, Bound, BoundaryLimits};
pub use format::{format_value, parse_value};
pub use position::{ladder_range, position_to_value, value_to_position, LadderRange};
pub use session::{EditSession, EditorState, InputOutcome};
