//! Interactive editing session over a scoring configuration
//!
//! A session owns a working copy seeded from the last-saved config plus an
//! explicit editor state machine. All mutation goes through the session:
//! drag handles commit on every move tick, typed input commits only
//! syntactically valid in-window numbers, and Save/Cancel hand back or
//! discard the working copy as a whole.

use dealscore_core::{presets, InputType, ScoringConfig, VariableId, VariableKind};

use super::boundary::{self, Bound};
use super::format;
use super::position;
use crate::error::{EditError, Result};

/// What happened to one keystroke's worth of typed input
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// Valid in-window number, committed to the working config
    Committed(f64),

    /// Empty or unparseable text, held locally; config untouched
    Held,

    /// Parseable but outside the boundary window; inline message shown,
    /// config untouched
    Rejected(String),
}

/// Editor interaction state
///
/// At most one handle is dragged or one field focused at a time, so the
/// session carries a single state value rather than per-variable ones.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    Idle,

    /// Pointer down on the handle between tier `handle` and `handle + 1`
    Dragging { variable: VariableId, handle: usize },

    /// A boundary input field has focus
    Editing {
        variable: VariableId,
        tier_index: usize,
        bound: Bound,
        /// Raw text as typed, including empty or partial numbers
        display: String,
        /// Last display string that corresponded to a committed value
        last_valid: String,
        /// Inline validation message, if the last input was out of window
        error: Option<String>,
    },
}

/// One editing session: saved baseline, working copy, interaction state
#[derive(Debug, Clone)]
pub struct EditSession {
    saved: ScoringConfig,
    working: ScoringConfig,
    state: EditorState,
}

impl EditSession {
    /// Open an editor over the last-saved config
    ///
    /// The working copy is seeded fresh; a previously abandoned session's
    /// state never leaks in because each open constructs a new session.
    pub fn open(saved: ScoringConfig) -> Self {
        let working = saved.clone();
        EditSession {
            saved,
            working,
            state: EditorState::Idle,
        }
    }

    /// Re-seed the working copy from the saved config, discarding edits
    ///
    /// Equivalent to closing and reopening the editor.
    pub fn reopen(&mut self) {
        self.working = self.saved.clone();
        self.state = EditorState::Idle;
    }

    /// The in-progress working copy
    pub fn working(&self) -> &ScoringConfig {
        &self.working
    }

    /// The saved baseline this session was opened from
    pub fn saved(&self) -> &ScoringConfig {
        &self.saved
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Pointer down on the handle between tier `handle` and `handle + 1`
    pub fn begin_drag(&mut self, variable: VariableId, handle: usize) -> Result<()> {
        // fails fast on categorical variables and edge handles
        boundary::boundary_limits(self.working.variable(variable), handle, Bound::Max)?;
        self.state = EditorState::Dragging { variable, handle };
        tracing::debug!(variable = %variable, handle, "drag started");
        Ok(())
    }

    /// Pointer moved to a 0–100 position along the ladder axis
    ///
    /// Commits on every tick (live preview), clamped into the window
    /// formed by the neighbouring tiers. Ignored when not dragging.
    pub fn drag_to(&mut self, position_pct: f64) -> Result<()> {
        let (variable, handle) = match self.state {
            EditorState::Dragging { variable, handle } => (variable, handle),
            _ => return Ok(()),
        };

        let var = self.working.variable(variable);
        let (tiers, direction) = match &var.kind {
            VariableKind::Numeric {
                tiers, direction, ..
            } => (tiers.as_slice(), *direction),
            VariableKind::Categorical { .. } => {
                return Err(EditError::NotNumeric { variable })
            }
        };

        let range = position::ladder_range(tiers);
        let value = position::position_to_value(range, direction, position_pct);
        let limits = boundary::boundary_limits(var, handle, Bound::Max)?;
        let clamped = limits.clamp(value);

        self.working =
            boundary::apply_boundary_edit(&self.working, variable, handle, Bound::Max, clamped)?;
        Ok(())
    }

    /// Pointer up; the last committed value stands
    pub fn end_drag(&mut self) {
        if matches!(self.state, EditorState::Dragging { .. }) {
            self.state = EditorState::Idle;
        }
    }

    /// A boundary input field gained focus
    pub fn begin_edit(
        &mut self,
        variable: VariableId,
        tier_index: usize,
        bound: Bound,
    ) -> Result<()> {
        let var = self.working.variable(variable);
        // validates variable kind, index and edge in one go
        boundary::boundary_limits(var, tier_index, bound)?;

        let tiers = var.kind.tiers().ok_or(EditError::NotNumeric { variable })?;
        let current = match bound {
            Bound::Min => tiers[tier_index].min,
            Bound::Max => tiers[tier_index].max,
        }
        .ok_or(EditError::UnboundedEdge {
            variable,
            index: tier_index,
        })?;

        let display = format::format_value(self.input_type(variable), current);
        self.state = EditorState::Editing {
            variable,
            tier_index,
            bound,
            last_valid: display.clone(),
            display,
            error: None,
        };
        Ok(())
    }

    /// The focused field's text changed
    ///
    /// The display string always echoes the keystrokes; only a valid
    /// in-window number is forwarded to the working config.
    pub fn input_changed(&mut self, text: &str) -> InputOutcome {
        let (variable, tier_index, bound) = match &self.state {
            EditorState::Editing {
                variable,
                tier_index,
                bound,
                ..
            } => (*variable, *tier_index, *bound),
            _ => return InputOutcome::Held,
        };

        let parsed = format::parse_value(self.input_type(variable), text);
        let outcome = match parsed {
            None => InputOutcome::Held,
            Some(value) => {
                match boundary::apply_boundary_edit(
                    &self.working,
                    variable,
                    tier_index,
                    bound,
                    value,
                ) {
                    Ok(next) => {
                        self.working = next;
                        InputOutcome::Committed(value)
                    }
                    Err(err @ (EditError::BelowLimit { .. } | EditError::AboveLimit { .. })) => {
                        InputOutcome::Rejected(err.to_string())
                    }
                    Err(_) => InputOutcome::Held,
                }
            }
        };

        if let EditorState::Editing {
            display,
            last_valid,
            error,
            ..
        } = &mut self.state
        {
            *display = text.to_string();
            match &outcome {
                InputOutcome::Committed(_) => {
                    *last_valid = text.to_string();
                    *error = None;
                }
                InputOutcome::Rejected(message) => *error = Some(message.clone()),
                InputOutcome::Held => {}
            }
        }
        outcome
    }

    /// The focused field lost focus
    ///
    /// An empty display restores the last valid text; the config is never
    /// reverted because an empty string was never forwarded to it. Returns
    /// the settled display string.
    pub fn blur(&mut self) -> String {
        let settled = match &self.state {
            EditorState::Editing {
                display,
                last_valid,
                ..
            } => {
                if display.trim().is_empty() {
                    last_valid.clone()
                } else {
                    display.clone()
                }
            }
            _ => String::new(),
        };
        if matches!(self.state, EditorState::Editing { .. }) {
            self.state = EditorState::Idle;
        }
        settled
    }

    /// Set one category's points, clamped into 0..=5
    ///
    /// Categories are siblings, not a ladder: no propagation.
    pub fn set_category_points(
        &mut self,
        variable: VariableId,
        category_id: &str,
        points: i32,
    ) -> Result<()> {
        let var = self.working.variable_mut(variable);
        let categories = var
            .kind
            .categories_mut()
            .ok_or(EditError::NotCategorical { variable })?;
        let category = categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| EditError::UnknownCategory {
                variable,
                id: category_id.to_string(),
            })?;
        category.points = points.clamp(0, 5);
        Ok(())
    }

    /// Reset one variable to its `balanced` definition
    ///
    /// Sibling variables keep their in-progress edits.
    pub fn reset_variable(&mut self, variable: VariableId) {
        *self.working.variable_mut(variable) = presets::balanced().variable(variable).clone();
        // drop any interaction pinned to the variable that just changed
        match &self.state {
            EditorState::Dragging { variable: v, .. } | EditorState::Editing { variable: v, .. }
                if *v == variable =>
            {
                self.state = EditorState::Idle;
            }
            _ => {}
        }
        tracing::debug!(variable = %variable, "variable reset to balanced default");
    }

    /// Commit the working copy as the new saved config
    pub fn save(self) -> ScoringConfig {
        self.working
    }

    /// Discard the working copy, returning the untouched saved config
    pub fn cancel(self) -> ScoringConfig {
        self.saved
    }

    fn input_type(&self, variable: VariableId) -> InputType {
        match &self.working.variable(variable).kind {
            VariableKind::Numeric { input_type, .. } => *input_type,
            VariableKind::Categorical { .. } => InputType::Number,
        }
    }
}
