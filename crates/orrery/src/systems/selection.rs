use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::error::{OrreryError, Result};
use crate::api::types::{BodyId, PickTarget, Selection};

/// How the focus point behaves while a body stays selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    /// Capture the body position once, at pick time.
    #[default]
    Snapshot,
    /// Follow the body every tick.
    Track,
}

/// Outcome of a selection transition, handed to the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub selection: Selection,
    /// Focus captured for the new selection; `None` after a deselect.
    pub focus: Option<Vec3>,
    /// The same entity was picked again (focus refreshed).
    pub reselected: bool,
}

/// Holds what is focused: nothing, the star, or one body.
///
/// The machine never reads world state itself: callers pass a locator that
/// resolves a pick target to its current world position.
pub struct SelectionMachine {
    selection: Selection,
    focus: Option<Vec3>,
    mode: FocusMode,
}

impl SelectionMachine {
    pub fn new(mode: FocusMode) -> Self {
        Self {
            selection: Selection::None,
            focus: None,
            mode,
        }
    }

    /// Select `target` from any state, snapshotting its position via `locate`.
    /// An unlocatable target fails with `NotFound` and changes nothing.
    pub fn pick<F>(&mut self, target: PickTarget, locate: F) -> Result<SelectionChange>
    where
        F: FnOnce(&PickTarget) -> Option<Vec3>,
    {
        let focus = locate(&target).ok_or_else(|| match &target {
            PickTarget::Body(id) => OrreryError::NotFound(id.to_string()),
            PickTarget::Star => OrreryError::NotFound("star".to_owned()),
        })?;

        let reselected = self.selection.matches(&target);
        self.selection = target.into();
        self.focus = Some(focus);

        Ok(SelectionChange {
            selection: self.selection.clone(),
            focus: self.focus,
            reselected,
        })
    }

    /// Return to `None`. A no-op (returns `None`) when nothing is selected.
    pub fn deselect(&mut self) -> Option<SelectionChange> {
        if self.selection.is_none() {
            return None;
        }
        self.selection = Selection::None;
        self.focus = None;
        Some(SelectionChange {
            selection: Selection::None,
            focus: None,
            reselected: false,
        })
    }

    /// The body whose focus should be refreshed this tick, in `Track` mode.
    pub fn tracked_body(&self) -> Option<&BodyId> {
        match (&self.selection, self.mode) {
            (Selection::Body(id), FocusMode::Track) => Some(id),
            _ => None,
        }
    }

    /// Move the focus point of the current selection (tracking only).
    /// Returns false when there is nothing to track.
    pub fn refresh_focus(&mut self, position: Vec3) -> bool {
        if self.tracked_body().is_none() {
            return false;
        }
        self.focus = Some(position);
        true
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn focus(&self) -> Option<Vec3> {
        self.focus
    }

    pub fn mode(&self) -> FocusMode {
        self.mode
    }
}

impl Default for SelectionMachine {
    fn default() -> Self {
        Self::new(FocusMode::Snapshot)
    }
}
