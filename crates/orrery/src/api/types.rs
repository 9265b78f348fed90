use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Unique name of a celestial body ("Mars", "Saturn", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// What the user clicked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickTarget {
    Star,
    Body(BodyId),
}

/// What is currently focused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Star,
    Body(BodyId),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Whether picking `target` would select the same entity again.
    pub fn matches(&self, target: &PickTarget) -> bool {
        match (self, target) {
            (Selection::Star, PickTarget::Star) => true,
            (Selection::Body(a), PickTarget::Body(b)) => a == b,
            _ => false,
        }
    }
}

impl From<PickTarget> for Selection {
    fn from(target: PickTarget) -> Self {
        match target {
            PickTarget::Star => Selection::Star,
            PickTarget::Body(id) => Selection::Body(id),
        }
    }
}

/// Per-tick world transform of a body, as read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    /// World position on the orbital (XZ) plane.
    pub position: Vec3,
    /// Accumulated self-rotation about Y, wrapped into [0, 2π).
    pub spin: f32,
    /// Fixed axial tilt about X.
    pub tilt: f32,
    pub scale: Vec3,
}

/// Per-tick transform of the central star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarTransform {
    pub position: Vec3,
    pub spin: f32,
    /// Base scale multiplied by the current pulse factor.
    pub scale: Vec3,
}

/// Borrowed view of the starfield for one tick.
#[derive(Debug, Clone, Copy)]
pub struct TwinkleFrame<'a> {
    /// One size per star, in star order.
    pub sizes: &'a [f32],
    /// Accumulated field rotation (x, y).
    pub rotation: Vec2,
    /// Rotation applied during the last tick.
    pub rotation_delta: Vec2,
}

/// State changes reported to the UI layer, drained once per tick.
#[derive(Debug, Clone, PartialEq)]
pub enum OrreryEvent {
    SelectionChanged(Selection),
    TransitionStarted,
    TransitionFinished,
}

/// Flat event record for the render bridge.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;

    pub const SELECTION_CHANGED: f32 = 1.0;
    pub const TRANSITION_STARTED: f32 = 2.0;
    pub const TRANSITION_FINISHED: f32 = 3.0;

    /// Selection payload in `a`: -1 = none, -2 = star, otherwise body index.
    pub const SELECTED_NONE: f32 = -1.0;
    pub const SELECTED_STAR: f32 = -2.0;
}
