use crate::api::types::PickTarget;
use crate::camera::pose::CameraPose;

/// Input the orrery understands, queued by the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneInput {
    /// The user clicked the star or a body.
    Pick(PickTarget),
    /// The user dismissed the info panel or clicked empty space.
    Deselect,
    /// Orbit controls moved the camera while idle.
    ReportCamera(CameraPose),
}

/// A queue of scene input.
/// JS writes input into the queue; Rust drains it once per tick, after
/// kinematics, so picks snapshot this tick's positions.
pub struct InputQueue {
    events: Vec<SceneInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: SceneInput) {
        self.events.push(event);
    }

    /// Drain all pending input in arrival order.
    pub fn drain(&mut self) -> Vec<SceneInput> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneInput> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
