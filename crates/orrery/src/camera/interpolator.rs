// camera/interpolator.rs
//
// Owns the live camera pose and at most one transition.
//
// Usage:
//   let mut camera = CameraInterpolator::new(default_pose, pacing, Easing::Linear)?;
//   camera.transition_to(CameraPose::focused_on(mars, offset));
//   camera.advance(dt);  // once per tick
//   let pose = camera.current();

use crate::api::error::Result;
use crate::extensions::easing::Easing;
use super::pose::CameraPose;
use super::transition::{CameraTransition, TransitionPacing};

/// What happened to the camera during one `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraUpdate {
    /// No transition was active.
    Idle,
    /// A transition progressed but has not finished.
    Moving,
    /// A transition reached its end pose this tick and was removed.
    Finished,
}

/// Moves the live pose toward a target, never instantaneously.
pub struct CameraInterpolator {
    current: CameraPose,
    target: CameraPose,
    default_pose: CameraPose,
    transition: Option<CameraTransition>,
    pacing: TransitionPacing,
    easing: Easing,
}

impl CameraInterpolator {
    /// Start resting at `default_pose`.
    pub fn new(default_pose: CameraPose, pacing: TransitionPacing, easing: Easing) -> Result<Self> {
        pacing.validate()?;
        Ok(Self {
            current: default_pose,
            target: default_pose,
            default_pose,
            transition: None,
            pacing,
            easing,
        })
    }

    /// Begin moving toward `target`, replacing any in-flight transition.
    /// The new transition starts from the live pose, so there is no snap.
    pub fn transition_to(&mut self, target: CameraPose) {
        self.target = target;
        self.transition = Some(CameraTransition::new(self.current, target));
    }

    /// Begin moving back to the default pose.
    pub fn return_to_default(&mut self) {
        self.transition_to(self.default_pose);
    }

    /// Move the target without restarting: an in-flight transition keeps its
    /// progress and bends toward the new end; a settled camera moves with it.
    pub fn follow(&mut self, target: CameraPose) {
        self.target = target;
        match &mut self.transition {
            Some(transition) => transition.retarget_end(target),
            None => self.current = target,
        }
    }

    /// Advance the active transition by one tick of `delta` seconds.
    pub fn advance(&mut self, delta: f32) -> CameraUpdate {
        let Some(transition) = &mut self.transition else {
            return CameraUpdate::Idle;
        };

        let done = transition.advance(self.pacing.step(delta));
        self.current = transition.pose(self.easing);
        if done {
            self.current = self.target;
            self.transition = None;
            CameraUpdate::Finished
        } else {
            CameraUpdate::Moving
        }
    }

    /// Accept a pose reported by external orbit controls.
    /// Ignored while a transition is in flight; returns whether it was applied.
    pub fn report_pose(&mut self, pose: CameraPose) -> bool {
        if self.transition.is_some() {
            return false;
        }
        self.current = pose;
        self.target = pose;
        true
    }

    pub fn current(&self) -> CameraPose {
        self.current
    }

    pub fn target(&self) -> CameraPose {
        self.target
    }

    pub fn default_pose(&self) -> CameraPose {
        self.default_pose
    }

    pub fn transition(&self) -> Option<&CameraTransition> {
        self.transition.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }
}
