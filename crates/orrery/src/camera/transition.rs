// camera/transition.rs
//
// A single time-bounded move of the camera from one fixed pose to another.

use serde::{Deserialize, Serialize};

use crate::api::error::{OrreryError, Result};
use crate::extensions::easing::Easing;
use super::pose::CameraPose;

/// How fast a transition's fraction advances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TransitionPacing {
    /// Completes in `seconds` of real time, regardless of frame rate.
    Duration { seconds: f32 },
    /// Advances by a constant `step` every tick, regardless of delta.
    FixedStep { step: f32 },
}

impl Default for TransitionPacing {
    fn default() -> Self {
        TransitionPacing::Duration { seconds: 1.5 }
    }
}

impl TransitionPacing {
    /// Reference pacing: 2% of the way per tick.
    pub const REFERENCE_STEP: f32 = 0.02;

    /// Reject pacings that would never finish.
    /// A zero duration is allowed and completes on the next tick.
    pub fn validate(&self) -> Result<()> {
        match *self {
            TransitionPacing::Duration { seconds } if !seconds.is_finite() || seconds < 0.0 => {
                Err(OrreryError::InvalidTransition(format!("duration {seconds}s")))
            }
            TransitionPacing::FixedStep { step } if !step.is_finite() || step <= 0.0 => {
                Err(OrreryError::InvalidTransition(format!("step {step} per tick")))
            }
            _ => Ok(()),
        }
    }

    /// Fraction to add for a tick of `delta` seconds.
    pub fn step(&self, delta: f32) -> f32 {
        match *self {
            TransitionPacing::Duration { seconds } => {
                if seconds <= 0.0 {
                    1.0
                } else {
                    delta / seconds
                }
            }
            TransitionPacing::FixedStep { step } => step,
        }
    }
}

/// In-flight move from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    start: CameraPose,
    end: CameraPose,
    fraction: f32,
}

impl CameraTransition {
    pub fn new(start: CameraPose, end: CameraPose) -> Self {
        Self {
            start,
            end,
            fraction: 0.0,
        }
    }

    /// Advance by `step` (clamped to [0, 1]). Returns true once complete.
    pub fn advance(&mut self, step: f32) -> bool {
        self.fraction = (self.fraction + step.max(0.0)).clamp(0.0, 1.0);
        self.is_complete()
    }

    /// Pose at the current fraction. Exactly `end` once complete.
    pub fn pose(&self, easing: Easing) -> CameraPose {
        if self.is_complete() {
            self.end
        } else {
            self.start.interpolate(&self.end, self.fraction, easing)
        }
    }

    /// Move the destination without restarting (focus tracking).
    pub fn retarget_end(&mut self, end: CameraPose) {
        self.end = end;
    }

    pub fn is_complete(&self) -> bool {
        self.fraction >= 1.0
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn start(&self) -> &CameraPose {
        &self.start
    }

    pub fn end(&self) -> &CameraPose {
        &self.end
    }
}
