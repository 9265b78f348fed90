// extensions/easing.rs
//
// Pure easing functions for camera interpolation.
// Only curves that stay inside [0, 1] are offered: a camera pose must never
// leave the segment between its start and end pose.

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Shape of a camera transition's progress curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Even speed from start to end.
    #[default]
    Linear,
    QuadOut,
    QuadInOut,
    /// Fast departure, long gentle arrival.
    CubicOut,
    CubicInOut,
    SineInOut,
}

impl Easing {
    /// Map transition progress to interpolation weight.
    /// `t` is clamped first; the result is monotonic in `t` and never leaves [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }

            Easing::SineInOut => (-((PI * t).cos() - 1.0) / 2.0).clamp(0.0, 1.0),
        }
    }
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Point on the segment `a..b` at eased progress `t`.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}
