use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::extensions::easing::{ease_vec3, Easing};

/// Where the camera is and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Pose that looks at `focus` from `focus + offset`.
    pub fn focused_on(focus: Vec3, offset: Vec3) -> Self {
        Self {
            position: focus + offset,
            look_at: focus,
        }
    }

    /// Interpolate both position and look-at with the same eased fraction.
    pub fn interpolate(&self, to: &CameraPose, t: f32, easing: Easing) -> Self {
        Self {
            position: ease_vec3(self.position, to.position, t, easing),
            look_at: ease_vec3(self.look_at, to.look_at, t, easing),
        }
    }

    /// Largest component-wise distance to another pose.
    pub fn distance(&self, other: &CameraPose) -> f32 {
        self.position
            .distance(other.position)
            .max(self.look_at.distance(other.look_at))
    }

    /// Flat `[px, py, pz, lx, ly, lz]` layout for the render bridge.
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.look_at.x,
            self.look_at.y,
            self.look_at.z,
        ]
    }

    /// Inverse of [`to_array`](Self::to_array).
    pub fn from_array(values: [f32; 6]) -> Self {
        Self {
            position: Vec3::new(values[0], values[1], values[2]),
            look_at: Vec3::new(values[3], values[4], values[5]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_on_offsets_position() {
        let pose = CameraPose::focused_on(Vec3::new(1.0, 0.0, 2.0), Vec3::new(0.0, 2.0, 6.0));
        assert_eq!(pose.position, Vec3::new(1.0, 2.0, 8.0));
        assert_eq!(pose.look_at, Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn interpolate_halfway() {
        let a = CameraPose::new(Vec3::ZERO, Vec3::ZERO);
        let b = CameraPose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0));
        let mid = a.interpolate(&b, 0.5, Easing::Linear);
        assert_eq!(mid.position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(mid.look_at, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn pose_parses_from_json_arrays() {
        let pose: CameraPose =
            serde_json::from_str(r#"{ "position": [0, 35, 90], "look_at": [0, 0, 0] }"#).unwrap();
        assert_eq!(pose.position, Vec3::new(0.0, 35.0, 90.0));
        assert_eq!(pose.to_array(), [0.0, 35.0, 90.0, 0.0, 0.0, 0.0]);
        assert_eq!(CameraPose::from_array(pose.to_array()), pose);
    }
}
