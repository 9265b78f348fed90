use bytemuck::{Pod, Zeroable};

use crate::api::types::{BodyTransform, StarTransform};

/// Per-instance transform written to shared memory for the JS renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Self-rotation about Y, radians.
    pub spin: f32,
    /// Axial tilt about X, radians.
    pub tilt: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&BodyTransform> for BodyInstance {
    fn from(t: &BodyTransform) -> Self {
        Self {
            x: t.position.x,
            y: t.position.y,
            z: t.position.z,
            spin: t.spin,
            tilt: t.tilt,
            scale_x: t.scale.x,
            scale_y: t.scale.y,
            scale_z: t.scale.z,
        }
    }
}

impl From<&StarTransform> for BodyInstance {
    fn from(t: &StarTransform) -> Self {
        Self {
            x: t.position.x,
            y: t.position.y,
            z: t.position.z,
            spin: t.spin,
            tilt: 0.0,
            scale_x: t.scale.x,
            scale_y: t.scale.y,
            scale_z: t.scale.z,
        }
    }
}

/// Instance table for one tick.
/// Slot 0 is the star; bodies follow in config order.
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Flat float view, `instance_count() * FLOATS` long.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn body_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), BodyInstance::STRIDE_BYTES);
        assert_eq!(BodyInstance::FLOATS, 8);
    }

    #[test]
    fn packs_body_transform_in_protocol_order() {
        let transform = BodyTransform {
            position: Vec3::new(1.0, 2.0, 3.0),
            spin: 0.5,
            tilt: 0.25,
            scale: Vec3::new(0.1, 0.2, 0.3),
        };
        let mut buf = InstanceBuffer::new();
        buf.push(BodyInstance::from(&transform));
        assert_eq!(buf.instance_count(), 1);
        assert_eq!(buf.as_floats(), &[1.0, 2.0, 3.0, 0.5, 0.25, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn star_instance_has_no_tilt() {
        let star = StarTransform {
            position: Vec3::ZERO,
            spin: 1.0,
            scale: Vec3::splat(0.25),
        };
        let instance = BodyInstance::from(&star);
        assert_eq!(instance.tilt, 0.0);
        assert_eq!(instance.scale_y, 0.25);
    }
}
