//! Circular orbital kinematics.
//!
//! Positions are a pure function of elapsed time, evaluated in f64 so the
//! unbounded orbital angle keeps its precision over long sessions. Only the
//! per-body spin accumulates between ticks.

use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec3;

use crate::api::config::BodyConfig;
use crate::api::error::{OrreryError, Result};
use crate::api::types::{BodyId, BodyTransform};
use crate::core::body::CelestialBody;
use crate::systems::rng::Rng;

/// Upper bound of the random axial tilt given to each body (radians).
pub const MAX_TILT: f32 = 0.5;

/// Orbital angle of `body` at elapsed time `t`.
/// Grows without bound; callers normalize if they need to.
#[inline]
pub fn orbital_angle(body: &CelestialBody, t: f64, global_speed: f32) -> f64 {
    body.initial_phase() as f64
        + t * global_speed as f64 * body.angular_speed_factor() as f64 / body.orbit_radius() as f64
}

/// World position of `body` at elapsed time `t` (uniform circular motion on XZ).
#[inline]
pub fn orbital_position(body: &CelestialBody, t: f64, global_speed: f32) -> Vec3 {
    let angle = orbital_angle(body, t, global_speed);
    let r = body.orbit_radius() as f64;
    Vec3::new((angle.cos() * r) as f32, 0.0, (angle.sin() * r) as f32)
}

/// Closed ring polyline on the XZ plane: `segments + 1` points, first == last.
pub fn orbit_ring_points(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let theta = (i % segments) as f32 / segments as f32 * TAU;
            Vec3::new(theta.cos() * radius, 0.0, theta.sin() * radius)
        })
        .collect()
}

/// Owns every body and its live transform. The only writer of body positions.
pub struct KinematicsEngine {
    bodies: Vec<CelestialBody>,
    index: HashMap<BodyId, usize>,
    transforms: Vec<BodyTransform>,
    global_speed: f32,
}

impl KinematicsEngine {
    /// Validate the body configs and place every body at t = 0.
    /// Tilts are drawn from `rng` in config order.
    pub fn new(
        configs: &[BodyConfig],
        global_speed: f32,
        default_spin: f32,
        rng: &mut Rng,
    ) -> Result<Self> {
        let mut bodies = Vec::with_capacity(configs.len());
        let mut index = HashMap::with_capacity(configs.len());

        for config in configs {
            let tilt = rng.next_f32() * MAX_TILT;
            let body = CelestialBody::from_config(config, default_spin, tilt)?;
            if index.insert(body.id().clone(), bodies.len()).is_some() {
                return Err(OrreryError::DuplicateBody(body.id().to_string()));
            }
            bodies.push(body);
        }

        let transforms = bodies
            .iter()
            .map(|body| BodyTransform {
                position: orbital_position(body, 0.0, global_speed),
                spin: 0.0,
                tilt: body.tilt(),
                scale: body.visual_scale(),
            })
            .collect();

        Ok(Self {
            bodies,
            index,
            transforms,
            global_speed,
        })
    }

    /// Place every body for `elapsed` and advance spins by `delta`.
    pub fn update(&mut self, elapsed: f64, delta: f32) {
        for (body, transform) in self.bodies.iter().zip(self.transforms.iter_mut()) {
            transform.position = orbital_position(body, elapsed, self.global_speed);
            transform.spin = (transform.spin + body.spin_speed() * delta).rem_euclid(TAU);
        }
    }

    /// Live transform of a body (as of the last update).
    pub fn transform(&self, id: &BodyId) -> Option<&BodyTransform> {
        self.index_of(id).map(|i| &self.transforms[i])
    }

    /// Position a body would have at an arbitrary time.
    pub fn position_at(&self, id: &BodyId, t: f64) -> Option<Vec3> {
        self.body(id).map(|body| orbital_position(body, t, self.global_speed))
    }

    pub fn body(&self, id: &BodyId) -> Option<&CelestialBody> {
        self.index_of(id).map(|i| &self.bodies[i])
    }

    /// Position of a body in config order.
    pub fn index_of(&self, id: &BodyId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Transforms in config order.
    pub fn transforms(&self) -> &[BodyTransform] {
        &self.transforms
    }

    pub fn global_speed(&self) -> f32 {
        self.global_speed
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
