use std::f32::consts::TAU;

use glam::Vec3;

use crate::api::config::StarConfig;
use crate::api::types::StarTransform;

/// The central star: fixed at the origin, slowly spinning, gently pulsing.
pub struct CentralStar {
    config: StarConfig,
    transform: StarTransform,
}

impl CentralStar {
    pub fn new(config: StarConfig) -> Self {
        let transform = StarTransform {
            position: Vec3::ZERO,
            spin: 0.0,
            scale: config.scale * pulse_factor(&config, 0.0),
        };
        Self { config, transform }
    }

    pub fn update(&mut self, elapsed: f64, delta: f32) {
        self.transform.spin = (self.transform.spin + self.config.spin_speed * delta).rem_euclid(TAU);
        self.transform.scale = self.config.scale * pulse_factor(&self.config, elapsed);
    }

    pub fn transform(&self) -> &StarTransform {
        &self.transform
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}

/// `1 + sin(t * frequency) * amplitude`
fn pulse_factor(config: &StarConfig, t: f64) -> f32 {
    1.0 + (t * config.pulse_frequency as f64).sin() as f32 * config.pulse_amplitude
}
