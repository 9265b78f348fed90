use glam::Vec3;

use crate::api::config::{parse_hex_color, BodyConfig};
use crate::api::error::{OrreryError, Result};
use crate::api::types::BodyId;

/// A validated orbiting body. Immutable after construction.
///
/// Overrides from the config are resolved here once, so the per-tick code
/// never looks at body names.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    id: BodyId,
    orbit_radius: f32,
    initial_phase: f32,
    angular_speed_factor: f32,
    visual_scale: Vec3,
    spin_speed: f32,
    tilt: f32,
    material_color: Option<[f32; 3]>,
    focus_offset: Option<Vec3>,
    model: Option<String>,
}

impl CelestialBody {
    /// Validate a body config. `default_spin` applies when the body has no
    /// spin override; `tilt` is the body's fixed axial tilt.
    pub fn from_config(config: &BodyConfig, default_spin: f32, tilt: f32) -> Result<Self> {
        if config.id.as_str().is_empty() {
            return Err(OrreryError::EmptyBodyId);
        }
        if !config.orbit_radius.is_finite() || config.orbit_radius <= 0.0 {
            return Err(OrreryError::InvalidOrbitRadius {
                id: config.id.to_string(),
                radius: config.orbit_radius,
            });
        }
        let material_color = match &config.overrides.material_color {
            Some(value) => Some(parse_hex_color(value).ok_or_else(|| OrreryError::InvalidColor {
                id: config.id.to_string(),
                value: value.clone(),
            })?),
            None => None,
        };

        Ok(Self {
            id: config.id.clone(),
            orbit_radius: config.orbit_radius,
            initial_phase: config.initial_phase,
            angular_speed_factor: config.angular_speed_factor,
            visual_scale: config.visual_scale,
            spin_speed: config.overrides.spin_speed.unwrap_or(default_spin),
            tilt,
            material_color,
            focus_offset: config.overrides.focus_offset,
            model: config.model.clone(),
        })
    }

    pub fn id(&self) -> &BodyId {
        &self.id
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    pub fn initial_phase(&self) -> f32 {
        self.initial_phase
    }

    pub fn angular_speed_factor(&self) -> f32 {
        self.angular_speed_factor
    }

    pub fn visual_scale(&self) -> Vec3 {
        self.visual_scale
    }

    /// Self-rotation speed in rad/s, override already applied.
    pub fn spin_speed(&self) -> f32 {
        self.spin_speed
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    /// Material tint in linear [0, 1] channels, if overridden.
    pub fn material_color(&self) -> Option<[f32; 3]> {
        self.material_color
    }

    pub fn focus_offset(&self) -> Option<Vec3> {
        self.focus_offset
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}
