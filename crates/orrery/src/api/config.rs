use std::f32::consts::PI;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::api::types::BodyId;
use crate::camera::pose::CameraPose;
use crate::camera::transition::TransitionPacing;
use crate::extensions::easing::Easing;
use crate::systems::selection::FocusMode;

/// Scene configuration, provided by the renderer at startup.
/// Loaded from JSON; every section except `bodies` has defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrreryConfig {
    /// Global revolution speed, shared by all bodies (default: 0.5).
    #[serde(default = "default_global_speed")]
    pub global_speed: f32,
    /// Self-rotation speed in rad/s for bodies without an override (default: 0.8).
    #[serde(default = "default_spin_speed")]
    pub default_spin_speed: f32,
    /// RNG seed for twinkle parameters and body tilts (default: 42).
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub star: StarConfig,
    #[serde(default)]
    pub twinkle: TwinkleConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

/// Static description of one orbiting body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    pub id: BodyId,
    /// Distance from the star. Must be > 0.
    pub orbit_radius: f32,
    /// Orbital angle at t = 0, in radians.
    #[serde(default)]
    pub initial_phase: f32,
    #[serde(default = "default_speed_factor")]
    pub angular_speed_factor: f32,
    #[serde(default = "default_visual_scale")]
    pub visual_scale: Vec3,
    /// Renderer model identifier. Opaque to the core.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub overrides: BodyOverrides,
}

/// Optional per-body presentation hints, resolved once at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyOverrides {
    /// Self-rotation speed in rad/s.
    pub spin_speed: Option<f32>,
    /// Material tint as `#rrggbb`.
    pub material_color: Option<String>,
    /// Camera offset from the body when it is focused.
    pub focus_offset: Option<Vec3>,
}

/// The central star.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub scale: Vec3,
    /// Self-rotation in rad/s.
    pub spin_speed: f32,
    /// Pulse angular frequency (rad/s of the sine argument).
    pub pulse_frequency: f32,
    /// Relative scale amplitude of the pulse.
    pub pulse_amplitude: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            scale: Vec3::splat(0.25),
            spin_speed: 0.1,
            pulse_frequency: 0.3,
            pulse_amplitude: 0.02,
        }
    }
}

/// The background starfield.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwinkleConfig {
    /// Number of stars. Must be > 0.
    pub count: usize,
    /// Lower bound of the per-star twinkle speed.
    pub speed_min: f32,
    /// Width of the speed range: speeds are drawn from [min, min + span).
    pub speed_span: f32,
    /// Ambient field rotation in rad/s around (x, y).
    pub rotation_rate: Vec2,
}

impl Default for TwinkleConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            speed_min: 0.1,
            speed_span: 0.5,
            rotation_rate: Vec2::new(0.02, 0.01),
        }
    }
}

/// Camera focus behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Pose used when nothing is selected.
    pub default_pose: CameraPose,
    /// Camera offset from a focused body (unless the body overrides it).
    pub body_offset: Vec3,
    /// Camera offset from the star when it is focused.
    pub star_offset: Vec3,
    pub pacing: TransitionPacing,
    pub easing: Easing,
    pub focus_mode: FocusMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_pose: CameraPose::new(Vec3::new(0.0, 35.0, 90.0), Vec3::ZERO),
            body_offset: Vec3::new(0.0, 2.0, 6.0),
            star_offset: Vec3::new(0.0, 6.0, 18.0),
            pacing: TransitionPacing::default(),
            easing: Easing::Linear,
            focus_mode: FocusMode::Snapshot,
        }
    }
}

fn default_global_speed() -> f32 {
    0.5
}

fn default_spin_speed() -> f32 {
    0.8
}

fn default_seed() -> u64 {
    42
}

fn default_speed_factor() -> f32 {
    1.0
}

fn default_visual_scale() -> Vec3 {
    Vec3::ONE
}

impl OrreryConfig {
    /// Config with the given bodies and every other section defaulted.
    pub fn new(bodies: Vec<BodyConfig>) -> Self {
        Self {
            global_speed: default_global_speed(),
            default_spin_speed: default_spin_speed(),
            seed: default_seed(),
            bodies,
            star: StarConfig::default(),
            twinkle: TwinkleConfig::default(),
            camera: CameraConfig::default(),
        }
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The eight-planet scene.
    pub fn solar_system() -> Self {
        Self::new(vec![
            BodyConfig::new("Mercury", 4.0, 0.0)
                .with_scale(Vec3::splat(0.008))
                .with_model("mercury.glb"),
            BodyConfig::new("Venus", 7.0, PI / 4.0)
                .with_scale(Vec3::splat(0.015))
                .with_model("venus.glb"),
            BodyConfig::new("Earth", 10.0, PI / 2.0)
                .with_scale(Vec3::splat(0.017))
                .with_model("earth_and_clouds.glb"),
            BodyConfig::new("Mars", 13.0, 3.0 * PI / 4.0)
                .with_scale(Vec3::splat(0.012))
                .with_model("mars.glb"),
            BodyConfig::new("Jupiter", 22.0, PI)
                .with_scale(Vec3::splat(0.055))
                .with_model("jupiter.glb"),
            BodyConfig::new("Saturn", 35.0, 5.0 * PI / 4.0)
                .with_scale(Vec3::splat(0.03))
                .with_model("saturn.glb")
                .with_material_color("#ffe29a"),
            BodyConfig::new("Uranus", 55.0, 3.0 * PI / 2.0)
                .with_scale(Vec3::splat(0.02))
                .with_model("uranus.glb")
                .with_spin_speed(0.2)
                .with_material_color("#b5e0ff"),
            BodyConfig::new("Neptune", 70.0, 7.0 * PI / 4.0)
                .with_scale(Vec3::splat(0.019))
                .with_model("neptune.glb"),
        ])
    }

    // -- Builder methods --

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_star_count(mut self, count: usize) -> Self {
        self.twinkle.count = count;
        self
    }

    pub fn with_pacing(mut self, pacing: TransitionPacing) -> Self {
        self.camera.pacing = pacing;
        self
    }

    pub fn with_focus_mode(mut self, mode: FocusMode) -> Self {
        self.camera.focus_mode = mode;
        self
    }
}

impl BodyConfig {
    pub fn new(id: impl Into<String>, orbit_radius: f32, initial_phase: f32) -> Self {
        Self {
            id: BodyId::new(id),
            orbit_radius,
            initial_phase,
            angular_speed_factor: default_speed_factor(),
            visual_scale: default_visual_scale(),
            model: None,
            overrides: BodyOverrides::default(),
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.visual_scale = scale;
        self
    }

    pub fn with_speed_factor(mut self, factor: f32) -> Self {
        self.angular_speed_factor = factor;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_spin_speed(mut self, speed: f32) -> Self {
        self.overrides.spin_speed = Some(speed);
        self
    }

    pub fn with_material_color(mut self, color: impl Into<String>) -> Self {
        self.overrides.material_color = Some(color.into());
        self
    }

    pub fn with_focus_offset(mut self, offset: Vec3) -> Self {
        self.overrides.focus_offset = Some(offset);
        self
    }
}

/// Parse `#rrggbb` into linear [0, 1] channels.
pub fn parse_hex_color(value: &str) -> Option<[f32; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([
        channel(0)? as f32 / 255.0,
        channel(2)? as f32 / 255.0,
        channel(4)? as f32 / 255.0,
    ])
}
