pub mod api;
pub mod core;
pub mod systems;
pub mod camera;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::orrery::{Orrery, ORBIT_RING_SEGMENTS};
pub use api::config::{
    OrreryConfig, BodyConfig, BodyOverrides, StarConfig, TwinkleConfig, CameraConfig,
};
pub use api::error::{OrreryError, Result};
pub use api::types::{
    BodyId, PickTarget, Selection, BodyTransform, StarTransform, TwinkleFrame,
    OrreryEvent, EventRecord,
};
pub use core::body::CelestialBody;
pub use core::kinematics::{KinematicsEngine, orbital_angle, orbital_position, orbit_ring_points};
pub use core::star::CentralStar;
pub use core::time::{FrameClock, Tick};
pub use systems::rng::Rng;
pub use systems::selection::{SelectionMachine, SelectionChange, FocusMode};
pub use systems::twinkle::{TwinkleField, TwinkleParameter, TwinkleDirection};
pub use camera::{CameraPose, CameraTransition, CameraInterpolator, CameraUpdate, TransitionPacing};
pub use renderer::instance::{BodyInstance, InstanceBuffer};
pub use input::queue::{SceneInput, InputQueue};

// Extensions: interpolation helpers
pub use extensions::{Easing, lerp_vec3, ease_vec3};
