// extensions/mod.rs
//
// Interpolation helpers shared by the camera. Pure math, no scene state.

pub mod easing;

pub use easing::{Easing, lerp_vec3, ease_vec3};
