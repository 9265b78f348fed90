//! Camera focus: poses, single transitions, and the interpolator that owns
//! the live viewpoint.

pub mod interpolator;
pub mod pose;
pub mod transition;

pub use interpolator::{CameraInterpolator, CameraUpdate};
pub use pose::CameraPose;
pub use transition::{CameraTransition, TransitionPacing};
