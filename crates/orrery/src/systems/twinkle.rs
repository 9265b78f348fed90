//! Procedural starfield twinkle.
//!
//! Each star gets a speed, a base factor and a direction once at startup.
//! Sizes are then a pure function of elapsed time; only the slow ambient
//! rotation of the whole field accumulates.

use glam::Vec2;

use crate::api::config::TwinkleConfig;
use crate::api::error::{OrreryError, Result};
use crate::api::types::TwinkleFrame;
use super::rng::Rng;

/// Base size every star oscillates around.
pub const BASE_SIZE: f32 = 0.5;
/// Multiplier applied to the twinkle term.
pub const SIZE_GAIN: f32 = 1.5;
/// Floor for point sizes: the raw formula dips to -0.25 for dim falling stars.
pub const MIN_SIZE: f32 = 0.0;
/// Peak of the formula, `BASE_SIZE + (1 + 0.5) * SIZE_GAIN`. Never reached
/// since `factor < 1`; sizes are not capped from above.
pub const MAX_SIZE: f32 = BASE_SIZE + 1.5 * SIZE_GAIN;

/// Which way a star's sine starts swinging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinkleDirection {
    Rising,
    Falling,
}

impl TwinkleDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            TwinkleDirection::Rising => 1.0,
            TwinkleDirection::Falling => -1.0,
        }
    }
}

/// Per-star twinkle parameters. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwinkleParameter {
    speed: f32,
    factor: f32,
    direction: TwinkleDirection,
}

impl TwinkleParameter {
    pub fn new(speed: f32, factor: f32, direction: TwinkleDirection) -> Self {
        Self { speed, factor, direction }
    }

    /// Draw one parameter set: speed in [min, min + span), factor in [0, 1).
    pub fn random(rng: &mut Rng, speed_min: f32, speed_span: f32) -> Self {
        let speed = rng.range_f32(speed_min, speed_span);
        let factor = rng.next_f32();
        let direction = if rng.next_bool() {
            TwinkleDirection::Rising
        } else {
            TwinkleDirection::Falling
        };
        Self { speed, factor, direction }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn direction(&self) -> TwinkleDirection {
        self.direction
    }

    /// Star size at elapsed time `t`, floored at `MIN_SIZE`.
    #[inline]
    pub fn size_at(&self, t: f64) -> f32 {
        let wave = (t * self.speed as f64).sin() as f32;
        let size = BASE_SIZE + (self.factor + wave * 0.5 * self.direction.sign()) * SIZE_GAIN;
        size.max(MIN_SIZE)
    }
}

/// The starfield: fixed parameter table, per-tick sizes, ambient rotation.
pub struct TwinkleField {
    params: Vec<TwinkleParameter>,
    sizes: Vec<f32>,
    rotation: Vec2,
    rotation_delta: Vec2,
    rotation_rate: Vec2,
}

impl TwinkleField {
    /// Generate `config.count` stars from the seeded RNG.
    pub fn generate(config: &TwinkleConfig, rng: &mut Rng) -> Result<Self> {
        let params = (0..config.count)
            .map(|_| TwinkleParameter::random(rng, config.speed_min, config.speed_span))
            .collect();
        Self::from_params(params, config.rotation_rate)
    }

    /// Build from a pre-made parameter table (deterministic tests, replays).
    pub fn from_params(params: Vec<TwinkleParameter>, rotation_rate: Vec2) -> Result<Self> {
        if params.is_empty() {
            return Err(OrreryError::EmptyTwinkleField);
        }
        let sizes = params.iter().map(|p| p.size_at(0.0)).collect();
        Ok(Self {
            params,
            sizes,
            rotation: Vec2::ZERO,
            rotation_delta: Vec2::ZERO,
            rotation_rate,
        })
    }

    /// Recompute all sizes for `elapsed` and advance the field rotation by `delta`.
    pub fn update(&mut self, elapsed: f64, delta: f32) {
        for (size, param) in self.sizes.iter_mut().zip(&self.params) {
            *size = param.size_at(elapsed);
        }
        self.rotation_delta = self.rotation_rate * delta;
        self.rotation += self.rotation_delta;
    }

    pub fn frame(&self) -> TwinkleFrame<'_> {
        TwinkleFrame {
            sizes: &self.sizes,
            rotation: self.rotation,
            rotation_delta: self.rotation_delta,
        }
    }

    pub fn params(&self) -> &[TwinkleParameter] {
        &self.params
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use crate::systems::rng::Rng;

    fn table() -> Vec<TwinkleParameter> {
        vec![
            TwinkleParameter::new(0.5, 0.2, TwinkleDirection::Rising),
            TwinkleParameter::new(0.1, 0.9, TwinkleDirection::Falling),
        ]
    }

    #[test]
    fn size_at_zero_is_base_plus_factor() {
        let p = TwinkleParameter::new(0.3, 0.4, TwinkleDirection::Rising);
        assert_abs_diff_eq!(p.size_at(0.0), 0.5 + 0.4 * 1.5, epsilon = 1e-6);
    }

    #[test]
    fn direction_flips_the_wave() {
        let t = std::f64::consts::FRAC_PI_2; // sin(t * 1.0) = 1
        let up = TwinkleParameter::new(1.0, 0.5, TwinkleDirection::Rising);
        let down = TwinkleParameter::new(1.0, 0.5, TwinkleDirection::Falling);
        assert_abs_diff_eq!(up.size_at(t), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(down.size_at(t), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn bright_peaks_are_not_flattened() {
        let t = std::f64::consts::FRAC_PI_2;
        let bright = TwinkleParameter::new(1.0, 0.9, TwinkleDirection::Rising);
        // 0.5 + (0.9 + 0.5) * 1.5
        assert_abs_diff_eq!(bright.size_at(t), 2.6, epsilon = 1e-5);
        assert!(bright.size_at(t) < MAX_SIZE);
    }

    #[test]
    fn dim_troughs_floor_at_zero() {
        let t = std::f64::consts::FRAC_PI_2;
        let dim = TwinkleParameter::new(1.0, 0.0, TwinkleDirection::Falling);
        assert_eq!(dim.size_at(t), MIN_SIZE);
    }

    #[test]
    fn generated_parameters_respect_ranges() {
        let mut rng = Rng::new(42);
        let field = TwinkleField::generate(&TwinkleConfig::default(), &mut rng).unwrap();
        assert_eq!(field.len(), 1000);
        for p in field.params() {
            assert!(p.speed() >= 0.1 && p.speed() <= 0.6, "speed {}", p.speed());
            assert!((0.0..1.0).contains(&p.factor()), "factor {}", p.factor());
        }
        let rising = field.params().iter().filter(|p| p.direction() == TwinkleDirection::Rising).count();
        assert!(rising > 0 && rising < 1000);
    }

    #[test]
    fn same_seed_same_field() {
        let config = TwinkleConfig { count: 50, ..TwinkleConfig::default() };
        let a = TwinkleField::generate(&config, &mut Rng::new(5)).unwrap();
        let b = TwinkleField::generate(&config, &mut Rng::new(5)).unwrap();
        assert_eq!(a.params(), b.params());
    }

    #[test]
    fn parameters_are_not_rerolled_per_tick() {
        let mut field = TwinkleField::from_params(table(), Vec2::new(0.02, 0.01)).unwrap();
        let before = field.params().to_vec();
        field.update(1.0, 0.016);
        field.update(2.0, 0.016);
        assert_eq!(field.params(), before.as_slice());
        // Size is a pure function of time
        field.update(1.0, 0.016);
        let at_one: Vec<f32> = field.sizes().to_vec();
        field.update(1.0, 0.016);
        assert_eq!(field.sizes(), at_one.as_slice());
    }

    #[test]
    fn ambient_rotation_accumulates() {
        let mut field = TwinkleField::from_params(table(), Vec2::new(0.02, 0.01)).unwrap();
        field.update(0.5, 0.5);
        field.update(1.0, 0.5);
        let frame = field.frame();
        assert_abs_diff_eq!(frame.rotation.x, 0.02, epsilon = 1e-6);
        assert_abs_diff_eq!(frame.rotation.y, 0.01, epsilon = 1e-6);
        assert_abs_diff_eq!(frame.rotation_delta.x, 0.01, epsilon = 1e-6);
        assert_eq!(frame.sizes.len(), 2);
    }

    #[test]
    fn empty_table_rejected() {
        let err = TwinkleField::from_params(Vec::new(), Vec2::ZERO).err().unwrap();
        assert!(matches!(err, OrreryError::EmptyTwinkleField));
        let config = TwinkleConfig { count: 0, ..TwinkleConfig::default() };
        assert!(TwinkleField::generate(&config, &mut Rng::new(1)).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Sizes stay inside the visible range for any seed and time.
        #[test]
        fn prop_size_bounds(
            seed in 1u64..u64::MAX,
            t in 0.0f64..100_000.0,
        ) {
            let config = TwinkleConfig { count: 32, ..TwinkleConfig::default() };
            let mut field = TwinkleField::generate(&config, &mut Rng::new(seed)).unwrap();
            field.update(t, 0.016);
            for &size in field.sizes() {
                prop_assert!((MIN_SIZE..=MAX_SIZE).contains(&size), "size {} out of range", size);
            }
        }
    }
}
