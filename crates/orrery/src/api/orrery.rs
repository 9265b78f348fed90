use glam::Vec3;

use crate::api::config::OrreryConfig;
use crate::api::error::{OrreryError, Result};
use crate::api::types::{
    BodyId, BodyTransform, OrreryEvent, PickTarget, Selection, StarTransform, TwinkleFrame,
};
use crate::camera::interpolator::{CameraInterpolator, CameraUpdate};
use crate::camera::pose::CameraPose;
use crate::core::body::CelestialBody;
use crate::core::kinematics::{orbit_ring_points, KinematicsEngine};
use crate::core::star::CentralStar;
use crate::core::time::sanitize_delta;
use crate::input::queue::{InputQueue, SceneInput};
use crate::renderer::instance::{BodyInstance, InstanceBuffer};
use crate::systems::rng::Rng;
use crate::systems::selection::SelectionMachine;
use crate::systems::twinkle::{TwinkleField, TwinkleParameter};

/// Segments in an orbit ring polyline.
pub const ORBIT_RING_SEGMENTS: usize = 64;

/// The animation and view-focus core.
///
/// Owns the kinematics engine, the star, the twinkle field, the selection
/// machine and the camera interpolator. Drive it with one `tick` per frame,
/// then read transforms, twinkle sizes and the camera pose.
pub struct Orrery {
    kinematics: KinematicsEngine,
    star: CentralStar,
    twinkle: TwinkleField,
    selection: SelectionMachine,
    camera: CameraInterpolator,
    input: InputQueue,
    events: Vec<OrreryEvent>,
    /// Events already in `events` when the last tick ended.
    stale_events: usize,
    body_offset: Vec3,
    star_offset: Vec3,
    elapsed: f64,
}

impl Orrery {
    /// Build the scene, drawing tilts and twinkle parameters from `config.seed`.
    pub fn new(config: OrreryConfig) -> Result<Self> {
        Self::build(config, |config, rng| TwinkleField::generate(&config.twinkle, rng))
    }

    /// Build the scene with a pre-made twinkle table instead of random stars.
    pub fn with_twinkle_table(config: OrreryConfig, params: Vec<TwinkleParameter>) -> Result<Self> {
        Self::build(config, |config, _| {
            TwinkleField::from_params(params, config.twinkle.rotation_rate)
        })
    }

    fn build<F>(config: OrreryConfig, twinkle: F) -> Result<Self>
    where
        F: FnOnce(&OrreryConfig, &mut Rng) -> Result<TwinkleField>,
    {
        let camera = CameraInterpolator::new(
            config.camera.default_pose,
            config.camera.pacing,
            config.camera.easing,
        )?;

        // Tilts first, then stars: both come from the same seeded stream
        let mut rng = Rng::new(config.seed);
        let kinematics = KinematicsEngine::new(
            &config.bodies,
            config.global_speed,
            config.default_spin_speed,
            &mut rng,
        )?;
        let twinkle = twinkle(&config, &mut rng)?;

        log::info!(
            "orrery: {} bodies, {} stars, seed {}, {:?} focus",
            kinematics.len(),
            twinkle.len(),
            config.seed,
            config.camera.focus_mode,
        );

        Ok(Self {
            kinematics,
            star: CentralStar::new(config.star),
            twinkle,
            selection: SelectionMachine::new(config.camera.focus_mode),
            camera,
            input: InputQueue::new(),
            events: Vec::new(),
            stale_events: 0,
            body_offset: config.camera.body_offset,
            star_offset: config.camera.star_offset,
            elapsed: 0.0,
        })
    }

    /// Advance the scene to `elapsed` seconds; `delta` is the time since the
    /// previous tick. Negative or non-finite deltas count as zero.
    ///
    /// Events are per-frame data: anything raised before the previous tick
    /// ended and still undrained is dropped here.
    pub fn tick(&mut self, elapsed: f64, delta: f32) {
        self.events.drain(..self.stale_events);
        let delta = sanitize_delta(delta);
        let elapsed = if elapsed.is_finite() {
            elapsed
        } else {
            log::warn!("orrery: non-finite elapsed time, holding at {:.3}s", self.elapsed);
            self.elapsed
        };
        if elapsed < self.elapsed {
            log::warn!("orrery: clock went backwards ({:.3}s -> {:.3}s)", self.elapsed, elapsed);
        }
        self.elapsed = elapsed;

        self.kinematics.update(elapsed, delta);
        self.star.update(elapsed, delta);
        self.twinkle.update(elapsed, delta);

        for input in self.input.drain() {
            self.apply_input(input);
        }

        self.track_focus();

        if self.camera.advance(delta) == CameraUpdate::Finished {
            log::debug!("orrery: camera settled for {:?}", self.selection.selection());
            self.events.push(OrreryEvent::TransitionFinished);
        }
        self.stale_events = self.events.len();
    }

    fn apply_input(&mut self, input: SceneInput) {
        match input {
            SceneInput::Pick(target) => {
                // Rejected picks are logged inside on_pick; the queue has no caller to report to
                let _ = self.on_pick(target);
            }
            SceneInput::Deselect => {
                self.on_deselect();
            }
            SceneInput::ReportCamera(pose) => {
                self.report_camera_pose(pose);
            }
        }
    }

    /// Select the star or a body, snapshotting its latest computed position,
    /// and start a camera transition toward it.
    /// An unknown body id returns `NotFound` and leaves everything unchanged.
    pub fn on_pick(&mut self, target: PickTarget) -> Result<()> {
        let kinematics = &self.kinematics;
        let star_position = self.star.position();
        let result = self.selection.pick(target, |target| match target {
            PickTarget::Star => Some(star_position),
            PickTarget::Body(id) => kinematics.transform(id).map(|t| t.position),
        });

        let change = match result {
            Ok(change) => change,
            Err(err) => {
                log::warn!("orrery: pick rejected: {err}");
                return Err(err);
            }
        };

        let focus = change.focus.unwrap_or(Vec3::ZERO);
        let pose = self.target_pose(&change.selection, focus);
        log::debug!(
            "orrery: selected {:?} at {focus}{}",
            change.selection,
            if change.reselected { " (refreshed)" } else { "" },
        );

        self.camera.transition_to(pose);
        self.events.push(OrreryEvent::SelectionChanged(change.selection));
        self.events.push(OrreryEvent::TransitionStarted);
        Ok(())
    }

    /// Clear the selection and head back to the default pose.
    /// Returns false (and does nothing) when nothing was selected.
    pub fn on_deselect(&mut self) -> bool {
        let Some(change) = self.selection.deselect() else {
            return false;
        };
        log::debug!("orrery: deselected, returning to default pose");
        self.camera.return_to_default();
        self.events.push(OrreryEvent::SelectionChanged(change.selection));
        self.events.push(OrreryEvent::TransitionStarted);
        true
    }

    /// Queue input to be applied on the next tick, after kinematics.
    pub fn push_input(&mut self, input: SceneInput) {
        self.input.push(input);
    }

    /// Accept the pose of external orbit controls. Free orbiting belongs to
    /// the renderer only with nothing selected and no transition running;
    /// otherwise the report is ignored and `false` is returned.
    pub fn report_camera_pose(&mut self, pose: CameraPose) -> bool {
        if !self.selection.selection().is_none() {
            return false;
        }
        self.camera.report_pose(pose)
    }

    /// In track mode, keep the focus point and camera target on the moving body.
    fn track_focus(&mut self) {
        let Some(id) = self.selection.tracked_body() else {
            return;
        };
        let Some(position) = self.kinematics.transform(id).map(|t| t.position) else {
            return;
        };
        let pose = CameraPose::focused_on(position, self.offset_for(id));
        self.selection.refresh_focus(position);
        self.camera.follow(pose);
    }

    fn target_pose(&self, selection: &Selection, focus: Vec3) -> CameraPose {
        match selection {
            Selection::None => self.camera.default_pose(),
            Selection::Star => CameraPose::focused_on(focus, self.star_offset),
            Selection::Body(id) => CameraPose::focused_on(focus, self.offset_for(id)),
        }
    }

    fn offset_for(&self, id: &BodyId) -> Vec3 {
        self.kinematics
            .body(id)
            .and_then(CelestialBody::focus_offset)
            .unwrap_or(self.body_offset)
    }

    /// Take every pending event, in order. Drain once per tick: events
    /// survive one further tick, then are dropped.
    pub fn drain_events(&mut self) -> Vec<OrreryEvent> {
        self.stale_events = 0;
        std::mem::take(&mut self.events)
    }

    pub fn body_transform(&self, id: &BodyId) -> Result<BodyTransform> {
        self.kinematics
            .transform(id)
            .copied()
            .ok_or_else(|| OrreryError::NotFound(id.to_string()))
    }

    pub fn star_transform(&self) -> StarTransform {
        *self.star.transform()
    }

    pub fn star_twinkle(&self) -> TwinkleFrame<'_> {
        self.twinkle.frame()
    }

    pub fn camera_pose(&self) -> CameraPose {
        self.camera.current()
    }

    /// Pack the star (slot 0) and every body, in config order.
    pub fn write_instances(&self, buffer: &mut InstanceBuffer) {
        buffer.clear();
        buffer.push(BodyInstance::from(self.star.transform()));
        for transform in self.kinematics.transforms() {
            buffer.push(BodyInstance::from(transform));
        }
    }

    /// Closed orbit polyline for `id`, for drawing rings.
    pub fn orbit_ring(&self, id: &BodyId) -> Result<Vec<Vec3>> {
        let body = self
            .kinematics
            .body(id)
            .ok_or_else(|| OrreryError::NotFound(id.to_string()))?;
        Ok(orbit_ring_points(body.orbit_radius(), ORBIT_RING_SEGMENTS))
    }

    pub fn selection(&self) -> &Selection {
        self.selection.selection()
    }

    /// Focus point captured for the current selection.
    pub fn focus(&self) -> Option<Vec3> {
        self.selection.focus()
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        self.kinematics.bodies()
    }

    pub fn body_index(&self, id: &BodyId) -> Option<usize> {
        self.kinematics.index_of(id)
    }

    pub fn is_transitioning(&self) -> bool {
        self.camera.is_transitioning()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
