use orrery::{
    BodyId, CameraPose, EventRecord, FrameClock, InstanceBuffer, Orrery, OrreryConfig,
    OrreryError, OrreryEvent, PickTarget, SceneInput, Selection,
};

/// Wires the orrery core to the browser frame loop.
///
/// The crate keeps one `thread_local!` runner and exports free functions via
/// `#[wasm_bindgen]`, because wasm-bindgen cannot export the core types directly.
pub struct OrreryRunner {
    orrery: Orrery,
    clock: FrameClock,
    instances: InstanceBuffer,
    /// Flat event records for SharedArrayBuffer reads, refilled every tick.
    events: Vec<EventRecord>,
}

impl OrreryRunner {
    pub fn new(orrery: Orrery) -> Self {
        let mut runner = Self {
            orrery,
            clock: FrameClock::new(),
            instances: InstanceBuffer::new(),
            events: Vec::with_capacity(8),
        };
        runner.orrery.write_instances(&mut runner.instances);
        runner
    }

    /// Build from a JSON scene config.
    pub fn from_json(json: &str) -> Result<Self, OrreryError> {
        let config = OrreryConfig::from_json(json)?;
        Ok(Self::new(Orrery::new(config)?))
    }

    /// Run one frame: advance the clock, tick the core, pack buffers.
    pub fn tick(&mut self, dt: f32) {
        let tick = self.clock.advance(dt);
        self.orrery.tick(tick.elapsed, tick.delta);

        self.events.clear();
        for event in self.orrery.drain_events() {
            let record = encode_event(&self.orrery, &event);
            self.events.push(record);
        }

        self.orrery.write_instances(&mut self.instances);
    }

    // ---- Input (queued, applied on the next tick) ----

    pub fn pick_body(&mut self, index: u32) -> Result<(), OrreryError> {
        let id = self
            .orrery
            .bodies()
            .get(index as usize)
            .map(|body| body.id().clone())
            .ok_or_else(|| OrreryError::NotFound(format!("#{index}")))?;
        self.orrery.push_input(SceneInput::Pick(PickTarget::Body(id)));
        Ok(())
    }

    pub fn pick_body_named(&mut self, name: &str) -> Result<(), OrreryError> {
        let id = BodyId::from(name);
        if self.orrery.body_index(&id).is_none() {
            return Err(OrreryError::NotFound(name.to_owned()));
        }
        self.orrery.push_input(SceneInput::Pick(PickTarget::Body(id)));
        Ok(())
    }

    pub fn pick_star(&mut self) {
        self.orrery.push_input(SceneInput::Pick(PickTarget::Star));
    }

    pub fn deselect(&mut self) {
        self.orrery.push_input(SceneInput::Deselect);
    }

    pub fn report_camera(&mut self, pose: CameraPose) {
        self.orrery.push_input(SceneInput::ReportCamera(pose));
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    pub fn twinkle_sizes_ptr(&self) -> *const f32 {
        self.orrery.star_twinkle().sizes.as_ptr()
    }

    pub fn twinkle_count(&self) -> u32 {
        self.orrery.star_twinkle().sizes.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    // ---- Small copied reads ----

    /// `[px, py, pz, lx, ly, lz]`
    pub fn camera_pose(&self) -> [f32; 6] {
        self.orrery.camera_pose().to_array()
    }

    /// `[rx, ry, drx, dry]`: accumulated field rotation and last tick's delta.
    pub fn star_rotation(&self) -> [f32; 4] {
        let frame = self.orrery.star_twinkle();
        [
            frame.rotation.x,
            frame.rotation.y,
            frame.rotation_delta.x,
            frame.rotation_delta.y,
        ]
    }

    pub fn body_count(&self) -> u32 {
        self.orrery.bodies().len() as u32
    }

    pub fn body_name(&self, index: u32) -> Option<String> {
        self.orrery
            .bodies()
            .get(index as usize)
            .map(|body| body.id().to_string())
    }

    pub fn body_model(&self, index: u32) -> Option<String> {
        self.orrery
            .bodies()
            .get(index as usize)
            .and_then(|body| body.model().map(str::to_owned))
    }

    pub fn body_color(&self, index: u32) -> Option<[f32; 3]> {
        self.orrery
            .bodies()
            .get(index as usize)
            .and_then(|body| body.material_color())
    }

    /// Orbit ring as flat `[x, y, z, ...]`; empty for an unknown index.
    pub fn orbit_ring(&self, index: u32) -> Vec<f32> {
        let Some(body) = self.orrery.bodies().get(index as usize) else {
            return Vec::new();
        };
        match self.orrery.orbit_ring(body.id()) {
            Ok(points) => points.iter().flat_map(|p| p.to_array()).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }
}

/// Flatten an event for the JS side. Selection payload in `a`:
/// body index, or `SELECTED_NONE` / `SELECTED_STAR`.
fn encode_event(orrery: &Orrery, event: &OrreryEvent) -> EventRecord {
    match event {
        OrreryEvent::SelectionChanged(selection) => {
            let a = match selection {
                Selection::None => EventRecord::SELECTED_NONE,
                Selection::Star => EventRecord::SELECTED_STAR,
                Selection::Body(id) => orrery
                    .body_index(id)
                    .map(|i| i as f32)
                    .unwrap_or(EventRecord::SELECTED_NONE),
            };
            EventRecord {
                kind: EventRecord::SELECTION_CHANGED,
                a,
                ..Default::default()
            }
        }
        OrreryEvent::TransitionStarted => EventRecord {
            kind: EventRecord::TRANSITION_STARTED,
            ..Default::default()
        },
        OrreryEvent::TransitionFinished => EventRecord {
            kind: EventRecord::TRANSITION_FINISHED,
            ..Default::default()
        },
    }
}
