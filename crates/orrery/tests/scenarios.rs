//! End-to-end scenarios driven through the public `Orrery` API.

use approx::assert_abs_diff_eq;
use glam::Vec3;
use orrery::{
    BodyId, CameraPose, FrameClock, InstanceBuffer, Orrery, OrreryConfig, OrreryError,
    OrreryEvent, PickTarget, SceneInput, Selection, TransitionPacing,
};

const FRAME: f32 = 1.0 / 60.0;

fn solar_system() -> Orrery {
    Orrery::new(OrreryConfig::solar_system()).unwrap()
}

/// Tick until the camera settles, returning how many ticks it took.
fn settle(orrery: &mut Orrery, clock: &mut FrameClock) -> usize {
    let mut ticks = 0;
    while orrery.is_transitioning() {
        let tick = clock.advance(FRAME);
        orrery.tick(tick.elapsed, tick.delta);
        ticks += 1;
        assert!(ticks < 10_000, "camera never settled");
    }
    ticks
}

#[test]
fn mars_starts_at_its_phase() {
    let orrery = solar_system();
    let mars = orrery.body_transform(&BodyId::from("Mars")).unwrap();
    assert_abs_diff_eq!(mars.position.x, -9.19, epsilon = 0.01);
    assert_abs_diff_eq!(mars.position.y, 0.0);
    assert_abs_diff_eq!(mars.position.z, 9.19, epsilon = 0.01);
}

#[test]
fn preset_overrides_are_resolved() {
    let orrery = solar_system();
    assert_eq!(orrery.bodies().len(), 8);

    let uranus = orrery.bodies().iter().find(|b| b.id().as_str() == "Uranus").unwrap();
    assert_eq!(uranus.spin_speed(), 0.2);
    let [r, g, b] = uranus.material_color().unwrap();
    assert_abs_diff_eq!(r, 0xb5 as f32 / 255.0);
    assert_abs_diff_eq!(g, 0xe0 as f32 / 255.0);
    assert_abs_diff_eq!(b, 1.0);

    let earth = orrery.bodies().iter().find(|b| b.id().as_str() == "Earth").unwrap();
    assert_eq!(earth.spin_speed(), 0.8);
    assert!(earth.material_color().is_none());
}

#[test]
fn pick_then_deselect_settles_on_default() {
    let mut orrery = solar_system();
    let mut clock = FrameClock::new();
    let default_pose = orrery.camera_pose();

    orrery.on_pick(PickTarget::Body("Mars".into())).unwrap();
    settle(&mut orrery, &mut clock);
    assert_ne!(orrery.camera_pose(), default_pose);

    assert!(orrery.on_deselect());
    settle(&mut orrery, &mut clock);
    assert_eq!(orrery.camera_pose(), default_pose);
    assert_eq!(orrery.selection(), &Selection::None);
}

#[test]
fn deselect_mid_flight_still_ends_on_default() {
    let mut orrery = solar_system();
    let mut clock = FrameClock::new();
    let default_pose = orrery.camera_pose();

    orrery.on_pick(PickTarget::Body("Mars".into())).unwrap();
    for _ in 0..30 {
        let tick = clock.advance(FRAME);
        orrery.tick(tick.elapsed, tick.delta);
    }
    assert!(orrery.is_transitioning());
    let live = orrery.camera_pose();

    orrery.on_deselect();
    // The return trip starts where the camera actually is
    assert_eq!(orrery.camera_pose(), live);

    settle(&mut orrery, &mut clock);
    assert_eq!(orrery.camera_pose(), default_pose);
}

#[test]
fn unknown_body_is_rejected_without_side_effects() {
    let mut orrery = solar_system();
    orrery.on_pick(PickTarget::Body("Venus".into())).unwrap();
    orrery.drain_events();
    let pose = orrery.camera_pose();

    let err = orrery.on_pick(PickTarget::Body("Pluto".into())).unwrap_err();
    assert!(matches!(err, OrreryError::NotFound(ref id) if id == "Pluto"));
    assert_eq!(err.to_string(), "no body with id `Pluto`");
    assert_eq!(orrery.selection(), &Selection::Body("Venus".into()));
    assert_eq!(orrery.camera_pose(), pose);
    assert!(orrery.drain_events().is_empty());
}

#[test]
fn rapid_reselection_never_snaps() {
    let mut orrery = solar_system();
    let mut clock = FrameClock::new();
    let targets = ["Venus", "Jupiter", "Mars", "Neptune", "Earth"];

    let mut previous = orrery.camera_pose();
    for (i, name) in targets.iter().cycle().take(20).enumerate() {
        orrery.on_pick(PickTarget::Body((*name).into())).unwrap();
        assert_eq!(orrery.camera_pose(), previous, "pick {i} moved the camera instantly");

        for _ in 0..7 {
            let tick = clock.advance(FRAME);
            orrery.tick(tick.elapsed, tick.delta);
            let pose = orrery.camera_pose();
            // One tick covers at most 1/90 of a segment shorter than 250 units
            assert!(pose.distance(&previous) < 3.0);
            previous = pose;
        }
    }
}

#[test]
fn queued_input_applies_in_order() {
    let mut orrery = solar_system();
    orrery.push_input(SceneInput::Pick(PickTarget::Star));
    orrery.push_input(SceneInput::Pick(PickTarget::Body("Pluto".into())));
    orrery.push_input(SceneInput::Deselect);
    orrery.tick(0.1, 0.1);

    assert_eq!(orrery.selection(), &Selection::None);
    let events = orrery.drain_events();
    assert_eq!(
        events,
        vec![
            OrreryEvent::SelectionChanged(Selection::Star),
            OrreryEvent::TransitionStarted,
            OrreryEvent::SelectionChanged(Selection::None),
            OrreryEvent::TransitionStarted,
        ]
    );
}

#[test]
fn reported_camera_seeds_next_transition() {
    let config = OrreryConfig::solar_system().with_pacing(TransitionPacing::FixedStep { step: 0.5 });
    let mut orrery = Orrery::new(config).unwrap();
    let user = CameraPose::new(Vec3::new(40.0, 20.0, -30.0), Vec3::ZERO);
    assert!(orrery.report_camera_pose(user));

    orrery.on_pick(PickTarget::Star).unwrap();
    orrery.tick(0.0, FRAME);
    let halfway = orrery.camera_pose();
    let target = CameraPose::new(Vec3::new(0.0, 6.0, 18.0), Vec3::ZERO);
    assert_abs_diff_eq!(halfway.position.x, (user.position.x + target.position.x) / 2.0);
    assert_abs_diff_eq!(halfway.position.z, (user.position.z + target.position.z) / 2.0);
}

#[test]
fn config_round_trips_through_json() {
    let json = serde_json::to_string(&OrreryConfig::solar_system()).unwrap();
    let config = OrreryConfig::from_json(&json).unwrap();
    let a = Orrery::new(config).unwrap();
    let b = solar_system();
    let mut left = InstanceBuffer::new();
    let mut right = InstanceBuffer::new();
    a.write_instances(&mut left);
    b.write_instances(&mut right);
    assert_eq!(left.as_floats(), right.as_floats());
}

#[test]
fn twinkle_sizes_stay_bounded_over_a_long_run() {
    let mut orrery = solar_system();
    let mut clock = FrameClock::new();
    for _ in 0..600 {
        let tick = clock.advance(0.2);
        orrery.tick(tick.elapsed, tick.delta);
        let frame = orrery.star_twinkle();
        assert_eq!(frame.sizes.len(), 1000);
        assert!(frame.sizes.iter().all(|s| (0.0..=2.75).contains(s)));
    }
}
