pub mod runner;

pub use runner::OrreryRunner;

use std::cell::RefCell;

use js_sys::Float32Array;
use orrery::{CameraPose, Orrery, OrreryConfig, OrreryError};
use wasm_bindgen::prelude::*;

const NOT_INITIALIZED: &str = "orrery: not initialized, call orrery_init() first";

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner. Before `orrery_init` there is no runner
/// and no logger yet, so the miss goes straight to the browser console.
fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                web_sys::console::warn_1(&NOT_INITIALIZED.into());
                None
            }
        }
    })
}

fn to_js(err: OrreryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Flatten a fallible runner call; a missing runner is an error too.
fn call_result(outcome: Option<Result<(), OrreryError>>) -> Result<(), String> {
    match outcome {
        Some(result) => result.map_err(|err| err.to_string()),
        None => Err(NOT_INITIALIZED.to_owned()),
    }
}

fn install(runner: OrreryRunner) {
    log::info!(
        "orrery: initialized ({} bodies, {} stars)",
        runner.body_count(),
        runner.twinkle_count()
    );
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Build the scene from a JSON config.
#[wasm_bindgen]
pub fn orrery_init(json: &str) -> Result<(), JsValue> {
    init_logging();
    let runner = OrreryRunner::from_json(json).map_err(|err| {
        log::error!("orrery: {err}");
        to_js(err)
    })?;
    install(runner);
    Ok(())
}

/// Build the built-in eight-planet scene.
#[wasm_bindgen]
pub fn orrery_init_default() -> Result<(), JsValue> {
    init_logging();
    let orrery = Orrery::new(OrreryConfig::solar_system()).map_err(to_js)?;
    install(OrreryRunner::new(orrery));
    Ok(())
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_pick_body(index: u32) -> Result<(), JsValue> {
    call_result(with_runner(|r| r.pick_body(index))).map_err(|msg| JsValue::from_str(&msg))
}

#[wasm_bindgen]
pub fn orrery_pick_body_named(name: &str) -> Result<(), JsValue> {
    call_result(with_runner(|r| r.pick_body_named(name))).map_err(|msg| JsValue::from_str(&msg))
}

#[wasm_bindgen]
pub fn orrery_pick_star() {
    with_runner(|r| r.pick_star());
}

#[wasm_bindgen]
pub fn orrery_deselect() {
    with_runner(|r| r.deselect());
}

/// Orbit controls moved the camera; ignored unless nothing is selected and the camera is idle.
#[wasm_bindgen]
pub fn orrery_report_camera(px: f32, py: f32, pz: f32, lx: f32, ly: f32, lz: f32) {
    let pose = CameraPose::from_array([px, py, pz, lx, ly, lz]);
    with_runner(|r| r.report_camera(pose));
}

// ---- Pointer accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_twinkle_sizes_ptr() -> *const f32 {
    with_runner(|r| r.twinkle_sizes_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_twinkle_count() -> u32 {
    with_runner(|r| r.twinkle_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len()).unwrap_or(0)
}

// ---- Copied reads ----

#[wasm_bindgen]
pub fn get_camera_pose() -> Float32Array {
    let pose = with_runner(|r| r.camera_pose()).unwrap_or_default();
    Float32Array::from(&pose[..])
}

#[wasm_bindgen]
pub fn get_star_rotation() -> Float32Array {
    let rotation = with_runner(|r| r.star_rotation()).unwrap_or_default();
    Float32Array::from(&rotation[..])
}

#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    with_runner(|r| r.body_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_body_name(index: u32) -> Option<String> {
    with_runner(|r| r.body_name(index)).flatten()
}

#[wasm_bindgen]
pub fn get_body_model(index: u32) -> Option<String> {
    with_runner(|r| r.body_model(index)).flatten()
}

/// `[r, g, b]` in [0, 1], or empty when the body has no tint override.
#[wasm_bindgen]
pub fn get_body_color(index: u32) -> Float32Array {
    match with_runner(|r| r.body_color(index)).flatten() {
        Some(rgb) => Float32Array::from(&rgb[..]),
        None => Float32Array::new_with_length(0),
    }
}

/// Flat `[x, y, z, ...]` ring for body `index`.
#[wasm_bindgen]
pub fn get_orbit_ring(index: u32) -> Float32Array {
    let points = with_runner(|r| r.orbit_ring(index)).unwrap_or_default();
    Float32Array::from(points.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_runner_is_an_error() {
        assert_eq!(call_result(None), Err(NOT_INITIALIZED.to_owned()));
    }

    #[test]
    fn runner_errors_keep_their_message() {
        let outcome = Some(Err(OrreryError::NotFound("Pluto".into())));
        assert_eq!(call_result(outcome), Err("no body with id `Pluto`".to_owned()));
        assert_eq!(call_result(Some(Ok(()))), Ok(()));
    }
}
