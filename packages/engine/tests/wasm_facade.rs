#![cfg(target_arch = "wasm32")]

use runner_physics::Simulation;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_runs_a_frame() {
    runner_physics::init();

    let mut sim = Simulation::new();
    assert!(!sim.step());

    sim.set_ground(0.0, -1.0, 0.0, 20.0, 1.0, 200.0).unwrap();
    let id = sim
        .spawn_box(r#"{"width": 1, "height": 1, "depth": 1, "position": {"x": 5, "y": 2, "z": 0}}"#)
        .unwrap();
    sim.reset();

    assert!(sim.step());
    assert_eq!(sim.frame(), 1);
    assert!(sim.is_alive());
    assert_eq!(sim.box_position(id).len(), 3);
    assert!(sim.box_position(999).is_empty());
}

#[wasm_bindgen_test]
fn facade_reports_errors_as_strings() {
    let mut sim = Simulation::new();
    let err = sim.set_ground(0.0, 0.0, 0.0, 0.0, 1.0, 1.0).unwrap_err();
    assert!(err.as_string().unwrap().contains("width"));
    assert!(sim.spawn_box("{").is_err());
    assert!(sim.remove_box(7).is_err());
}

#[wasm_bindgen_test]
fn facade_tuning_json() {
    let sim = Simulation::with_tuning_json(r#"{"gravity": -0.004}"#).unwrap();
    assert!(sim.tuning_json().contains("-0.004"));
    assert!(Simulation::with_tuning_json(r#"{"friction": -1}"#).is_err());
}
