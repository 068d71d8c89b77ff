use wasm_bindgen::prelude::*;

use crate::core::{PhysicsError, Vec3};
use crate::domain::tuning::PhysicsTuning;

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(e: PhysicsError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create an empty simulation (no ground, player not yet alive)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::new(),
        }
    }

    #[wasm_bindgen(js_name = withTuningJson)]
    pub fn with_tuning_json(json: &str) -> Result<Simulation, JsValue> {
        let tuning = PhysicsTuning::from_json(json).map_err(to_js)?;
        Ok(Self {
            core: SimulationCore::with_tuning(tuning),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), JsValue> {
        self.core.set_gravity(gravity).map_err(to_js)
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<(), JsValue> {
        self.core.set_friction(friction).map_err(to_js)
    }

    pub fn set_z_acceleration(&mut self, step: f32) -> Result<(), JsValue> {
        self.core.set_z_acceleration(step).map_err(to_js)
    }

    pub fn set_jump_velocity(&mut self, velocity: f32) -> Result<(), JsValue> {
        self.core.set_jump_velocity(velocity).map_err(to_js)
    }

    pub fn load_tuning_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_tuning_json(json).map_err(to_js)
    }

    /// Current tuning as JSON
    pub fn tuning_json(&self) -> String {
        self.core.tuning().to_json()
    }

    /// Set the ground box (center + size)
    pub fn set_ground(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        width: f32,
        height: f32,
        depth: f32,
    ) -> Result<(), JsValue> {
        self.core
            .set_ground(Vec3::new(x, y, z), width, height, depth)
            .map_err(to_js)
    }

    /// Spawn a box from `{width, height, depth, color?, velocity?, position?, zAcceleration?}`
    /// Returns the box ID
    pub fn spawn_box(&mut self, options_json: &str) -> Result<u32, JsValue> {
        self.core.spawn_box_json(options_json).map_err(to_js)
    }

    /// Remove a box by ID
    pub fn remove_box(&mut self, id: u32) -> Result<(), JsValue> {
        self.core.remove_box(id).map_err(to_js)
    }

    pub fn clear_boxes(&mut self) {
        self.core.clear_boxes();
    }

    #[wasm_bindgen(getter)]
    pub fn box_count(&self) -> usize {
        self.core.box_count()
    }

    /// `[x, y, z]` of a box, empty when the ID is unknown
    pub fn box_position(&self, id: u32) -> Vec<f32> {
        self.core
            .box_position(id)
            .map(|p| p.to_array().to_vec())
            .unwrap_or_default()
    }

    /// Step the simulation forward one frame.
    /// Returns false (frame skipped, warning logged) when no ground is set.
    pub fn step(&mut self) -> bool {
        self.core.step().is_ok()
    }

    // === PLAYER ===

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> f32 { self.core.player().position().x }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> f32 { self.core.player().position().y }

    #[wasm_bindgen(getter)]
    pub fn player_z(&self) -> f32 { self.core.player().position().z }

    /// Forward speed, for driving the run animation
    #[wasm_bindgen(getter)]
    pub fn player_velocity_z(&self) -> f32 { self.core.player().velocity().z }

    #[wasm_bindgen(getter)]
    pub fn can_jump(&self) -> bool { self.core.player().can_jump() }

    #[wasm_bindgen(getter)]
    pub fn is_alive(&self) -> bool { self.core.player().is_alive() }

    pub fn jump(&mut self) -> bool {
        self.core.jump()
    }

    pub fn die(&mut self) {
        self.core.die();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
