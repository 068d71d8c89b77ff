//! Simulation - the per-frame driver for one run
//!
//! Owns the ground, the player and the obstacle boxes. The JS render loop
//! calls `step()` once per animation frame and reads positions back.
//!
//! - init/     - construction
//! - settings  - runtime tuning knobs
//! - step/     - one frame: player, boxes, player-vs-box deaths
//! - bodies/   - spawn/remove/query boxes
//! - facade    - wasm-bindgen surface

use crate::core::{PhysicsResult, Vec3};
use crate::domain::options::BodyOptions;
use crate::domain::tuning::PhysicsTuning;
use crate::systems::body::{Bounds, Player, StaticBody};
use crate::systems::body_system::BodySystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "bodies/bodies.rs"]
mod bodies;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation state behind the JS facade
pub struct SimulationCore {
    tuning: PhysicsTuning,
    ground: Option<StaticBody>,
    player: Player,
    bodies: BodySystem,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create an empty simulation with the default tuning and no ground
    pub fn new() -> Self {
        init::create_simulation_core(PhysicsTuning::default())
    }

    pub fn with_tuning(tuning: PhysicsTuning) -> Self {
        init::create_simulation_core(tuning)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn tuning(&self) -> &PhysicsTuning { &self.tuning }

    pub fn player(&self) -> &Player { &self.player }

    pub fn player_mut(&mut self) -> &mut Player { &mut self.player }

    pub fn bodies(&self) -> &BodySystem { &self.bodies }

    pub fn ground(&self) -> Option<&StaticBody> { self.ground.as_ref() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Tuning setters reject values `load_tuning_json` would reject and leave
    /// the tuning untouched on error.
    pub fn set_gravity(&mut self, gravity: f32) -> PhysicsResult<()> {
        settings::set_gravity(self, gravity)
    }

    pub fn set_friction(&mut self, friction: f32) -> PhysicsResult<()> {
        settings::set_friction(self, friction)
    }

    pub fn set_z_acceleration(&mut self, step: f32) -> PhysicsResult<()> {
        settings::set_z_acceleration(self, step)
    }

    pub fn set_jump_velocity(&mut self, velocity: f32) -> PhysicsResult<()> {
        settings::set_jump_velocity(self, velocity)
    }

    /// Replace the whole tuning from JSON
    pub fn load_tuning_json(&mut self, json: &str) -> PhysicsResult<()> {
        settings::load_tuning_json(self, json)
    }

    // === GROUND ===

    /// Set the ground box from its center and size
    pub fn set_ground(&mut self, center: Vec3, width: f32, height: f32, depth: f32) -> PhysicsResult<()> {
        self.ground = Some(StaticBody::new(center, width, height, depth)?);
        log::debug!("ground set: {:?}", self.ground);
        Ok(())
    }

    /// Set the ground from explicit faces
    pub fn set_ground_bounds(&mut self, bounds: Bounds) -> PhysicsResult<()> {
        self.ground = Some(StaticBody::from_bounds(bounds)?);
        Ok(())
    }

    // === BOX API ===

    pub fn spawn_box(&mut self, options: &BodyOptions) -> PhysicsResult<u32> {
        bodies::spawn_box(self, options)
    }

    pub fn spawn_box_json(&mut self, json: &str) -> PhysicsResult<u32> {
        bodies::spawn_box_json(self, json)
    }

    pub fn remove_box(&mut self, id: u32) -> PhysicsResult<()> {
        bodies::remove_box(self, id)
    }

    pub fn box_position(&self, id: u32) -> Option<Vec3> {
        bodies::box_position(self, id)
    }

    pub fn box_count(&self) -> usize {
        bodies::box_count(self)
    }

    /// Remove every box and restart box ids
    pub fn clear_boxes(&mut self) {
        bodies::clear_boxes(self)
    }

    // === PLAYER ===

    /// Jump if the player is alive and standing on something
    pub fn jump(&mut self) -> bool {
        self.player.is_alive() && self.player.jump()
    }

    pub fn die(&mut self) {
        if self.player.is_alive() {
            log::info!("player died at frame {}", self.frame);
        }
        self.player.die();
    }

    /// Start a new run: the player is rebuilt from the current tuning and
    /// sent back to spawn. Unlike `Player::reset`, this also clears `can_jump`,
    /// so a new run cannot jump before its first landing.
    pub fn reset(&mut self) {
        self.player = Player::with_tuning(&self.tuning);
        self.player.reset();
        log::info!("player reset at frame {}", self.frame);
    }

    /// Step the simulation forward one frame.
    ///
    /// Fails (and does not count the frame) when no ground is set.
    pub fn step(&mut self) -> PhysicsResult<()> {
        step::step(self)
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
