use crate::core::PhysicsResult;
use crate::domain::tuning::PhysicsTuning;

use super::perf_stats::PerfStats;
use super::SimulationCore;

// Tuning changes apply to boxes spawned afterwards and to the player on its
// next reset; bodies already in flight keep the constants they were built with.

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

/// Apply `edit` to a copy of the tuning and keep it only if it validates
fn update_tuning<F>(sim: &mut SimulationCore, edit: F) -> PhysicsResult<()>
where
    F: FnOnce(&mut PhysicsTuning),
{
    let mut candidate = sim.tuning;
    edit(&mut candidate);
    candidate.validate()?;
    sim.tuning = candidate;
    Ok(())
}

pub(super) fn set_gravity(sim: &mut SimulationCore, gravity: f32) -> PhysicsResult<()> {
    update_tuning(sim, |t| t.gravity = gravity)
}

pub(super) fn set_friction(sim: &mut SimulationCore, friction: f32) -> PhysicsResult<()> {
    update_tuning(sim, |t| t.friction = friction)
}

pub(super) fn set_z_acceleration(sim: &mut SimulationCore, step: f32) -> PhysicsResult<()> {
    update_tuning(sim, |t| t.z_acceleration = step)
}

pub(super) fn set_jump_velocity(sim: &mut SimulationCore, velocity: f32) -> PhysicsResult<()> {
    update_tuning(sim, |t| t.player_jump_velocity = velocity)
}

pub(super) fn load_tuning_json(sim: &mut SimulationCore, json: &str) -> PhysicsResult<()> {
    sim.tuning = PhysicsTuning::from_json(json)?;
    log::debug!("tuning loaded: {:?}", sim.tuning);
    Ok(())
}
