use crate::core::{PhysicsResult, Vec3};
use crate::domain::options::BodyOptions;
use crate::systems::body::{Body, CollisionProfile};

use super::SimulationCore;

pub(super) fn spawn_box(sim: &mut SimulationCore, options: &BodyOptions) -> PhysicsResult<u32> {
    let body = Body::with_tuning(options, &sim.tuning, CollisionProfile::BOX)?;
    Ok(sim.bodies.add_body(body).id)
}

pub(super) fn spawn_box_json(sim: &mut SimulationCore, json: &str) -> PhysicsResult<u32> {
    let options = BodyOptions::from_json(json)?;
    spawn_box(sim, &options)
}

pub(super) fn remove_box(sim: &mut SimulationCore, id: u32) -> PhysicsResult<()> {
    sim.bodies.remove_body(id).map(|_| ())
}

pub(super) fn box_position(sim: &SimulationCore, id: u32) -> Option<Vec3> {
    sim.bodies.get(id).map(Body::position)
}

pub(super) fn box_count(sim: &SimulationCore) -> usize {
    sim.bodies.body_count()
}

pub(super) fn clear_boxes(sim: &mut SimulationCore) {
    sim.bodies.clear();
}
