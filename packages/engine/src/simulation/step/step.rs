use crate::core::{PhysicsError, PhysicsResult};

use super::perf_timer::timed;
use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore) -> PhysicsResult<()> {
    // Copy the ground out: it stays frozen for the whole frame.
    let Some(ground) = sim.ground else {
        log::warn!("step called without a ground body, skipping frame {}", sim.frame);
        return Err(PhysicsError::MissingGround);
    };

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
        sim.perf_stats.body_count = sim.bodies.body_count() as u32;
    }
    let step_timer = perf_on.then(PerfTimer::start);

    // === PLAYER ===
    let (player_hit, player_ms) = timed(perf_on, || sim.player.update(&ground));

    // === BOXES ===
    let (report, bodies_ms) = timed(perf_on, || sim.bodies.update(&ground));

    // === RUNNER DEATH ===
    // Boxes are obstacles: touching one ends the run.
    if sim.player.is_alive() {
        let player = &sim.player;
        let hit = sim.bodies.first_hit(|body| player.collision(body));
        if let Some(id) = hit {
            log::info!("player hit body {id} at frame {}", sim.frame);
            sim.player.die();
        }
    }

    sim.frame += 1;

    if let Some(timer) = step_timer {
        sim.perf_stats.step_ms = timer.elapsed_ms();
        sim.perf_stats.player_ms = player_ms.unwrap_or_default();
        sim.perf_stats.bodies_ms = bodies_ms.unwrap_or_default();
        sim.perf_stats.bodies_updated = report.updated;
        sim.perf_stats.ground_hits = report.ground_hits + u32::from(player_hit);
    }

    Ok(())
}
