use crate::domain::tuning::PhysicsTuning;
use crate::systems::body::Player;
use crate::systems::body_system::BodySystem;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(tuning: PhysicsTuning) -> SimulationCore {
    SimulationCore {
        player: Player::with_tuning(&tuning),
        tuning,
        ground: None,
        bodies: BodySystem::new(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
