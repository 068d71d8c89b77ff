//! Runner Physics - AABB body physics for the runner game, compiled to WASM
//!
//! The render loop (three.js) owns the meshes; this crate owns the numbers.
//! Each frame JS calls `Simulation::step()` and copies positions back onto
//! its meshes.
//!
//! Architecture:
//! - core/        - Vec3 and the error type
//! - domain/      - Tuning constants and body construction options
//! - systems/     - Bodies, collision predicate, body system
//! - simulation/  - Frame driver and the wasm-bindgen facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short paths for tests and the JS glue)
pub use systems::body;
pub use systems::body_system;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, `log` -> browser console, banner
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(all(feature = "console_log", target_arch = "wasm32"))]
    {
        // Already initialized on a second call; nothing to do then.
        let _ = console_log::init_with_level(log::Level::Info);
    }

    web_sys::console::log_1(&"🏃 Runner physics initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{PhysicsError, PhysicsResult, Vec3};
pub use domain::options::BodyOptions;
pub use domain::tuning::PhysicsTuning;
pub use simulation::{Simulation, SimulationCore};
pub use systems::body::{Body, BodyLike, Bounds, CollisionProfile, MotionState, Player, StaticBody};
pub use systems::body_system::BodySystem;
