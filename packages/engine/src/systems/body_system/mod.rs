//! BodySystem - owns the dynamic boxes (obstacles, props) of a run
//!
//! Each box is integrated against the same ground, independently of the
//! others. Boxes never collide with each other; `first_hit` lets the caller
//! test one probe (the player) against all of them.

mod system;

pub use system::{BodySystem, SpawnResult, StepReport};
