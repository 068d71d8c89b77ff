//! Core types shared by every body kind: vector math and the error type.

pub mod error;
pub mod math;

pub use error::{PhysicsError, PhysicsResult};
pub use math::Vec3;
