//! Body - AABB bodies integrated once per frame against a static ground
//!
//! A body owns its position, velocity and box extents. The six face
//! positions (`Bounds`) are a cached view recomputed by `update_sides()`.
//! No rotation: every box stays axis-aligned and centered on its position.

mod body;
mod bounds;
mod collision;
mod player;
mod static_body;

pub use body::{Body, MotionState};
pub use bounds::{BodyLike, Bounds};
pub use collision::CollisionProfile;
pub use player::Player;
pub use static_body::StaticBody;
