use crate::core::error::check_extent;
use crate::core::{PhysicsError, PhysicsResult, Vec3};
use crate::domain::options::BodyOptions;
use crate::domain::tuning::PhysicsTuning;

use super::bounds::{BodyLike, Bounds};
use super::collision::CollisionProfile;

/// Whether a body is currently allowed to jump
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionState {
    Airborne,
    Grounded,
}

/// Dynamic AABB body - integrates velocity and bounces off the ground
#[derive(Clone, Debug)]
pub struct Body {
    // === Physics State ===
    /// Box center. Writes go through `set_position` so the sides stay fresh.
    position: Vec3,
    /// Velocity (units per frame)
    pub velocity: Vec3,
    /// Set by a ground hit, cleared only by `try_jump`
    can_jump: bool,

    // === Shape ===
    width: f32,
    height: f32,
    depth: f32,
    /// Cached faces, see `update_sides`
    bounds: Bounds,
    profile: CollisionProfile,

    // === Per-instance constants ===
    gravity: f32,
    z_acceleration: bool,
    z_acceleration_step: f32,
    friction: f32,

    /// Render color, never read by the physics
    color: Option<String>,
}

impl Body {
    /// Create a box with the default tuning and exact collision box
    pub fn new(options: &BodyOptions) -> PhysicsResult<Self> {
        Self::with_tuning(options, &PhysicsTuning::default(), CollisionProfile::BOX)
    }

    /// Create a body from options, copying every initial value
    pub fn with_tuning(
        options: &BodyOptions,
        tuning: &PhysicsTuning,
        profile: CollisionProfile,
    ) -> PhysicsResult<Self> {
        let width = check_extent("width", options.width)?;
        let height = check_extent("height", options.height)?;
        let depth = check_extent("depth", options.depth)?;
        if !options.position.is_finite() {
            return Err(PhysicsError::NonFiniteValue { field: "position" });
        }
        if !options.velocity.is_finite() {
            return Err(PhysicsError::NonFiniteValue { field: "velocity" });
        }

        let mut body = Self::from_parts(
            options.position,
            options.velocity,
            (width, height, depth),
            options.z_acceleration,
            tuning,
            profile,
        );
        body.color = options.color.clone();
        Ok(body)
    }

    /// Build without validation. Callers guarantee positive extents.
    pub(crate) fn from_parts(
        position: Vec3,
        velocity: Vec3,
        (width, height, depth): (f32, f32, f32),
        z_acceleration: bool,
        tuning: &PhysicsTuning,
        profile: CollisionProfile,
    ) -> Self {
        Self {
            position,
            velocity,
            can_jump: false,
            width,
            height,
            depth,
            bounds: Bounds::from_center(position, width, height, depth),
            profile,
            gravity: tuning.gravity,
            z_acceleration,
            z_acceleration_step: tuning.z_acceleration,
            friction: tuning.friction,
            color: None,
        }
    }

    /// Recompute the six faces from position and extents
    #[inline]
    pub fn update_sides(&mut self) {
        self.bounds = Bounds::from_center(self.position, self.width, self.height, self.depth);
    }

    /// Advance one frame against `ground`.
    ///
    /// Returns true when the ground was hit this frame.
    pub fn update<G: BodyLike + ?Sized>(&mut self, ground: &G) -> bool {
        self.update_sides();

        if self.z_acceleration {
            self.velocity.z += self.z_acceleration_step;
        }

        // Horizontal motion is never blocked. The sides keep the pre-move x/z,
        // so the ground test below sees where the body started this frame.
        self.position.x += self.velocity.x;
        self.position.z += self.velocity.z;

        let hit = self.apply_gravity(ground);
        // Leave the sides matching the new position for readers between frames.
        self.update_sides();
        hit
    }

    fn apply_gravity<G: BodyLike + ?Sized>(&mut self, ground: &G) -> bool {
        self.velocity.y += self.gravity;

        // GROUND COLLISION
        if self.collision(ground) {
            // Bounce: flip and damp. position.y stays put this frame.
            self.velocity.y = -(self.velocity.y * self.friction);
            self.can_jump = true;
            true
        } else {
            self.position.y += self.velocity.y;
            false
        }
    }

    /// Overlap test against `other` using the cached sides and this body's
    /// collision profile. Pure, no mutation.
    #[inline]
    pub fn collision<O: BodyLike + ?Sized>(&self, other: &O) -> bool {
        self.profile
            .overlaps(&self.bounds, self.velocity.y, &other.bounds())
    }

    /// Consume the grounded flag and launch upwards.
    ///
    /// Returns false (and changes nothing) while airborne.
    pub fn try_jump(&mut self, jump_velocity: f32) -> bool {
        if !self.can_jump {
            return false;
        }
        self.velocity.y = jump_velocity;
        self.can_jump = false;
        true
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the body and refresh its sides
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_sides();
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    pub fn motion_state(&self) -> MotionState {
        if self.can_jump {
            MotionState::Grounded
        } else {
            MotionState::Airborne
        }
    }

    /// Cached faces, refreshed at the end of every `update`
    pub fn sides(&self) -> Bounds {
        self.bounds
    }

    pub fn extents(&self) -> (f32, f32, f32) {
        (self.width, self.height, self.depth)
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn z_acceleration(&self) -> bool {
        self.z_acceleration
    }

    pub fn profile(&self) -> CollisionProfile {
        self.profile
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

impl BodyLike for Body {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}
