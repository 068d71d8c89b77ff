use crate::core::Vec3;
use crate::domain::tuning::PhysicsTuning;

use super::body::{Body, MotionState};
use super::bounds::{BodyLike, Bounds};
use super::collision::CollisionProfile;

const PLAYER_EXTENTS: (f32, f32, f32) = (1.0, 1.0, 1.0);
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 0.0, 0.0);
/// Small downward seed so the first frame already resolves against the ground
const SPAWN_VELOCITY: Vec3 = Vec3::new(0.0, -0.01, 0.0);

/// Player-controlled runner body.
///
/// Same integration as a plain box, with a forgiving collision inset, constant
/// forward thrust and an alive/dead flag. Starts dead; `reset()` begins a run.
#[derive(Clone, Debug)]
pub struct Player {
    body: Body,
    is_alive: bool,
    jump_velocity: f32,
}

impl Player {
    pub fn new() -> Self {
        Self::with_tuning(&PhysicsTuning::default())
    }

    pub fn with_tuning(tuning: &PhysicsTuning) -> Self {
        Self::with_profile(tuning, CollisionProfile::PLAYER)
    }

    pub fn with_profile(tuning: &PhysicsTuning, profile: CollisionProfile) -> Self {
        Self {
            body: Body::from_parts(
                SPAWN_POSITION,
                Vec3::zero(),
                PLAYER_EXTENTS,
                true,
                tuning,
                profile,
            ),
            is_alive: false,
            jump_velocity: tuning.player_jump_velocity,
        }
    }

    /// Advance one frame against `ground`. Returns true on a ground hit.
    pub fn update<G: BodyLike + ?Sized>(&mut self, ground: &G) -> bool {
        self.body.update(ground)
    }

    pub fn collision<O: BodyLike + ?Sized>(&self, other: &O) -> bool {
        self.body.collision(other)
    }

    pub fn update_sides(&mut self) {
        self.body.update_sides();
    }

    /// Jump with the tuned velocity if grounded
    pub fn jump(&mut self) -> bool {
        self.body.try_jump(self.jump_velocity)
    }

    pub fn die(&mut self) {
        self.is_alive = false;
    }

    /// Back to spawn, alive, whatever the previous state
    pub fn reset(&mut self) {
        self.is_alive = true;
        self.body.set_position(SPAWN_POSITION);
        self.body.velocity = SPAWN_VELOCITY;
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    pub fn velocity(&self) -> Vec3 {
        self.body.velocity()
    }

    pub fn can_jump(&self) -> bool {
        self.body.can_jump()
    }

    pub fn motion_state(&self) -> MotionState {
        self.body.motion_state()
    }

    pub fn sides(&self) -> Bounds {
        self.body.sides()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyLike for Player {
    fn bounds(&self) -> Bounds {
        self.body.sides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::StaticBody;

    fn wide_ground() -> StaticBody {
        StaticBody::new(Vec3::new(0.0, -1.0, 0.0), 20.0, 1.0, 200.0).unwrap()
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new();
        assert!(!player.is_alive());
        assert!(!player.can_jump());
        assert!(player.body().z_acceleration());
        assert_eq!(player.body().extents(), (1.0, 1.0, 1.0));
        assert_eq!(player.body().profile(), CollisionProfile::PLAYER);
    }

    #[test]
    fn test_reset_after_die() {
        let mut player = Player::new();
        player.reset();
        for _ in 0..30 {
            player.update(&wide_ground());
        }
        player.body_mut().velocity = Vec3::new(1.0, 2.0, 3.0);
        player.die();
        assert!(!player.is_alive());

        player.reset();
        assert!(player.is_alive());
        assert_eq!(player.position(), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(player.velocity(), Vec3::new(0.0, -0.01, 0.0));
        assert_eq!(player.sides().bottom, -0.5);
    }

    #[test]
    fn test_die_twice_is_tolerated() {
        let mut player = Player::new();
        player.reset();
        player.die();
        player.die();
        assert!(!player.is_alive());
    }

    #[test]
    fn test_player_collides_within_inset() {
        // right = 0.6, left = -0.6 against ground [-10, 10]
        let opts = crate::domain::options::BodyOptions::new(1.2, 1.0, 1.0);
        let body = Body::with_tuning(&opts, &PhysicsTuning::default(), CollisionProfile::PLAYER)
            .unwrap();
        assert_eq!(body.sides().right, 0.6);
        assert_eq!(body.sides().left, -0.6);

        let ground = StaticBody::from_bounds(Bounds {
            left: -10.0,
            right: 10.0,
            bottom: -1.0,
            top: 0.0,
            back: -10.0,
            front: 10.0,
        })
        .unwrap();
        assert!(body.collision(&ground));
    }

    #[test]
    fn test_player_runs_forward_and_lands() {
        let mut player = Player::new();
        player.reset();

        let mut grounded_frame = None;
        for frame in 0..400 {
            if player.update(&wide_ground()) && grounded_frame.is_none() {
                grounded_frame = Some(frame);
            }
        }

        assert!(grounded_frame.is_some());
        assert!(player.can_jump());
        assert!(player.position().z > 0.0);
        assert!(player.velocity().z > 0.1);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut player = Player::new();
        player.reset();
        assert!(!player.jump());

        while !player.can_jump() {
            player.update(&wide_ground());
        }
        assert_eq!(player.motion_state(), MotionState::Grounded);
        assert!(player.jump());
        assert_eq!(player.velocity().y, crate::domain::tuning::PLAYER_JUMP_VELOCITY);
        assert!(!player.jump());
    }
}
