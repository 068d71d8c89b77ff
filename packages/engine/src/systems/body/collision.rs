use serde::{Deserialize, Serialize};

use super::bounds::Bounds;

/// Shrinks the effective collision box relative to the nominal one.
///
/// `inset_x` is taken off both the left and right faces. `inset_y` is added to
/// the bottom before the look-ahead test, so the body may sink that far into
/// the ground before it registers a hit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollisionProfile {
    pub inset_x: f32,
    pub inset_y: f32,
}

impl CollisionProfile {
    /// Exact nominal box
    pub const BOX: Self = Self { inset_x: 0.0, inset_y: 0.0 };
    /// Forgiving box for the player-controlled body
    pub const PLAYER: Self = Self { inset_x: 0.25, inset_y: 0.5 };

    pub const fn new(inset_x: f32, inset_y: f32) -> Self {
        Self { inset_x, inset_y }
    }

    /// Closed-interval overlap on all three axes.
    ///
    /// x and z use the bounds as given. y looks one step ahead: the body's
    /// bottom is moved by `velocity_y` before comparing against `other.top`.
    #[inline]
    pub fn overlaps(&self, own: &Bounds, velocity_y: f32, other: &Bounds) -> bool {
        let x_collision =
            own.right - self.inset_x >= other.left && own.left + self.inset_x <= other.right;
        let y_collision =
            own.bottom + self.inset_y + velocity_y <= other.top && own.top >= other.bottom;
        let z_collision = own.front >= other.back && own.back <= other.front;

        x_collision && y_collision && z_collision
    }
}

impl Default for CollisionProfile {
    fn default() -> Self {
        Self::BOX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;

    fn ground() -> Bounds {
        Bounds { left: -10.0, right: 10.0, bottom: -0.5, top: 0.0, back: -10.0, front: 10.0 }
    }

    #[test]
    fn test_tangent_faces_count_as_overlap() {
        let own = Bounds { left: 10.0, right: 11.0, bottom: 0.0, top: 1.0, back: 0.0, front: 1.0 };
        assert!(CollisionProfile::BOX.overlaps(&own, 0.0, &ground()));
    }

    #[test]
    fn test_y_uses_next_bottom() {
        let own = Bounds::from_center(Vec3::new(0.0, 0.6, 0.0), 1.0, 1.0, 1.0);
        assert!(!CollisionProfile::BOX.overlaps(&own, 0.0, &ground()));
        assert!(CollisionProfile::BOX.overlaps(&own, -0.2, &ground()));
    }

    #[test]
    fn test_player_inset_narrows_x() {
        // right edge just past ground.left: a box hits, the player does not
        let own = Bounds::from_center(Vec3::new(-10.4, 0.0, 0.0), 1.2, 1.0, 1.0);
        assert!(CollisionProfile::BOX.overlaps(&own, 0.0, &ground()));
        assert!(!CollisionProfile::PLAYER.overlaps(&own, 0.0, &ground()));
    }

    #[test]
    fn test_player_inset_within_wide_ground() {
        let own = Bounds { left: -0.6, right: 0.6, bottom: -0.5, top: 0.5, back: -0.5, front: 0.5 };
        assert!(CollisionProfile::PLAYER.overlaps(&own, -0.01, &ground()));
    }

    #[test]
    fn test_player_inset_y_sinks_before_hit() {
        // bottom at 0.45: nominal box touches, the player's raised bottom does not
        let own = Bounds::from_center(Vec3::new(0.0, 0.95, 0.0), 1.0, 1.0, 1.0);
        assert!(CollisionProfile::BOX.overlaps(&own, -0.5, &ground()));
        assert!(!CollisionProfile::PLAYER.overlaps(&own, -0.5, &ground()));
    }

    #[test]
    fn test_z_separation() {
        let own = Bounds::from_center(Vec3::new(0.0, 0.0, 20.0), 1.0, 1.0, 1.0);
        assert!(!CollisionProfile::BOX.overlaps(&own, -1.0, &ground()));
    }
}
