use crate::core::error::{check_extent, check_finite};
use crate::core::{PhysicsError, PhysicsResult, Vec3};

use super::bounds::{BodyLike, Bounds};

/// Immovable box (the ground). Never mutated by the integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticBody {
    bounds: Bounds,
}

impl StaticBody {
    pub fn new(center: Vec3, width: f32, height: f32, depth: f32) -> PhysicsResult<Self> {
        check_finite("center.x", center.x)?;
        check_finite("center.y", center.y)?;
        check_finite("center.z", center.z)?;
        let width = check_extent("width", width)?;
        let height = check_extent("height", height)?;
        let depth = check_extent("depth", depth)?;

        Ok(Self { bounds: Bounds::from_center(center, width, height, depth) })
    }

    /// Wrap bounds supplied by the scene. Faces must be finite and ordered.
    pub fn from_bounds(bounds: Bounds) -> PhysicsResult<Self> {
        if !bounds.is_finite() {
            return Err(PhysicsError::NonFiniteValue { field: "bounds" });
        }
        check_extent("width", bounds.right - bounds.left)?;
        check_extent("height", bounds.top - bounds.bottom)?;
        check_extent("depth", bounds.front - bounds.back)?;
        Ok(Self { bounds })
    }

    pub fn top(&self) -> f32 {
        self.bounds.top
    }
}

impl BodyLike for StaticBody {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_body_bounds() {
        let ground = StaticBody::new(Vec3::new(0.0, -2.0, 0.0), 10.0, 0.5, 50.0).unwrap();
        let b = ground.bounds();
        assert_eq!(b.left, -5.0);
        assert_eq!(b.right, 5.0);
        assert_eq!(b.top, -1.75);
        assert_eq!(b.bottom, -2.25);
        assert_eq!(b.back, -25.0);
        assert_eq!(b.front, 25.0);
    }

    #[test]
    fn test_static_body_rejects_bad_input() {
        assert!(StaticBody::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0, 1.0, 1.0).is_err());
        assert!(StaticBody::new(Vec3::zero(), 1.0, 0.0, 1.0).is_err());

        let inverted = Bounds { left: 1.0, right: -1.0, bottom: 0.0, top: 1.0, back: 0.0, front: 1.0 };
        assert!(StaticBody::from_bounds(inverted).is_err());

        let open = Bounds { top: f32::INFINITY, ..inverted };
        assert_eq!(
            StaticBody::from_bounds(open).unwrap_err(),
            PhysicsError::NonFiniteValue { field: "bounds" }
        );
    }
}
