use serde::{Deserialize, Serialize};

use crate::core::{PhysicsError, PhysicsResult};

/// Downward acceleration applied to `velocity.y` every frame (units/frame²)
pub const GRAVITY: f32 = -0.002;
/// Forward thrust added to `velocity.z` each frame when z-acceleration is on
pub const Z_ACCELERATION: f32 = 0.0003;
/// Share of vertical speed kept (and flipped) on a ground hit
pub const FRICTION: f32 = 0.5;
/// Upward velocity assigned by a jump
pub const PLAYER_JUMP_VELOCITY: f32 = 0.08;

/// Per-frame physics constants.
///
/// Bodies copy the values they need when spawned, so changing the tuning only
/// affects bodies created afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsTuning {
    pub gravity: f32,
    pub z_acceleration: f32,
    pub friction: f32,
    pub player_jump_velocity: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            z_acceleration: Z_ACCELERATION,
            friction: FRICTION,
            player_jump_velocity: PLAYER_JUMP_VELOCITY,
        }
    }
}

impl PhysicsTuning {
    /// Parse a tuning document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> PhysicsResult<Self> {
        let tuning: PhysicsTuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Reject non-finite values and friction outside [0, 1]
    pub fn validate(&self) -> PhysicsResult<()> {
        let fields = [
            ("gravity", self.gravity),
            ("zAcceleration", self.z_acceleration),
            ("friction", self.friction),
            ("playerJumpVelocity", self.player_jump_velocity),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PhysicsError::Config(format!("{name} must be finite")));
            }
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(PhysicsError::Config(format!(
                "friction must be within [0, 1], got {}",
                self.friction
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = PhysicsTuning::from_json(r#"{"gravity": -0.004}"#).unwrap();
        assert_eq!(tuning.gravity, -0.004);
        assert_eq!(tuning.z_acceleration, Z_ACCELERATION);
        assert_eq!(tuning.friction, FRICTION);
    }

    #[test]
    fn test_rejects_bad_friction() {
        let err = PhysicsTuning::from_json(r#"{"friction": 1.5}"#).unwrap_err();
        assert!(matches!(err, PhysicsError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(PhysicsTuning::from_json("{gravity").is_err());
    }

    #[test]
    fn test_json_roundtrip_uses_camel_case() {
        let json = PhysicsTuning::default().to_json();
        assert!(json.contains("zAcceleration"));
        assert!(json.contains("playerJumpVelocity"));
    }
}
