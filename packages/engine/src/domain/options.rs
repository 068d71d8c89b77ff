use serde::{Deserialize, Serialize};

use crate::core::{PhysicsResult, Vec3};

/// Construction options for a dynamic box.
///
/// `color` only matters to the renderer and is carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyOptions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub velocity: Vec3,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub z_acceleration: bool,
}

impl BodyOptions {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
            color: None,
            velocity: Vec3::zero(),
            position: Vec3::zero(),
            z_acceleration: false,
        }
    }

    pub fn from_json(json: &str) -> PhysicsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_z_acceleration(mut self, on: bool) -> Self {
        self.z_acceleration = on;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
