//! Physics error handling
//!
//! The arithmetic itself never fails. Errors come from bad construction input
//! (extents, non-finite numbers, config JSON) and from driving a simulation
//! that has no ground yet.

use thiserror::Error;

pub type PhysicsResult<T> = Result<T, PhysicsError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("{axis} extent must be positive and finite, got {value}")]
    InvalidExtent { axis: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("no ground body set, frame skipped")]
    MissingGround,

    #[error("unknown body id {0}")]
    UnknownBody(u32),

    #[error("invalid config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PhysicsError {
    fn from(e: serde_json::Error) -> Self {
        PhysicsError::Config(e.to_string())
    }
}

/// Reject zero, negative and non-finite extents.
pub(crate) fn check_extent(axis: &'static str, value: f32) -> PhysicsResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PhysicsError::InvalidExtent { axis, value })
    }
}

pub(crate) fn check_finite(field: &'static str, value: f32) -> PhysicsResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::NonFiniteValue { field })
    }
}
