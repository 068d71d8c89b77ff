pub mod body;
pub mod body_system;
