//! Player-related modules
//! Contains the body physics and the voxel raycast used for aiming.

pub mod physics;
pub mod raycast;

// Re-export commonly used types
pub use physics::{Player, ThrustInput};
pub use raycast::{RayHit, raycast};
