//! Geometry module - vertex angles between landmark rays
//!
//! Re-exports only. All logic in submodules.

mod angles;

pub use angles::{angle_2d, angle_3d, angle_at_vertex};
