//! Construction of world-to-eye view matrices and their flattening into the
//! column-major float buffers graphics pipelines consume.

pub mod matrix;
pub mod view;

pub use glam::Vec3;
pub use matrix::{FlatMatrix, Matrix};
pub use view::{look_at, Axis, InvalidGeometry};
