use crate::matrix::Matrix;
use glam::Vec3;
use std::fmt;
use thiserror::Error;

/// Axis of the view basis that could not be normalized.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Forward,
    Right,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Forward => write!(f, "forward"),
            Axis::Right => write!(f, "right"),
        }
    }
}

/// Degenerate look-at geometry: `eye` coincides with `target`, or `up` is
/// parallel to the view direction (or zero).
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("cannot normalize the {axis} axis of the view basis")]
pub struct InvalidGeometry {
    pub axis: Axis,
}

/// Build the world-to-eye view matrix for a camera at `eye` looking at
/// `target`, with `up` fixing the roll.
///
/// The rotation rows are the orthonormal right-handed basis
/// `(right, up', back)` where `back` points from `target` toward `eye`, and
/// the fourth column carries the translation `-basis · eye`, so the matrix is
/// the inverse of the camera's world transform without a separate inversion
/// step. `eye` maps to the origin and points toward `target` land at negative
/// third coordinate.
///
/// `up` does not need to be unit length.
///
/// # Errors
///
/// Returns [`InvalidGeometry`] when `eye - target` or `cross(up, back)` has
/// zero length, naming the axis that degenerated. No NaN-carrying matrix is
/// ever returned for such inputs.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Matrix, InvalidGeometry> {
    let back = eye - target;
    if back.length_squared() == 0.0 {
        return Err(InvalidGeometry { axis: Axis::Forward });
    }
    let f = back.normalize();

    let r = up.cross(f);
    if r.length_squared() == 0.0 {
        return Err(InvalidGeometry { axis: Axis::Right });
    }
    let r = r.normalize();

    let u = f.cross(r);

    Ok(Matrix::from_rows([
        [r.x, r.y, r.z, -r.dot(eye)],
        [u.x, u.y, u.z, -u.dot(eye)],
        [f.x, f.y, f.z, -f.dot(eye)],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}
