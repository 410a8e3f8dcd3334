//! Car-local frames.
//!
//! An orientation is a 3x3 matrix whose columns are the car's forward, right
//! and up axes expressed in world coordinates.

use nalgebra::{Matrix3, Vector3};

/// Build the orientation matrix for a set of Unreal euler angles (radians).
#[rustfmt::skip]
pub fn orientation_matrix(pitch: f32, yaw: f32, roll: f32) -> Matrix3<f32> {
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    let (sr, cr) = roll.sin_cos();

    Matrix3::new(
        cp * cy, cy * sp * sr - cr * sy, -cr * cy * sp - sr * sy,
        cp * sy, sy * sp * sr + cr * cy, -cr * sy * sp + sr * cy,
        sp,      -cp * sr,               cp * cr,
    )
}

/// Express `point` relative to `origin` in the frame described by
/// `orientation`.
pub fn to_local(
    orientation: &Matrix3<f32>,
    origin: &Vector3<f32>,
    point: &Vector3<f32>,
) -> Vector3<f32> {
    orientation.transpose() * (point - origin)
}

/// The inverse of [`to_local`].
pub fn to_world(
    orientation: &Matrix3<f32>,
    origin: &Vector3<f32>,
    local: &Vector3<f32>,
) -> Vector3<f32> {
    origin + orientation * local
}

pub trait ExtendOrientation {
    /// A unit vector in the car's forward direction.
    fn forward(&self) -> Vector3<f32>;
    /// A unit vector in the car's right direction.
    fn right(&self) -> Vector3<f32>;
    /// A unit vector pointing out of the car's roof.
    fn up(&self) -> Vector3<f32>;
}

impl ExtendOrientation for Matrix3<f32> {
    fn forward(&self) -> Vector3<f32> {
        self.column(0).into_owned()
    }

    fn right(&self) -> Vector3<f32> {
        self.column(1).into_owned()
    }

    fn up(&self) -> Vector3<f32> {
        self.column(2).into_owned()
    }
}
