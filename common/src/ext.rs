use nalgebra::Vector3;

pub trait ExtendF32 {
    /// Like `signum`, but zero stays zero.
    fn sign(self) -> Self;
}

impl ExtendF32 for f32 {
    fn sign(self) -> Self {
        if self == 0.0 {
            0.0
        } else {
            self.signum()
        }
    }
}

pub trait ExtendVector3 {
    /// Projects onto the ground plane (z = 0).
    fn flat(&self) -> Vector3<f32>;
    /// Like `normalize`, except a zero vector comes back unchanged instead of
    /// turning into NaN.
    fn normalize_or_zero(&self) -> Vector3<f32>;
    /// The unsigned angle between two vectors, or zero if either is zero.
    fn angle_between(&self, other: &Vector3<f32>) -> f32;
}

impl ExtendVector3 for Vector3<f32> {
    fn flat(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, 0.0)
    }

    fn normalize_or_zero(&self) -> Vector3<f32> {
        let norm = self.norm();
        if norm == 0.0 {
            *self
        } else {
            self / norm
        }
    }

    fn angle_between(&self, other: &Vector3<f32>) -> f32 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        let cos = self.dot(other) / denom;
        cos.max(-1.0).min(1.0).acos()
    }
}
