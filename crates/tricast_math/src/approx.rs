//! Tolerance-based comparison.
//!
//! `PartialEq` on the glam types compares bit-for-bit. Use this wherever two
//! values come out of different float paths and only need to agree closely.

use glam::Vec3;

pub trait ApproxEq {
    /// True if every component differs by at most `epsilon`.
    fn approx_eq(self, rhs: Self, epsilon: f32) -> bool;
}

impl ApproxEq for f32 {
    #[inline]
    fn approx_eq(self, rhs: Self, epsilon: f32) -> bool {
        (self - rhs).abs() <= epsilon
    }
}

impl ApproxEq for Vec3 {
    #[inline]
    fn approx_eq(self, rhs: Self, epsilon: f32) -> bool {
        self.x.approx_eq(rhs.x, epsilon)
            && self.y.approx_eq(rhs.y, epsilon)
            && self.z.approx_eq(rhs.z, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_approx_eq() {
        assert!(1.0f32.approx_eq(1.0 + 1e-6, 1e-5));
        assert!(!1.0f32.approx_eq(1.001, 1e-5));
        assert!(!f32::NAN.approx_eq(f32::NAN, 1.0));
    }

    #[test]
    fn test_vec3_approx_eq() {
        let a = Vec3::new(0.1 + 0.2, 1.0, -2.0);
        let b = Vec3::new(0.3, 1.0, -2.0);

        assert!(a.approx_eq(b, 1e-6));
        assert!(!a.approx_eq(Vec3::new(0.3, 1.0, -2.1), 1e-6));
    }
}
