//! Quaternion rotations.
//!
//! All consumers expect unit quaternions. The type itself does not enforce
//! the norm; interpolation renormalizes its result and callers composing
//! many rotations should renormalize periodically.

use std::ops::Mul;

use super::vec3::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quat {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Build a rotation of `angle` radians around `axis`.
    ///
    /// The axis is normalized internally, so any non-zero vector works.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalize();
        let half = angle * 0.5;
        let s = half.sin();
        Self::new(half.cos(), axis.x * s, axis.y * s, axis.z * s)
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn magnitude(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Returns the quaternion scaled to unit norm.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude < super::EPSILON {
            return Self::IDENTITY;
        }
        Self::new(
            self.w / magnitude,
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
        )
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// If the inputs point into opposite hemispheres, `b` is negated first
    /// (both signs represent the same rotation). The dot product is clamped
    /// before `acos`, and nearly-parallel inputs fall back to normalized
    /// linear interpolation to avoid dividing by `sin(theta) ~ 0`.
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        let mut b = b;
        let mut dot = a.dot(b);
        if dot < 0.0 {
            b = Self::new(-b.w, -b.x, -b.y, -b.z);
            dot = -dot;
        }

        if dot > 0.9995 {
            let r = Self::new(
                a.w + t * (b.w - a.w),
                a.x + t * (b.x - a.x),
                a.y + t * (b.y - a.y),
                a.z + t * (b.z - a.z),
            );
            return r.normalize();
        }

        let theta_0 = dot.clamp(-1.0, 1.0).acos();
        let theta = theta_0 * t;
        let sin_theta_0 = theta_0.sin();
        let s0 = theta.cos() - dot * theta.sin() / sin_theta_0;
        let s1 = theta.sin() / sin_theta_0;

        Self::new(
            a.w * s0 + b.w * s1,
            a.x * s0 + b.x * s1,
            a.y * s0 + b.y * s1,
            a.z * s0 + b.z * s1,
        )
    }

    /// Rotate a vector by this quaternion.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        // v' = v + 2 * q_vec x (q_vec x v + w * v)
        let u = Vec3::new(self.x, self.y, self.z);
        let c = u.cross(v) + v * self.w;
        v + u.cross(c) * 2.0
    }
}

/// Hamilton product. `a * b` applies `b`'s rotation first, then `a`'s.
impl Mul<Quat> for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}
