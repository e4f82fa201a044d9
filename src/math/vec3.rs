//! 3D vector type with spherical-coordinate conversion and interpolation.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::EPSILON;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Spherical coordinates with the polar axis along +Y.
///
/// Kept as a separate value type rather than cached fields on [`Vec3`] so a
/// stale Cartesian/spherical pair is unrepresentable. Convert explicitly in
/// either direction.
///
/// - `r` - radial distance
/// - `theta` - inclination from the +Y axis, in `[0, pi]`
/// - `phi` - azimuth in the XZ plane from +X toward +Z
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub r: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub const fn new(r: f32, theta: f32, phi: f32) -> Self {
        Self { r, theta, phi }
    }

    /// Convert to Cartesian coordinates.
    pub fn to_vec3(self) -> Vec3 {
        let sin_theta = self.theta.sin();
        Vec3 {
            x: self.r * sin_theta * self.phi.cos(),
            y: self.r * self.theta.cos(),
            z: self.r * sin_theta * self.phi.sin(),
        }
    }
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Build a vector from spherical coordinates.
    pub fn from_spherical(r: f32, theta: f32, phi: f32) -> Self {
        Spherical::new(r, theta, phi).to_vec3()
    }

    /// Convert to spherical coordinates.
    ///
    /// A near-zero vector maps to all-zero spherical coordinates.
    pub fn to_spherical(self) -> Spherical {
        let r = self.magnitude();
        if r < EPSILON {
            return Spherical::new(0.0, 0.0, 0.0);
        }
        Spherical::new(r, (self.y / r).clamp(-1.0, 1.0).acos(), self.z.atan2(self.x))
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A vector shorter than the working epsilon is returned unchanged, so
    /// callers must not assume unit length on near-zero input.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude < EPSILON {
            return *self;
        }
        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Linearly interpolate between two vectors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Spherical linear interpolation between two directions.
    ///
    /// Interpolates at constant angular velocity along the arc between `a`
    /// and `b`. The dot product is clamped before `acos` so floating-point
    /// overshoot never produces NaN. Nearly-parallel and nearly-antiparallel
    /// inputs have `sin(theta_0)` too close to zero to divide by, so both
    /// fall back to linear interpolation rescaled to the interpolated
    /// magnitude. Exactly opposite directions have no unique arc; the
    /// fallback yields the (degenerate) chord midpoint there.
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        let len_a = a.magnitude();
        let len_b = b.magnitude();
        if len_a * len_b < EPSILON {
            return a.lerp(b, t);
        }

        let cos_theta = (a.dot(b) / (len_a * len_b)).clamp(-1.0, 1.0);
        if cos_theta.abs() > 0.9995 {
            let length = len_a + (len_b - len_a) * t;
            return a.lerp(b, t).normalize() * length;
        }

        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let s0 = ((1.0 - t) * theta).sin() / sin_theta;
        let s1 = (t * theta).sin() / sin_theta;
        a * s0 + b * s1
    }

    /// Evaluate a cubic Bezier curve at `t` in `[0, 1]`.
    pub fn bezier(p0: Self, p1: Self, p2: Self, p3: Self, t: f32) -> Self {
        let u = 1.0 - t;
        p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Scalar division of a vector.
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

/// Negation of a vector.
impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn normalize_produces_unit_length() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn normalize_is_idempotent_on_unit_vectors() {
        let v = Vec3::new(1.0, 2.0, -2.0).normalize();
        let n = v.normalize();
        assert_abs_diff_eq!(n.x, v.x, epsilon = 1e-5);
        assert_abs_diff_eq!(n.y, v.y, epsilon = 1e-5);
        assert_abs_diff_eq!(n.z, v.z, epsilon = 1e-5);
    }

    #[test]
    fn normalize_leaves_near_zero_vectors_alone() {
        let v = Vec3::new(1e-8, -1e-8, 0.0);
        assert_eq!(v.normalize(), v);
    }

    #[test]
    fn spherical_round_trip() {
        let v = Vec3::new(1.0, 2.0, -0.5);
        let back = v.to_spherical().to_vec3();
        assert_abs_diff_eq!(back.x, v.x, epsilon = 1e-5);
        assert_abs_diff_eq!(back.y, v.y, epsilon = 1e-5);
        assert_abs_diff_eq!(back.z, v.z, epsilon = 1e-5);
    }

    #[test]
    fn spherical_axes() {
        let up = Vec3::from_spherical(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(up.y, 1.0, epsilon = 1e-6);

        let x = Vec3::from_spherical(2.0, FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(x.x, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(x.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn slerp_endpoints() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let s0 = Vec3::slerp(a, b, 0.0);
        let s1 = Vec3::slerp(a, b, 1.0);
        assert_abs_diff_eq!(s0.x, a.x, epsilon = 1e-5);
        assert_abs_diff_eq!(s0.y, a.y, epsilon = 1e-5);
        assert_abs_diff_eq!(s1.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(s1.y, b.y, epsilon = 1e-5);
    }

    #[test]
    fn slerp_identical_inputs() {
        let a = Vec3::new(0.0, 0.0, 1.0);
        for t in [0.0, 0.25, 0.5, 1.0] {
            let s = Vec3::slerp(a, a, t);
            assert_abs_diff_eq!(s.z, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn slerp_midpoint_stays_on_arc() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 0.0, 1.0);
        let mid = Vec3::slerp(a, b, 0.5);
        assert_relative_eq!(mid.magnitude(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(mid.x, mid.z, epsilon = 1e-5);
    }

    #[test]
    fn slerp_clamps_dot_overshoot() {
        // Parallel vectors of different lengths can push the normalized dot
        // past 1.0 in f32.
        let a = Vec3::new(0.7071068, 0.7071068, 0.0);
        let b = a * 3.0;
        let s = Vec3::slerp(a, b, 0.5);
        assert!(s.x.is_finite() && s.y.is_finite() && s.z.is_finite());
    }

    #[test]
    fn slerp_antiparallel_stays_bounded() {
        // Opposite directions leave sin(theta_0) near zero; the scale
        // factors must not blow up.
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(-2.0, 0.0, 0.0);
        let s = Vec3::slerp(a, b, 0.5);
        assert!(s.x.is_finite() && s.y.is_finite() && s.z.is_finite());
        assert!(s.magnitude() <= 1.5 + 1e-5, "magnitude = {}", s.magnitude());

        // Exactly opposite unit vectors: the chord midpoint is the origin.
        let z = Vec3::slerp(a, Vec3::new(-1.0, 0.0, 0.0), 0.5);
        assert_abs_diff_eq!(z.magnitude(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn slerp_quarter_turn_angle() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let s = Vec3::slerp(a, b, 0.5);
        // Halfway along a 90 degree arc is 45 degrees from either end.
        assert_abs_diff_eq!(s.dot(a), (PI / 4.0).cos(), epsilon = 1e-5);
    }

    #[test]
    fn bezier_endpoints_and_symmetry() {
        let p0 = Vec3::new(-1.0, 0.0, 0.0);
        let p1 = Vec3::new(-1.0, 1.0, 0.0);
        let p2 = Vec3::new(1.0, 1.0, 0.0);
        let p3 = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(Vec3::bezier(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(Vec3::bezier(p0, p1, p2, p3, 1.0), p3);
        let mid = Vec3::bezier(p0, p1, p2, p3, 0.5);
        assert_abs_diff_eq!(mid.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(mid.y, 0.75, epsilon = 1e-6);
    }

    #[test]
    fn cross_is_perpendicular() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 1.0);
        let c = a.cross(b);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-5);
    }
}
