//! 4x4 transformation matrix.
//!
//! # Convention
//! - Storage is `data[row][col]`
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Right-handed coordinates, camera looking down -Z, OpenGL-style frustum
//!
//! Every constructor returns a new value; nothing is built in place.

use std::ops::Mul;

use super::quat::Quat;
use super::vec3::Vec3;
use super::vec4::Vec4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    pub fn translation(v: Vec3) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, v.x],
            [0.0, 1.0, 0.0, v.y],
            [0.0, 0.0, 1.0, v.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(v: Vec3) -> Self {
        Mat4::new([
            [v.x, 0.0, 0.0, 0.0],
            [0.0, v.y, 0.0, 0.0],
            [0.0, 0.0, v.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix from Euler angles (radians).
    ///
    /// Applies Z roll first, then Y yaw, then X pitch:
    /// `rotation_x(a.x) * rotation_y(a.y) * rotation_z(a.z)`.
    pub fn from_euler(angles: Vec3) -> Self {
        Mat4::rotation_x(angles.x) * Mat4::rotation_y(angles.y) * Mat4::rotation_z(angles.z)
    }

    /// Creates a rotation matrix from a unit quaternion.
    pub fn from_quat(q: Quat) -> Self {
        let (xx, yy, zz) = (q.x * q.x, q.y * q.y, q.z * q.z);
        let (xy, xz, yz) = (q.x * q.y, q.x * q.z, q.y * q.z);
        let (wx, wy, wz) = (q.w * q.x, q.w * q.y, q.w * q.z);

        Mat4::new([
            [
                1.0 - 2.0 * (yy + zz),
                2.0 * (xy - wz),
                2.0 * (xz + wy),
                0.0,
            ],
            [
                2.0 * (xy + wz),
                1.0 - 2.0 * (xx + zz),
                2.0 * (yz - wx),
                0.0,
            ],
            [
                2.0 * (xz - wy),
                2.0 * (yz + wx),
                1.0 - 2.0 * (xx + yy),
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a perspective projection matrix from six frustum planes.
    ///
    /// The planes are measured at the near plane, OpenGL-style: visible
    /// geometry maps to NDC `[-1, 1]` on every axis and the camera looks
    /// down -Z.
    ///
    /// Degenerate parameters (`left == right`, `bottom == top`,
    /// `near == far`) are a precondition violation; the resulting matrix
    /// contains non-finite values and the caller gets garbage, not a panic.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Mat4::new([
            [
                2.0 * near / (right - left),
                0.0,
                (right + left) / (right - left),
                0.0,
            ],
            [
                0.0,
                2.0 * near / (top - bottom),
                (top + bottom) / (top - bottom),
                0.0,
            ],
            [
                0.0,
                0.0,
                -(far + near) / (far - near),
                -2.0 * far * near / (far - near),
            ],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Creates a symmetric perspective matrix from a vertical field of view.
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let top = near * (fov_y / 2.0).tan();
        let right = top * aspect_ratio;
        Mat4::frustum(-right, right, -top, top, near, far)
    }

    /// Creates a right-handed view matrix.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - The up direction of the camera.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let side = forward.cross(up).normalize();
        let up = side.cross(forward);

        Mat4::new([
            [side.x, side.y, side.z, -side.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Transform the point `(x, y, z, 1)` and perform the perspective divide.
    ///
    /// If the transformed `w` is zero the divide is skipped and the undivided
    /// coordinates are returned.
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::from(p)).perspective_divide()
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        Vec4::new(
            self.data[0][0] * v.x
                + self.data[0][1] * v.y
                + self.data[0][2] * v.z
                + self.data[0][3] * v.w,
            self.data[1][0] * v.x
                + self.data[1][1] * v.y
                + self.data[1][2] * v.z
                + self.data[1][3] * v.w,
            self.data[2][0] * v.x
                + self.data[2][1] * v.y
                + self.data[2][2] * v.z
                + self.data[2][3] * v.w,
            self.data[3][0] * v.x
                + self.data[3][1] * v.y
                + self.data[3][2] * v.z
                + self.data[3][3] * v.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_mat_eq(a: Mat4, b: Mat4, epsilon: f32) {
        for row in 0..4 {
            for col in 0..4 {
                assert_abs_diff_eq!(a.get(row, col), b.get(row, col), epsilon = epsilon);
            }
        }
    }

    #[test]
    fn identity_times_identity() {
        assert_eq!(Mat4::identity() * Mat4::identity(), Mat4::identity());
    }

    #[test]
    fn translation_moves_points() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let p = m * Vec4::point(1.0, 1.0, 1.0);
        assert_eq!((p.x, p.y, p.z, p.w), (2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn translation_ignores_directions() {
        let m = Mat4::translation(Vec3::new(5.0, 5.0, 5.0));
        let d = m * Vec4::direction(1.0, 0.0, 0.0);
        assert_eq!((d.x, d.y, d.z, d.w), (1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn euler_zero_is_identity() {
        assert_mat_eq(Mat4::from_euler(Vec3::ZERO), Mat4::identity(), 1e-6);
    }

    #[test]
    fn quat_identity_is_identity() {
        assert_mat_eq(Mat4::from_quat(Quat::IDENTITY), Mat4::identity(), 1e-6);
    }

    #[test]
    fn euler_and_quat_agree_per_axis() {
        let angle = 0.8;
        assert_mat_eq(
            Mat4::from_euler(Vec3::new(angle, 0.0, 0.0)),
            Mat4::from_quat(Quat::from_axis_angle(Vec3::RIGHT, angle)),
            1e-5,
        );
        assert_mat_eq(
            Mat4::from_euler(Vec3::new(0.0, angle, 0.0)),
            Mat4::from_quat(Quat::from_axis_angle(Vec3::UP, angle)),
            1e-5,
        );
        assert_mat_eq(
            Mat4::from_euler(Vec3::new(0.0, 0.0, angle)),
            Mat4::from_quat(Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), angle)),
            1e-5,
        );
    }

    #[test]
    fn rotation_matches_quaternion_rotate() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 1.1);
        let m = Mat4::from_quat(q);
        let v = Vec3::new(0.3, -0.7, 0.2);
        let by_matrix = (m * Vec4::from_vec3(v, 0.0)).to_vec3();
        let by_quat = q.rotate(v);
        assert_abs_diff_eq!(by_matrix.x, by_quat.x, epsilon = 1e-5);
        assert_abs_diff_eq!(by_matrix.y, by_quat.y, epsilon = 1e-5);
        assert_abs_diff_eq!(by_matrix.z, by_quat.z, epsilon = 1e-5);
    }

    #[test]
    fn rotation_y_quarter_turn() {
        let m = Mat4::rotation_y(FRAC_PI_2);
        let v = (m * Vec4::direction(1.0, 0.0, 0.0)).to_vec3();
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn frustum_maps_forward_axis_inside_ndc() {
        let (near, far) = (1.0, 10.0);
        let proj = Mat4::frustum(-1.0, 1.0, -0.75, 0.75, near, far);
        let mid = Vec3::new(0.0, 0.0, -(near + far) / 2.0);
        let ndc = proj.project_point(mid);
        assert!(ndc.z >= -1.0 && ndc.z <= 1.0, "ndc.z = {}", ndc.z);
        assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn frustum_near_far_map_to_ndc_bounds() {
        let proj = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        assert_abs_diff_eq!(
            proj.project_point(Vec3::new(0.0, 0.0, -1.0)).z,
            -1.0,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            proj.project_point(Vec3::new(0.0, 0.0, -10.0)).z,
            1.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn perspective_matches_symmetric_frustum() {
        let fov_y = FRAC_PI_2;
        let near = 1.0;
        let top = near * (fov_y / 2.0).tan();
        assert_mat_eq(
            Mat4::perspective(fov_y, 1.0, near, 10.0),
            Mat4::frustum(-top, top, -top, top, near, 10.0),
            1e-6,
        );
    }

    #[test]
    fn project_point_skips_zero_w() {
        // A projective matrix whose bottom row annihilates this point.
        let m = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        let p = m.project_point(Vec3::new(2.0, 3.0, 0.0));
        assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
    }

    #[test]
    fn look_at_from_origin_down_neg_z_is_identity() {
        let view = Mat4::look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::UP);
        assert_mat_eq(view, Mat4::identity(), 1e-6);
    }

    #[test]
    fn look_at_translates_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 6.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
        let p = view * Vec4::from(eye);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-5);
    }
}
