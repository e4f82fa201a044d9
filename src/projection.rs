//! Perspective projection parameters.
//!
//! The [`Frustum`] struct is the single source of truth for the six viewing
//! volume bounds. It can be built directly from asymmetric plane positions
//! or from a vertical field of view, and generates the projection matrix.

use crate::math::mat4::Mat4;

/// Viewing frustum bounds, measured at the near plane.
///
/// Equal `left`/`right`, `bottom`/`top`, or `near`/`far` pairs are a
/// precondition violation: the generated matrix divides by their
/// differences and will contain non-finite values.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
}

impl Frustum {
    /// Creates a frustum from explicit, possibly asymmetric plane positions.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Creates a symmetric frustum from a vertical field of view in radians.
    pub fn symmetric(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let top = near * (fov_y / 2.0).tan();
        let right = top * aspect_ratio;
        Self::new(-right, right, -top, top, near, far)
    }

    /// Generates the perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::frustum(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}
