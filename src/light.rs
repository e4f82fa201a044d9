//! Lambertian shading for wireframe edges.
//!
//! Lights are directional only: a light is a normalized direction vector and
//! every edge receives it at full strength regardless of position. Edge
//! directions are taken in model/world space, never view or screen space, so
//! shading does not change when the camera moves.

use crate::math::vec3::Vec3;

/// Lambert term for a single light: `max(0, dot(edge_dir, light_dir))`.
///
/// Both inputs are expected to be unit vectors; the result is the cosine of
/// the angle between them, clamped at zero.
pub fn lambert(edge_dir: Vec3, light_dir: Vec3) -> f32 {
    edge_dir.dot(light_dir).max(0.0)
}

/// Average Lambert term over a set of lights, clamped to 1.0.
///
/// The average rather than the sum, so adding lights changes the balance of
/// illumination instead of brightening every edge without bound. An empty
/// light set yields 0.
pub fn lambert_multi(edge_dir: Vec3, lights: &[Vec3]) -> f32 {
    if lights.is_empty() {
        return 0.0;
    }
    let total: f32 = lights.iter().map(|&light| lambert(edge_dir, light)).sum();
    (total / lights.len() as f32).min(1.0)
}
