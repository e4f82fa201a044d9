//! Vector, quaternion, and matrix math for the wireframe pipeline.
//!
//! All types are plain `Copy` values and every operation returns a new
//! value; nothing here holds hidden state or mutates through out-pointers.

pub mod mat4;
pub mod quat;
pub mod vec3;
pub mod vec4;

/// Length threshold below which vectors are treated as zero.
pub const EPSILON: f32 = 1e-6;
