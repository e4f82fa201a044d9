//! A CPU wireframe renderer producing anti-aliased grayscale images.
//!
//! Meshes go through a model/view/projection transform, perspective divide,
//! and screen mapping; each edge is shaded with Lambertian lighting and drawn
//! as an anti-aliased line onto an accumulating float canvas, which exports
//! to ASCII PGM or PNG.
//!
//! # Quick Start
//!
//! ```ignore
//! use wirelight::prelude::*;
//!
//! let mut canvas = Canvas::new(640, 480);
//! let renderer = Renderer::new();
//! let model = Mat4::translation(Vec3::new(0.0, 0.0, -3.0));
//! let projection = Frustum::new(-1.0, 1.0, -0.75, 0.75, 1.0, 10.0).matrix();
//! renderer.render(
//!     &mut canvas,
//!     &Mesh::cube(),
//!     &model,
//!     &Mat4::identity(),
//!     &projection,
//!     &[Vec3::UP],
//! );
//! canvas.save_pgm("cube.pgm")?;
//! ```

pub mod canvas;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod renderer;

// Re-export commonly needed types at crate root for convenience
pub use canvas::{Canvas, ExportError};
pub use mesh::{Edge, Mesh};
pub use projection::Frustum;
pub use renderer::{RenderOptions, Renderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wirelight::prelude::*;
/// ```
pub mod prelude {
    // Canvas
    pub use crate::canvas::{Canvas, ExportError};

    // Lighting
    pub use crate::light::{lambert, lambert_multi};

    // Mesh
    pub use crate::mesh::{Edge, Mesh};

    // Projection
    pub use crate::projection::Frustum;

    // Renderer
    pub use crate::renderer::{RenderOptions, Renderer};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::quat::Quat;
    pub use crate::math::vec3::{Spherical, Vec3};
    pub use crate::math::vec4::Vec4;
}
