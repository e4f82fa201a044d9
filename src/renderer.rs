//! Wireframe rendering pipeline.
//!
//! One configurable entry point drives every variant: per edge, both
//! endpoints go through model -> view -> projection, the perspective divide,
//! and the NDC-to-screen mapping; the edge's model-space direction is shaded
//! against the light set; and the canvas draws an anti-aliased line whose
//! thickness scales with the shading intensity (brighter edges render
//! thicker as well as denser, which reads well in single-channel output).
//!
//! There are no recoverable errors here. A degenerate projection that zeroes
//! every `w` collapses all edges to points and yields a blank frame; index
//! ranges are the mesh builder's responsibility.

use crate::canvas::Canvas;
use crate::light;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;

/// Shading and viewport configuration for [`Renderer`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Ambient floor blended as `ambient + (1 - ambient) * shade`.
    pub ambient: f32,
    /// Darken edges by average projected depth. This is a stylistic distance
    /// cue, not a physical falloff law.
    pub attenuate_by_depth: bool,
    /// Strength `k` of the depth attenuation `1 / (1 + k * depth^2)`.
    pub attenuation_strength: f32,
    /// Lower bound on the final intensity so unlit edges stay visible.
    pub min_intensity: f32,
    /// Line thickness at full intensity, in pixels.
    pub line_thickness: f32,
    /// Only draw edges with at least one endpoint inside the inscribed
    /// circle of the canvas, masking the render into a circular frame.
    pub circular_viewport: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            attenuate_by_depth: false,
            attenuation_strength: 0.5,
            min_intensity: 0.15,
            line_thickness: 1.5,
            circular_viewport: false,
        }
    }
}

/// A projected vertex in screen space.
#[derive(Clone, Copy, Debug)]
struct ScreenPoint {
    x: f32,
    y: f32,
    depth: f32,
}

pub struct Renderer {
    options: RenderOptions,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Render the mesh's edges into the canvas.
    ///
    /// The model, view, and projection matrices and the light directions are
    /// supplied per call; the renderer holds no per-frame state. Lights are
    /// expected to be normalized directions (see [`crate::light`]).
    pub fn render(
        &self,
        canvas: &mut Canvas,
        mesh: &Mesh,
        model: &Mat4,
        view: &Mat4,
        projection: &Mat4,
        lights: &[Vec3],
    ) {
        let opts = &self.options;

        for edge in mesh.edges() {
            let world_a = *model * Vec4::from(mesh.vertices()[edge.a]);
            let world_b = *model * Vec4::from(mesh.vertices()[edge.b]);

            let a = project_to_screen(canvas, view, projection, world_a);
            let b = project_to_screen(canvas, view, projection, world_b);

            if opts.circular_viewport
                && !in_circular_viewport(canvas, a)
                && !in_circular_viewport(canvas, b)
            {
                continue;
            }

            // Shade from the model-space edge direction so lighting is
            // independent of the camera.
            let direction = (world_b.to_vec3() - world_a.to_vec3()).normalize();
            let shade = light::lambert_multi(direction, lights);

            let mut intensity = opts.ambient + (1.0 - opts.ambient) * shade;
            if opts.attenuate_by_depth {
                let depth = (a.depth + b.depth) * 0.5;
                intensity /= 1.0 + opts.attenuation_strength * depth * depth;
            }
            let intensity = intensity.max(opts.min_intensity);

            canvas.draw_line(a.x, a.y, b.x, b.y, opts.line_thickness * intensity);
        }
    }
}

/// Apply view and projection, perspective-divide, and map NDC to pixels.
///
/// The X axis maps `[-1, 1]` to `[0, width]`; Y is flipped because image
/// rows grow downward while NDC Y grows upward. When the clip-space `w` is
/// zero the divide is skipped, collapsing the point instead of producing
/// infinities.
fn project_to_screen(canvas: &Canvas, view: &Mat4, projection: &Mat4, world: Vec4) -> ScreenPoint {
    let ndc = (*projection * (*view * world)).perspective_divide();
    ScreenPoint {
        x: (ndc.x * 0.5 + 0.5) * canvas.width() as f32,
        y: (1.0 - (ndc.y * 0.5 + 0.5)) * canvas.height() as f32,
        depth: ndc.z,
    }
}

/// Accept a screen point within the circle inscribed in the canvas.
fn in_circular_viewport(canvas: &Canvas, p: ScreenPoint) -> bool {
    let cx = canvas.width() as f32 / 2.0;
    let cy = canvas.height() as f32 / 2.0;
    let radius = canvas.width().min(canvas.height()) as f32 / 2.0;
    let dx = p.x - cx;
    let dy = p.y - cy;
    dx * dx + dy * dy <= radius * radius
}
