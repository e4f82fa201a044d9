//! Demo driver: renders an animated wireframe scene to numbered PGM frames.
//!
//! Three meshes loop along cubic Bezier paths while spinning via quaternion
//! interpolation, lit by a single orbiting directional light. Frames land in
//! `frames/` as `frame_000.pgm` through `frame_119.pgm`.

use std::f32::consts::PI;
use std::fs;

use wirelight::prelude::*;

const WIDTH: u32 = 512;
const HEIGHT: u32 = 512;
const FRAME_COUNT: u32 = 120;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all("frames")?;

    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let renderer = Renderer::with_options(RenderOptions {
        attenuate_by_depth: true,
        ..RenderOptions::default()
    });

    let projection = Frustum::symmetric(PI / 3.0, WIDTH as f32 / HEIGHT as f32, 0.1, 100.0);
    let proj = projection.matrix();
    let view = Mat4::look_at(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO, Vec3::UP);

    let cube = Mesh::cube();
    let pyramid = Mesh::bipyramid();
    let ball = Mesh::soccer_ball();

    for frame in 0..FRAME_COUNT {
        // t runs 0..=1 so the last frame matches the first pose.
        let t = frame as f32 / (FRAME_COUNT - 1) as f32;
        let theta = 2.0 * PI * t;

        canvas.clear(0.0);

        // Light orbiting overhead.
        let lights = [Vec3::new(theta.cos(), 1.0, theta.sin()).normalize()];

        // Cube: left Bezier loop with a tumbling three-axis spin.
        let cube_pos = Vec3::bezier(
            Vec3::new(-1.6, -0.5, -5.0),
            Vec3::new(-1.6, 0.6, -5.0),
            Vec3::new(-0.8, 0.6, -5.0),
            Vec3::new(-1.6, -0.5, -5.0),
            t,
        );
        let spin = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), 1.5 * PI * t)
            * Quat::from_axis_angle(Vec3::UP, 4.0 * PI * t)
            * Quat::from_axis_angle(Vec3::RIGHT, 2.0 * PI * t);
        let cube_model = Mat4::translation(cube_pos) * Mat4::from_quat(spin.normalize());
        renderer.render(&mut canvas, &cube, &cube_model, &view, &proj, &lights);

        // Pyramid: right loop, rolling about X.
        let pyramid_pos = Vec3::bezier(
            Vec3::new(1.6, 0.6, -5.0),
            Vec3::new(1.6, -0.6, -5.0),
            Vec3::new(0.8, -0.6, -5.0),
            Vec3::new(1.6, 0.6, -5.0),
            t,
        );
        let pyramid_model = Mat4::translation(pyramid_pos)
            * Mat4::from_quat(Quat::from_axis_angle(Vec3::RIGHT, 2.0 * theta));
        renderer.render(&mut canvas, &pyramid, &pyramid_model, &view, &proj, &lights);

        // Soccer ball: sweeping arc across the middle with a smooth Y spin.
        let ball_pos = Vec3::bezier(
            Vec3::new(-1.2, 0.0, -5.0),
            Vec3::new(-1.2, 0.8, -5.0),
            Vec3::new(1.2, 0.8, -5.0),
            Vec3::new(-1.2, 0.0, -5.0),
            t,
        );
        let ball_model = Mat4::translation(ball_pos)
            * Mat4::from_quat(Quat::from_axis_angle(Vec3::UP, theta));
        renderer.render(&mut canvas, &ball, &ball_model, &view, &proj, &lights);

        // Center crosshair marking the light's orbit axis.
        let (cx, cy) = (WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0);
        canvas.draw_line(cx - 3.0, cy, cx + 3.0, cy, 1.0);
        canvas.draw_line(cx, cy - 3.0, cx, cy + 3.0, 1.0);

        let filename = format!("frames/frame_{frame:03}.pgm");
        canvas.save_pgm(&filename)?;
        println!("wrote {filename}");
    }

    Ok(())
}
