//! Cube over a translucent ground with a planar shadow and a mirrored
//! reflection, lit by an orbiting point light. `l` toggles lighting,
//! Escape quits.

use std::error::Error;
use std::f32::consts::PI;

use cgmath::{EuclideanSpace, InnerSpace, Matrix4 as Mat4, Point3, Rad, Vector3 as Vec3};
use log::info;
use minifb::Key;

use softrender::camera::Camera;
use softrender::renderer::{Renderer, reflection_matrix, shadow_matrix};
use softrender::vertex::Triangle;
use softrender::window::DemoWindow;
use softrender::{BLACK, FAR_PLANE, NEAR_PLANE, WINDOW_HEIGHT, WINDOW_WIDTH};

const GROUND_Y: f32 = 0.0;
const CUBE_HEIGHT: f32 = 1.2;

fn darkened(triangles: &[Triangle]) -> Vec<Triangle> {
    triangles
        .iter()
        .map(|t| {
            let mut t = *t;
            for v in t.vertices.iter_mut() {
                v.color = Vec3::new(0.08, 0.08, 0.08);
            }
            t
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let camera = Camera::new(
        NEAR_PLANE,
        FAR_PLANE,
        WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
        Rad(std::f32::consts::FRAC_PI_4),
    );
    let mut renderer = Renderer::new(camera, WINDOW_WIDTH, WINDOW_HEIGHT);
    renderer.lighting = true;

    let mut window = DemoWindow::new("shadow", WINDOW_WIDTH, WINDOW_HEIGHT)?;

    let cube = softrender::mesh::cube(
        0.75,
        &[
            Vec3::new(1.0, 0.2, 0.2),
            Vec3::new(0.2, 1.0, 0.2),
            Vec3::new(0.2, 0.2, 1.0),
            Vec3::new(1.0, 1.0, 0.2),
            Vec3::new(1.0, 0.2, 1.0),
            Vec3::new(0.2, 1.0, 1.0),
        ],
    );
    let shadow_caster = darkened(&cube);
    let ground = softrender::mesh::checkerboard_ground(4.0, 0.5, GROUND_Y);

    let mut angle = 0.0f32;
    let mut light_angle = 0.0f32;
    while window.is_running() {
        if window.key_pressed(Key::L) {
            renderer.lighting = !renderer.lighting;
            info!("lighting {}", if renderer.lighting { "on" } else { "off" });
        }

        angle += PI / 360.0;
        light_angle += PI / 180.0;
        let light_pos = Point3::new(5.0 * light_angle.cos(), 5.0, 5.0 * light_angle.sin());
        renderer.light.direction =
            (Vec3::new(0.0, CUBE_HEIGHT, 0.0) - light_pos.to_vec()).normalize();
        renderer.camera.orbit(Rad(0.0), 8.0, 2.5);

        let model = Mat4::from_translation(Vec3::new(0.0, CUBE_HEIGHT, 0.0))
            * Mat4::from_angle_y(Rad(angle));

        renderer.clear(BLACK);

        // mirror image below the ground, covered next by the translucent ground
        renderer.draw_triangles(&cube, &(reflection_matrix(GROUND_Y) * model));

        renderer.alpha = 0.7;
        renderer.draw_triangles(&ground, &Mat4::identity());
        renderer.alpha = 1.0;

        // flattened silhouette, nudged above the ground so it wins the depth test
        let flatten = shadow_matrix(light_pos, GROUND_Y + 0.01);
        let lighting = renderer.lighting;
        renderer.lighting = false;
        renderer.cull = false;
        renderer.alpha = 0.5;
        renderer.draw_triangles(&shadow_caster, &(flatten * model));
        renderer.alpha = 1.0;
        renderer.cull = true;
        renderer.lighting = lighting;

        renderer.draw_triangles(&cube, &model);
        window.present(&renderer.framebuffer)?;
    }

    Ok(())
}
