//! Rotating cube. `d` rerolls the face colors (the disco effect),
//! `l` toggles lighting, Escape quits.

use std::error::Error;
use std::f32::consts::PI;

use cgmath::{Matrix4 as Mat4, Point3, Rad, Vector3 as Vec3};
use log::info;
use minifb::Key;
use rand::Rng;

use softrender::camera::Camera;
use softrender::renderer::Renderer;
use softrender::window::DemoWindow;
use softrender::{BLACK, FAR_PLANE, NEAR_PLANE, WINDOW_HEIGHT, WINDOW_WIDTH};

fn random_face_colors() -> [Vec3<f32>; 6] {
    let mut rng = rand::rng();
    std::array::from_fn(|_| {
        Vec3::new(
            rng.random_range(0.2..1.0),
            rng.random_range(0.2..1.0),
            rng.random_range(0.2..1.0),
        )
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut camera = Camera::new(
        NEAR_PLANE,
        FAR_PLANE,
        WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
        Rad(std::f32::consts::FRAC_PI_4),
    );
    camera.set_position(Point3::new(0.0, 1.5, 5.0));

    let mut renderer = Renderer::new(camera, WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut window = DemoWindow::new("cube", WINDOW_WIDTH, WINDOW_HEIGHT)?;

    let face_colors: [Vec3<f32>; 6] = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
    ];
    let mut cube = softrender::mesh::cube(1.0, &face_colors);

    let mut angle = 0.0f32;
    while window.is_running() {
        if window.key_pressed(Key::D) {
            cube = softrender::mesh::cube(1.0, &random_face_colors());
            info!("rerolled face colors");
        }
        if window.key_pressed(Key::L) {
            renderer.lighting = !renderer.lighting;
            info!("lighting {}", if renderer.lighting { "on" } else { "off" });
        }

        angle += PI / 180.0;
        if angle >= 2.0 * PI {
            angle -= 2.0 * PI;
        }
        let model = Mat4::from_angle_y(Rad(angle)) * Mat4::from_angle_x(Rad(angle * 0.7));

        renderer.clear(BLACK);
        renderer.draw_triangles(&cube, &model);
        window.present(&renderer.framebuffer)?;
    }

    Ok(())
}
