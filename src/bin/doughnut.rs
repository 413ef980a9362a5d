//! Lit torus above a checkerboard ground. `l` toggles lighting, `a` lowers
//! the eye and `A` raises it, Escape quits.

use std::error::Error;
use std::f32::consts::PI;

use cgmath::{Matrix4 as Mat4, Rad, SquareMatrix, Vector3 as Vec3};
use log::info;
use minifb::Key;

use softrender::camera::Camera;
use softrender::renderer::Renderer;
use softrender::window::DemoWindow;
use softrender::{BLACK, FAR_PLANE, NEAR_PLANE, WINDOW_HEIGHT, WINDOW_WIDTH};

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

    let mut window = DemoWindow::new("doughnut", WINDOW_WIDTH, WINDOW_HEIGHT)?;

    let torus = softrender::mesh::torus(0.3, 0.8, 50, 50, Vec3::new(1.0, 0.1, 0.1));
    let ground = softrender::mesh::checkerboard_ground(5.0, 0.5, -1.0);

    let mut eye_height = 1.5f32;
    let mut angle = 0.0f32;
    while window.is_running() {
        if window.key_pressed(Key::A) {
            // shift raises, plain lowers
            if window.shift_down() {
                eye_height += 0.1;
            } else {
                eye_height -= 0.1;
            }
        }
        if window.key_pressed(Key::L) {
            renderer.lighting = !renderer.lighting;
            info!("lighting {}", if renderer.lighting { "on" } else { "off" });
        }

        angle += PI / 180.0;
        renderer.camera.orbit(Rad(0.0), 8.0, eye_height);

        renderer.clear(BLACK);
        renderer.draw_triangles(&ground, &Mat4::identity());
        let spin = Mat4::from_angle_y(Rad(angle)) * Mat4::from_angle_x(Rad(0.4));
        renderer.draw_triangles(&torus, &spin);
        window.present(&renderer.framebuffer)?;
    }

    Ok(())
}
