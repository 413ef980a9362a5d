//! The classic first program: one triangle with interpolated vertex colors.

use std::error::Error;

use cgmath::{Matrix4 as Mat4, Point3, Rad, SquareMatrix, Vector3 as Vec3};

use softrender::camera::Camera;
use softrender::renderer::Renderer;
use softrender::vertex::{ColoredVertex, Triangle};
use softrender::window::DemoWindow;
use softrender::{BLACK, FAR_PLANE, NEAR_PLANE, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut camera = Camera::new(
        NEAR_PLANE,
        FAR_PLANE,
        WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
        Rad(std::f32::consts::FRAC_PI_4),
    );
    camera.set_position(Point3::new(0.0, 0.0, 3.0));

    let mut renderer = Renderer::new(camera, WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut window = DemoWindow::new("triangle", WINDOW_WIDTH, WINDOW_HEIGHT)?;

    let vert = |x: f32, y: f32, color: Vec3<f32>| ColoredVertex {
        pos: Vec3::new(x, y, 0.0),
        color,
        normal: Vec3::unit_z(),
    };
    let triangle = Triangle::new(
        vert(-1.0, -1.0, Vec3::new(1.0, 0.0, 0.0)),
        vert(1.0, -1.0, Vec3::new(0.0, 1.0, 0.0)),
        vert(0.0, 1.0, Vec3::new(0.0, 0.0, 1.0)),
    );

    while window.is_running() {
        renderer.clear(BLACK);
        renderer.draw_triangles(&[triangle], &Mat4::identity());
        window.present(&renderer.framebuffer)?;
    }

    Ok(())
}
