//! Views a converted `.model` file rotating in a window. Takes either the
//! model path or a JSON scene config. `p` saves a frame as PNG, `o` saves
//! the depth buffer, `l` toggles lighting, Escape quits.

use std::error::Error;
use std::f32::consts::PI;
use std::path::Path;
use std::process;

use cgmath::{Matrix4 as Mat4, Point3, Rad};
use log::info;
use minifb::Key;

use softrender::camera::Camera;
use softrender::config::{self, SceneConfig};
use softrender::model::IndexedModel;
use softrender::renderer::Renderer;
use softrender::window::DemoWindow;
use softrender::{BLACK, FAR_PLANE, NEAR_PLANE, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: viewer <scene.json | model.model>");
        process::exit(2);
    }

    if let Err(e) = run(Path::new(&args[1])) {
        eprintln!("viewer: {e}");
        process::exit(1);
    }
}

fn load(path: &Path) -> Result<(SceneConfig, IndexedModel), Box<dyn Error>> {
    let scene = if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
        config::load_scene(path)?
    } else {
        SceneConfig {
            model: path.to_string_lossy().into_owned(),
            camera: Default::default(),
            ssaa: 1,
        }
    };
    let model = IndexedModel::load(Path::new(&scene.model))?;
    Ok((scene, model))
}

fn run(path: &Path) -> Result<(), Box<dyn Error>> {
    let (scene, model) = load(path)?;
    info!(
        "loaded {}: {} vertices, {} indices",
        scene.model,
        model.vertices.len(),
        model.indices.len()
    );
    let triangles = softrender::mesh::model_triangles(&model);

    let render_w = WINDOW_WIDTH * scene.ssaa;
    let render_h = WINDOW_HEIGHT * scene.ssaa;
    let mut camera = Camera::new(
        NEAR_PLANE,
        FAR_PLANE,
        WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
        Rad(std::f32::consts::FRAC_PI_4),
    );
    camera.set_position(Point3::from(scene.camera.position));
    camera.target = Point3::from(scene.camera.target);

    let mut renderer = Renderer::new(camera, render_w, render_h);
    let mut window = DemoWindow::new("viewer", WINDOW_WIDTH, WINDOW_HEIGHT)?;

    let mut angle = 0.0f32;
    let mut frame = 0u32;
    while window.is_running() {
        if window.key_pressed(Key::L) {
            renderer.lighting = !renderer.lighting;
        }

        angle += PI / 120.0;
        renderer.clear(BLACK);
        renderer.draw_triangles(&triangles, &Mat4::from_angle_y(Rad(angle)));

        let resolved = if scene.ssaa > 1 {
            renderer.framebuffer.ssaa(scene.ssaa)
        } else {
            renderer.framebuffer.clone()
        };

        if window.key_pressed(Key::P) {
            let path = format!("frame_{frame:03}.png");
            resolved.save_as_image(&path)?;
            info!("saved {path}");
        }
        if window.key_pressed(Key::O) {
            let path = format!("depth_{frame:03}.png");
            // the buffer holds depth mapped to [0, 1]
            renderer.framebuffer.save_depth_as_image(&path, 0.0, 1.0)?;
            info!("saved {path}");
        }

        window.present(&resolved)?;
        frame += 1;
    }

    Ok(())
}
