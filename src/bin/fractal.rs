//! Escape-time fractal viewer. `m` shows the Mandelbrot set, `j` the Julia
//! set, `s` saves the current image as PNG, Escape quits.

use std::error::Error;

use log::info;
use minifb::Key;

use softrender::fractal::{FractalKind, FractalView};
use softrender::framebuffer::FrameBuffer;
use softrender::window::DemoWindow;
use softrender::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut window = DemoWindow::new("fractal", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut fb = FrameBuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut kind = FractalKind::Mandelbrot;
    FractalView::for_kind(kind).render(kind, &mut fb);

    while window.is_running() {
        let wanted = if window.key_pressed(Key::J) {
            Some(FractalKind::Julia)
        } else if window.key_pressed(Key::M) {
            Some(FractalKind::Mandelbrot)
        } else {
            None
        };

        if let Some(wanted) = wanted {
            if wanted != kind {
                kind = wanted;
                info!("rendering {kind:?}");
                FractalView::for_kind(kind).render(kind, &mut fb);
            }
        }

        if window.key_pressed(Key::S) {
            let path = format!("{kind:?}.png").to_lowercase();
            fb.save_as_image(&path)?;
            info!("saved {path}");
        }

        window.present(&fb)?;
    }

    Ok(())
}
