//! Escape-time fractals: Mandelbrot and Julia sets.
//!
//! Pure per-pixel iteration of z <- z^2 + c. Every sample is independent, so
//! the image is rendered row-parallel with rayon.

use rayon::prelude::*;

use crate::color::{Rgb, hsb_to_rgb};
use crate::framebuffer::FrameBuffer;

pub const MAX_ITERATIONS: u32 = 500;

/// Squared escape radius; once |z|^2 reaches this the orbit diverges.
const ESCAPE_RADIUS_SQ: f32 = 4.0;

/// Julia seed c = -0.7269 + 0.1889i.
pub const JULIA_SEED: (f32, f32) = (-0.7269, 0.1889);

/// Iterations before (x, y) as c escapes, starting from z = 0.
/// Returns `MAX_ITERATIONS` for points that never escape.
pub fn mandelbrot(x: f32, y: f32) -> u32 {
    iterate(0.0, 0.0, x, y)
}

/// Iterations before z0 = (zx, zy) escapes under the fixed Julia seed.
pub fn julia(zx: f32, zy: f32) -> u32 {
    iterate(zx, zy, JULIA_SEED.0, JULIA_SEED.1)
}

fn iterate(mut zx: f32, mut zy: f32, cx: f32, cy: f32) -> u32 {
    for n in 0..MAX_ITERATIONS {
        if zx * zx + zy * zy >= ESCAPE_RADIUS_SQ {
            return n;
        }
        let temp = zx * zx - zy * zy + cx;
        zy = 2.0 * zx * zy + cy;
        zx = temp;
    }
    MAX_ITERATIONS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalKind {
    Mandelbrot,
    Julia,
}

impl FractalKind {
    fn sample(self, x: f32, y: f32) -> u32 {
        match self {
            FractalKind::Mandelbrot => mandelbrot(x, y),
            FractalKind::Julia => julia(x, y),
        }
    }
}

/// Maps the pixel grid onto a rectangle of the complex plane.
#[derive(Debug, Clone, Copy)]
pub struct FractalView {
    pub center_x: f32,
    pub center_y: f32,
    /// Width of the viewed rectangle in plane units.
    pub span: f32,
}

impl Default for FractalView {
    fn default() -> Self {
        FractalView::for_kind(FractalKind::Mandelbrot)
    }
}

impl FractalView {
    /// Framing that fits the set on screen: the Mandelbrot set leans toward
    /// negative x, Julia orbits for the fixed seed center on the origin.
    pub fn for_kind(kind: FractalKind) -> Self {
        match kind {
            FractalKind::Mandelbrot => FractalView {
                center_x: -0.5,
                center_y: 0.0,
                span: 3.0,
            },
            FractalKind::Julia => FractalView {
                center_x: 0.0,
                center_y: 0.0,
                span: 3.2,
            },
        }
    }

    pub fn plane_coords(&self, px: usize, py: usize, width: usize, height: usize) -> (f32, f32) {
        let step = self.span / width as f32;
        let x = self.center_x + (px as f32 - width as f32 / 2.0) * step;
        let y = self.center_y + (py as f32 - height as f32 / 2.0) * step;
        (x, y)
    }

    /// Render the whole framebuffer. Escaped points get a hue proportional to
    /// the escape count, points inside the set stay black.
    pub fn render(&self, kind: FractalKind, fb: &mut FrameBuffer) {
        let width = fb.width;
        let height = fb.height;
        let view = *self;

        fb.data
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(py, row)| {
                for (px, pixel) in row.iter_mut().enumerate() {
                    let (x, y) = view.plane_coords(px, py, width, height);
                    *pixel = shade(kind.sample(x, y)).to_argb();
                }
            });
    }
}

/// Escape count to color: hue sweeps 0..360 over the iteration budget.
pub fn shade(n: u32) -> Rgb {
    if n >= MAX_ITERATIONS {
        Rgb::BLACK
    } else {
        hsb_to_rgb((n as f64 / MAX_ITERATIONS as f64) * 360.0, 1.0, 1.0)
    }
}
