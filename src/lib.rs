//! Software-rendered graphics demos: a CPU rasterization pipeline, an OBJ to
//! indexed-binary model converter, and Mandelbrot/Julia escape-time fractals.
//! The demo programs live in `src/bin`.

pub mod camera;
pub mod color;
pub mod config;
pub mod fractal;
pub mod framebuffer;
pub mod mesh;
pub mod model;
pub mod obj;
pub mod rasterizer;
pub mod renderer;
pub mod vertex;
pub mod window;

pub const WINDOW_WIDTH: usize = 1024;
pub const WINDOW_HEIGHT: usize = 768;

pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;

pub const NEAR_PLANE: f32 = 0.5;
pub const FAR_PLANE: f32 = 50.0;
