use crate::color::Rgb;

pub const DEPTH_CLEAR: f32 = f32::INFINITY;

/// CPU-side color + depth target. Pixels are 0xAARRGGBB, row-major from the
/// top-left corner, the same layout minifb presents.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
    pub depth: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            data: vec![0; width * height],
            depth: vec![DEPTH_CLEAR; width * height],
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.data.fill(color);
        self.depth.fill(DEPTH_CLEAR);
    }

    /// Depth-tested write; out-of-bounds coordinates are ignored.
    pub fn put_pixel(&mut self, x: usize, y: usize, color: u32, depth: f32) {
        if x < self.width && y < self.height {
            let idx = y * self.width + x;
            if depth < self.depth[idx] {
                self.data[idx] = color;
                self.depth[idx] = depth;
            }
        }
    }

    /// Depth-tested write mixing `color` over the stored pixel,
    /// alpha 1.0 being fully opaque.
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32, depth: f32, alpha: f32) {
        if x < self.width && y < self.height {
            let idx = y * self.width + x;
            if depth < self.depth[idx] {
                let src = Rgb::from_argb(color);
                let dst = Rgb::from_argb(self.data[idx]);
                let mix = |s: u8, d: u8| {
                    (s as f32 * alpha + d as f32 * (1.0 - alpha)).round() as u8
                };
                self.data[idx] =
                    Rgb::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b)).to_argb();
                self.depth[idx] = depth;
            }
        }
    }

    /// Box-filter downsample by an integer factor (supersampling resolve).
    pub fn ssaa(&self, factor: usize) -> Self {
        let new_width = self.width / factor;
        let new_height = self.height / factor;
        let mut new_data = vec![0; new_width * new_height];
        let samples = (factor * factor) as u32;

        for y in 0..new_height {
            for x in 0..new_width {
                let mut r = 0u32;
                let mut g = 0u32;
                let mut b = 0u32;

                for dy in 0..factor {
                    for dx in 0..factor {
                        let src = self.data[(y * factor + dy) * self.width + (x * factor + dx)];
                        let c = Rgb::from_argb(src);
                        r += c.r as u32;
                        g += c.g as u32;
                        b += c.b as u32;
                    }
                }

                let avg = Rgb::new((r / samples) as u8, (g / samples) as u8, (b / samples) as u8);
                new_data[y * new_width + x] = avg.to_argb();
            }
        }

        Self {
            width: new_width,
            height: new_height,
            data: new_data,
            depth: vec![DEPTH_CLEAR; new_width * new_height],
        }
    }

    pub fn save_as_image(&self, filepath: &str) -> Result<(), image::ImageError> {
        use image::{ImageBuffer, Rgba};

        let mut img = ImageBuffer::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let c = Rgb::from_argb(self.data[y * self.width + x]);
                img.put_pixel(x as u32, y as u32, Rgba([c.r, c.g, c.b, 255]));
            }
        }
        img.save(filepath)
    }

    /// Save the depth plane as a grayscale image, near bright and far dark.
    pub fn save_depth_as_image(
        &self,
        filepath: &str,
        near: f32,
        far: f32,
    ) -> Result<(), image::ImageError> {
        use image::{ImageBuffer, Rgba};

        let mut img = ImageBuffer::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let depth = self.depth[y * self.width + x];
                let normalized = if depth >= far {
                    1.0
                } else if depth <= near {
                    0.0
                } else {
                    (depth - near) / (far - near)
                };
                let val = ((1.0 - normalized) * 255.0) as u8;
                img.put_pixel(x as u32, y as u32, Rgba([val, val, val, 255]));
            }
        }
        img.save(filepath)
    }
}
