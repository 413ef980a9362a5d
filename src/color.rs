//! HSB color conversion and ARGB pixel packing.
//!
//! The framebuffer (and minifb) want 0xAARRGGBB `u32` pixels, the fractal
//! palette is specified in hue/saturation/brightness.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Pack into an opaque 0xAARRGGBB pixel.
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn from_argb(pixel: u32) -> Self {
        Rgb {
            r: ((pixel >> 16) & 0xFF) as u8,
            g: ((pixel >> 8) & 0xFF) as u8,
            b: (pixel & 0xFF) as u8,
        }
    }
}

/// Convert hue/saturation/brightness to RGB.
///
/// Hue is wrapped into [0, 360) degrees, saturation and brightness are
/// clamped to [0, 1]. Sector algorithm: c = s*b, x = c*(1 - |(h/60 mod 2) - 1|),
/// m = b - c.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Rgb {
    let hue = hue.rem_euclid(360.0);
    let saturation = saturation.clamp(0.0, 1.0);
    let brightness = brightness.clamp(0.0, 1.0);

    let c = saturation * brightness;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = brightness - c;

    let (r1, g1, b1) = match hue as u32 / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: ((r1 + m) * 255.0) as u8,
        g: ((g1 + m) * 255.0) as u8,
        b: ((b1 + m) * 255.0) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsb_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsb_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hue_wraps_past_360() {
        assert_eq!(hsb_to_rgb(360.0, 1.0, 1.0), hsb_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsb_to_rgb(480.0, 1.0, 1.0), hsb_to_rgb(120.0, 1.0, 1.0));
    }

    #[test]
    fn saturation_and_brightness_clamp() {
        // Oversaturated red stays red, zero brightness is black
        assert_eq!(hsb_to_rgb(0.0, 2.0, 1.5), Rgb::new(255, 0, 0));
        assert_eq!(hsb_to_rgb(90.0, 1.0, -1.0), Rgb::BLACK);
    }

    #[test]
    fn argb_round_trip() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_argb(), 0xFF123456);
        assert_eq!(Rgb::from_argb(c.to_argb()), c);
    }
}
