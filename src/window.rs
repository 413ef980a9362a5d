//! minifb shell shared by the demo binaries: open a window, present the
//! framebuffer, run until close or Escape.

use std::error::Error;

use minifb::{Key, Window, WindowOptions};

use crate::framebuffer::FrameBuffer;

pub struct DemoWindow {
    window: Window,
    width: usize,
    height: usize,
}

impl DemoWindow {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Box<dyn Error>> {
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        window.set_target_fps(60);
        Ok(DemoWindow {
            window,
            width,
            height,
        })
    }

    pub fn is_running(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// Edge-triggered: true once per press.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, minifb::KeyRepeat::No)
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.window.is_key_down(key)
    }

    pub fn shift_down(&self) -> bool {
        self.window.is_key_down(Key::LeftShift) || self.window.is_key_down(Key::RightShift)
    }

    pub fn present(&mut self, fb: &FrameBuffer) -> Result<(), Box<dyn Error>> {
        debug_assert_eq!((fb.width, fb.height), (self.width, self.height));
        self.window
            .update_with_buffer(&fb.data, self.width, self.height)?;
        Ok(())
    }
}
