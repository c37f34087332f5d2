//! Trail and particle colors: plain RGB plus the hue-cycling generator that
//! tints pointer trails.

use bytemuck::{Pod, Zeroable};

use crate::core::rng::Rng;

/// Packed RGB color. Pod so snapshot data can be uploaded to a renderer
/// buffer as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random(rng: &mut Rng) -> Self {
        Self::new(
            rng.next_int(256) as u8,
            rng.next_int(256) as u8,
            rng.next_int(256) as u8,
        )
    }

    /// Convert from HSV. `h` in degrees [0, 360), `s` and `v` in [0, 1].
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let hi = (h / 60.0).floor() as i32 % 6;
        let f = h / 60.0 - (h / 60.0).floor();
        let v_byte = (v * 255.0) as u8;
        let p = (v * (1.0 - s) * 255.0) as u8;
        let q = (v * (1.0 - f * s) * 255.0) as u8;
        let t = (v * (1.0 - (1.0 - f) * s) * 255.0) as u8;
        match hi {
            0 => Self::new(v_byte, t, p),
            1 => Self::new(q, v_byte, p),
            2 => Self::new(p, v_byte, t),
            3 => Self::new(p, q, v_byte),
            4 => Self::new(t, p, v_byte),
            _ => Self::new(v_byte, p, q),
        }
    }
}

/// Continuous hue rotation for pointer trails. Each drained input pair
/// advances the hue by two degrees, wrapping at 360, so a long stroke walks
/// the full spectrum.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    hue: f32,
}

impl ColorCycle {
    pub const HUE_STEP: f32 = 2.0;

    pub fn new() -> Self {
        Self { hue: 0.0 }
    }

    /// Advance the gradient and return the next color (full saturation and
    /// value).
    pub fn next(&mut self) -> Rgb {
        self.hue += Self::HUE_STEP;
        if self.hue >= 360.0 {
            self.hue = 0.0;
        }
        Rgb::from_hsv(self.hue, 1.0, 1.0)
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new()
    }
}
