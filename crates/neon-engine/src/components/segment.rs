use glam::Vec2;

use crate::systems::color::Rgb;

/// A short piece of drawn trail in pixel coordinates. Fades linearly over
/// its lifetime and is recycled once fully transparent.
#[derive(Debug, Clone)]
pub struct TraceSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Rgb,
    pub opacity: f32,
    pub thickness: f32,
    pub age: f32,
    pub max_age: f32,
}

impl Default for TraceSegment {
    fn default() -> Self {
        Self {
            start: Vec2::ZERO,
            end: Vec2::ZERO,
            color: Rgb::default(),
            opacity: 1.0,
            thickness: 1.0,
            age: 0.0,
            max_age: 0.0,
        }
    }
}

impl TraceSegment {
    /// Fully (re)initialize, wiping any state left from a previous pooled
    /// life.
    pub fn init(&mut self, start: Vec2, end: Vec2, color: Rgb, thickness: f32, max_age: f32) {
        self.opacity = 1.0;
        self.age = 0.0;
        self.start = start;
        self.end = end;
        self.color = color;
        self.thickness = thickness;
        self.max_age = max_age;
    }

    pub fn update(&mut self, elapsed_ms: f32) {
        self.age += elapsed_ms;
        self.opacity = (1.0 - self.age / self.max_age).max(0.0);
    }

    /// Fully transparent segments are removed by the engine's sweep.
    pub fn is_faded(&self) -> bool {
        self.opacity <= 0.0
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}
