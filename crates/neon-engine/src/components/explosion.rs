//! Explosion particles: short-lived debris sprayed from a destroyed photon.

use glam::Vec2;

use crate::components::particle::Particle;
use crate::core::rect::Rect;
use crate::systems::color::Rgb;

/// Debris particle with drag ("residence") and a small downward gravity
/// bias. Fades linearly from birth and dies purely by age.
#[derive(Debug, Clone)]
pub struct ExplosionParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub opacity: f32,
    pub age: f32,
    pub max_age: f32,
    pub residence: f32,
    pub gravity: f32,
}

impl Default for ExplosionParticle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: 0.0,
            color: Rgb::default(),
            opacity: 1.0,
            age: 0.0,
            max_age: 0.0,
            residence: Self::DEFAULT_RESIDENCE,
            gravity: Self::DEFAULT_GRAVITY,
        }
    }
}

impl ExplosionParticle {
    pub const DEFAULT_RESIDENCE: f32 = 0.93;
    pub const DEFAULT_GRAVITY: f32 = 1e-6;

    /// Fully (re)initialize, wiping any state left from a previous pooled
    /// life.
    pub fn init(&mut self, position: Vec2, velocity: Vec2, radius: f32, color: Rgb, max_age: f32) {
        self.opacity = 1.0;
        self.age = 0.0;
        self.position = position;
        self.velocity = velocity;
        self.radius = radius;
        self.color = color;
        self.max_age = max_age;
        self.residence = Self::DEFAULT_RESIDENCE;
        self.gravity = Self::DEFAULT_GRAVITY;
    }
}

impl Particle for ExplosionParticle {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_alive(&self) -> bool {
        self.age < self.max_age
    }

    fn update(&mut self, elapsed_ms: f32, _bounds: Rect) {
        if !self.is_alive() {
            return;
        }

        // Drag applies twice per tick, once before and once after the move;
        // the burst spread is tuned around that.
        self.velocity = Vec2::new(
            self.velocity.x * self.residence,
            self.velocity.y * self.residence + self.gravity,
        );
        self.position += self.velocity * elapsed_ms;
        self.opacity = (1.0 - self.age / self.max_age).max(0.0);
        self.velocity *= self.residence;

        self.age += elapsed_ms;
    }
}
