//! Photon particles: the ambient drifting targets trails can destroy.

use glam::Vec2;

use crate::components::particle::Particle;
use crate::core::rect::Rect;
use crate::systems::color::Rgb;

/// A drifting target that bounces around the unit square, fades out over the
/// last 30% of its lifespan, and dies at full age or when a trail cuts it.
#[derive(Debug, Clone)]
pub struct PhotonParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub opacity: f32,
    pub age: f32,
    pub max_age: f32,
    alive: bool,
}

impl Default for PhotonParticle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: 0.0,
            color: Rgb::default(),
            opacity: 1.0,
            age: 0.0,
            max_age: 0.0,
            alive: true,
        }
    }
}

impl PhotonParticle {
    /// Fraction of the lifespan after which opacity starts ramping down.
    pub const FADE_START: f32 = 0.7;

    /// Fully (re)initialize, wiping any state left from a previous pooled
    /// life.
    pub fn init(&mut self, position: Vec2, velocity: Vec2, radius: f32, color: Rgb, max_age: f32) {
        self.alive = true;
        self.opacity = 1.0;
        self.age = 0.0;
        self.position = position;
        self.velocity = velocity;
        self.radius = radius;
        self.color = color;
        self.max_age = max_age;
    }

    /// Kill externally (trail collision). Age-driven death goes through
    /// `update`.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Whether a pixel-space point lies inside the rendered circle.
    pub fn contains_point(&self, point: Vec2, bounds: Rect) -> bool {
        self.center_px(bounds).distance(point) <= self.radius
    }

    /// True point-to-segment test against the rendered circle: project the
    /// center onto the segment, clamp the parameter to [0, 1], and compare
    /// the closest-point distance with the radius. Zero-length segments
    /// degrade to the point test.
    pub fn intersects_line(&self, start: Vec2, end: Vec2, bounds: Rect) -> bool {
        let center = self.center_px(bounds);
        let line = end - start;
        let len_sq = line.length_squared();
        if len_sq == 0.0 {
            return self.contains_point(start, bounds);
        }

        let t = ((center - start).dot(line) / len_sq).clamp(0.0, 1.0);
        let closest = start + line * t;
        center.distance_squared(closest) <= self.radius * self.radius
    }
}

impl Particle for PhotonParticle {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn update(&mut self, elapsed_ms: f32, bounds: Rect) {
        if !self.alive {
            return;
        }

        self.position += self.velocity * elapsed_ms;

        let extent_x = self.radius / bounds.width;
        let extent_y = self.radius / bounds.height;
        if self.position.x + extent_x > 1.0 || self.position.x - extent_x < 0.0 {
            // max-then-min instead of clamp(): an oversized radius inverts
            // the range, which clamp() rejects.
            self.position.x = self.position.x.max(extent_x).min(1.0 - extent_x);
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y + extent_y > 1.0 || self.position.y - extent_y < 0.0 {
            self.position.y = self.position.y.max(extent_y).min(1.0 - extent_y);
            self.velocity.y = -self.velocity.y;
        }

        self.age += elapsed_ms;
        let fade_start = self.max_age * Self::FADE_START;
        if self.age > fade_start {
            self.opacity = (1.0 - (self.age - fade_start) / (self.max_age * (1.0 - Self::FADE_START)))
                .max(0.0);
        }
        if self.age >= self.max_age {
            self.alive = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    fn photon_at(pos: Vec2, vel: Vec2, radius: f32, max_age: f32) -> PhotonParticle {
        let mut p = PhotonParticle::default();
        p.init(pos, vel, radius, Rgb::new(0, 255, 255), max_age);
        p
    }

    #[test]
    fn bounce_keeps_radius_adjusted_position_inside() {
        let bounds = Rect::from_size(800.0, 600.0);
        let mut rng = Rng::new(31);
        let extent_x = 15.0 / bounds.width;
        let extent_y = 15.0 / bounds.height;

        for _ in 0..200 {
            let vel = Vec2::new(
                (rng.next_float() - 0.5) * 0.2,
                (rng.next_float() - 0.5) * 0.2,
            );
            let mut p = photon_at(
                Vec2::new(rng.next_float(), rng.next_float()),
                vel,
                15.0,
                1e9,
            );
            for _ in 0..40 {
                p.update(16.0, bounds);
                assert!(
                    p.position.x >= extent_x - 1e-6 && p.position.x <= 1.0 - extent_x + 1e-6,
                    "x escaped: {}",
                    p.position.x
                );
                assert!(
                    p.position.y >= extent_y - 1e-6 && p.position.y <= 1.0 - extent_y + 1e-6,
                    "y escaped: {}",
                    p.position.y
                );
            }
        }
    }

    #[test]
    fn wall_contact_reflects_velocity() {
        let bounds = Rect::from_size(1000.0, 1000.0);
        let mut p = photon_at(Vec2::new(0.99, 0.5), Vec2::new(0.001, 0.0), 10.0, 1e9);
        p.update(16.0, bounds);
        assert!(p.velocity.x < 0.0, "vx should have flipped");
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn opacity_full_until_fade_start_then_ramps() {
        let bounds = Rect::from_size(1000.0, 1000.0);
        let mut p = photon_at(Vec2::new(0.5, 0.5), Vec2::ZERO, 10.0, 1000.0);

        p.update(600.0, bounds);
        assert_eq!(p.opacity, 1.0);

        // At age 850 the particle is halfway through the 30% fade window.
        p.update(250.0, bounds);
        assert!((p.opacity - 0.5).abs() < 1e-3, "opacity was {}", p.opacity);
        assert!(p.is_alive());

        p.update(200.0, bounds);
        assert_eq!(p.opacity, 0.0);
        assert!(!p.is_alive());
    }

    #[test]
    fn opacity_always_in_unit_interval() {
        let bounds = Rect::from_size(800.0, 600.0);
        let mut p = photon_at(Vec2::new(0.5, 0.5), Vec2::ZERO, 10.0, 500.0);
        for _ in 0..100 {
            p.update(16.0, bounds);
            assert!((0.0..=1.0).contains(&p.opacity));
        }
    }

    #[test]
    fn init_wipes_previous_life() {
        let mut p = photon_at(Vec2::new(0.1, 0.1), Vec2::ZERO, 10.0, 100.0);
        p.update(200.0, Rect::from_size(800.0, 600.0));
        assert!(!p.is_alive());
        assert_eq!(p.opacity, 0.0);

        p.init(Vec2::new(0.5, 0.5), Vec2::ZERO, 12.0, Rgb::new(1, 2, 3), 1000.0);
        assert!(p.is_alive());
        assert_eq!(p.opacity, 1.0);
        assert_eq!(p.age, 0.0);
        assert_eq!(p.radius, 12.0);
    }

    #[test]
    fn segment_through_center_hits() {
        let bounds = Rect::from_size(1000.0, 1000.0);
        let p = photon_at(Vec2::new(0.5, 0.5), Vec2::ZERO, 15.0, 1e9);
        assert!(p.intersects_line(Vec2::new(0.0, 0.0), Vec2::new(1000.0, 1000.0), bounds));
        // Midpoint of the segment sits exactly on the center.
        assert!(p.intersects_line(Vec2::new(400.0, 500.0), Vec2::new(600.0, 500.0), bounds));
    }

    #[test]
    fn segment_beyond_radius_misses() {
        let bounds = Rect::from_size(1000.0, 1000.0);
        let p = photon_at(Vec2::new(0.5, 0.5), Vec2::ZERO, 15.0, 1e9);
        // Horizontal line 16px below the center.
        assert!(!p.intersects_line(Vec2::new(0.0, 516.1), Vec2::new(1000.0, 516.1), bounds));
        // Segment whose nearest endpoint is far outside the circle.
        assert!(!p.intersects_line(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0), bounds));
    }

    #[test]
    fn zero_length_segment_degrades_to_point_test() {
        let bounds = Rect::from_size(1000.0, 1000.0);
        let p = photon_at(Vec2::new(0.5, 0.5), Vec2::ZERO, 15.0, 1e9);
        assert!(p.intersects_line(Vec2::new(505.0, 500.0), Vec2::new(505.0, 500.0), bounds));
        assert!(!p.intersects_line(Vec2::new(600.0, 600.0), Vec2::new(600.0, 600.0), bounds));
    }
}
