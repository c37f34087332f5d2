//! Autonomous trackers: agents that chase the nearest live photon.

use glam::Vec2;

use crate::core::quadtree::QuadTree;
use crate::systems::color::Rgb;

/// A step taken by a tracker this tick, in normalized coordinates. The
/// engine turns it into a pixel-space trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub start: Vec2,
    pub end: Vec2,
}

/// Greedy nearest-photon chaser. Stateless steering: the target is re-queried
/// from the fresh spatial index every tick, with no lock-on memory.
#[derive(Debug, Clone)]
pub struct AutoTracker {
    pub position: Vec2,
    pub color: Rgb,
    pub speed: f32,
}

impl AutoTracker {
    /// How far (normalized units) a tracker can see.
    pub const SEARCH_RADIUS: f32 = 0.5;
    /// Below this distance the tracker holds still instead of jittering on
    /// top of its target.
    pub const MIN_STEP_DISTANCE: f32 = 0.001;
    pub const DEFAULT_SPEED: f32 = 0.2;

    pub fn new(position: Vec2, color: Rgb) -> Self {
        Self {
            position,
            color,
            speed: Self::DEFAULT_SPEED,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Step toward the nearest live photon, if any qualifies. `alive` lets
    /// the caller veto entries whose photon died after the index was built.
    pub fn update(
        &mut self,
        elapsed_secs: f32,
        tree: &QuadTree,
        alive: impl Fn(usize) -> bool,
    ) -> Option<Movement> {
        let target = tree.query_nearest(self.position, Self::SEARCH_RADIUS, alive)?;

        let dir = target.pos - self.position;
        let length = dir.length();
        if length <= Self::MIN_STEP_DISTANCE {
            return None;
        }

        let start = self.position;
        self.position += dir / length * self.speed * elapsed_secs;
        Some(Movement {
            start,
            end: self.position,
        })
    }
}
