//! The simulation orchestrator.
//!
//! One `tick` runs the whole frame: replenish the photon population, sweep
//! every entity list against its pool, drain the host's pointer queue into
//! trail segments with inline collision checks, then rebuild the spatial
//! index and step the autonomous trackers. The host reads back snapshots and
//! per-tick events afterwards.

use glam::Vec2;

use crate::api::config::EngineConfig;
use crate::api::types::GameEvent;
use crate::components::explosion::ExplosionParticle;
use crate::components::particle::Particle;
use crate::components::photon::PhotonParticle;
use crate::components::segment::TraceSegment;
use crate::components::tracker::AutoTracker;
use crate::core::pool::ObjectPool;
use crate::core::quadtree::QuadTree;
use crate::core::rect::Rect;
use crate::core::rng::Rng;
use crate::input::queue::PointQueue;
use crate::systems::color::{ColorCycle, Rgb};
use crate::systems::sweep::{sweep_particles, sweep_segments};

pub struct GameEngine {
    photons: Vec<PhotonParticle>,
    explosions: Vec<ExplosionParticle>,
    segments: Vec<TraceSegment>,
    trackers: Vec<AutoTracker>,

    photon_pool: ObjectPool<PhotonParticle>,
    explosion_pool: ObjectPool<ExplosionParticle>,
    segment_pool: ObjectPool<TraceSegment>,

    bounds: Rect,
    score: u32,
    events: Vec<GameEvent>,
    trail_colors: ColorCycle,
    rng: Rng,
    config: EngineConfig,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            photons: Vec::with_capacity(1000),
            explosions: Vec::with_capacity(1000),
            segments: Vec::with_capacity(100),
            trackers: Vec::new(),
            photon_pool: ObjectPool::new(config.pool_max, config.pool_initial),
            explosion_pool: ObjectPool::new(config.pool_max, config.pool_initial),
            segment_pool: ObjectPool::new(config.pool_max, config.pool_initial),
            bounds: Rect::from_size(0.0, 0.0),
            score: 0,
            events: Vec::new(),
            trail_colors: ColorCycle::new(),
            rng: Rng::new(42),
            config,
        }
    }

    /// Reseed the random stream. Two engines with equal seed, config, bounds
    /// and inputs replay identically.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::new(seed);
        self
    }

    // -- Host-facing state --

    /// Viewport in pixels. Must be set to a non-degenerate rect before
    /// ticking does anything.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Live photons, in spawn order. The engine mutates this list on the
    /// next tick, so renderers should copy what they need per frame.
    pub fn photons(&self) -> &[PhotonParticle] {
        &self.photons
    }

    pub fn explosions(&self) -> &[ExplosionParticle] {
        &self.explosions
    }

    pub fn segments(&self) -> &[TraceSegment] {
        &self.segments
    }

    pub fn trackers(&self) -> &[AutoTracker] {
        &self.trackers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Events raised since the last tick started.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    // -- Control --

    /// Add a tracker with the given color at a random central position.
    pub fn add_tracker(&mut self, color: Rgb) {
        let position = Vec2::new(
            self.rng.next_float() * 0.5 + 0.25,
            self.rng.next_float() * 0.5 + 0.25,
        );
        let (speed_min, speed_max) = self.config.tracker_speed;
        let speed = self.rng.next_range(speed_min, speed_max);
        self.trackers.push(AutoTracker::new(position, color).with_speed(speed));
        log::debug!("tracker added at {position}, {} total", self.trackers.len());
    }

    pub fn remove_last_tracker(&mut self) {
        if self.trackers.pop().is_some() {
            log::debug!("tracker removed, {} remain", self.trackers.len());
        }
    }

    /// Clear all active entities and trackers and zero the score. Pooled
    /// instances are not restocked from the cleared lists; pools regrow from
    /// fresh allocation.
    pub fn reset(&mut self) {
        self.set_score(0);
        self.photons.clear();
        self.explosions.clear();
        self.segments.clear();
        self.trackers.clear();
        log::debug!("engine reset");
    }

    // -- Per-frame update --

    /// Advance the whole simulation by `elapsed_ms`, draining `input`
    /// pairwise into trail segments. No-ops while bounds are degenerate.
    pub fn tick(&mut self, elapsed_ms: f32, input: &mut PointQueue) {
        self.events.clear();
        if self.bounds.is_degenerate() {
            return;
        }

        if self.photons.len() < self.config.min_photons {
            self.spawn_photon_batch(self.config.spawn_batch);
        }

        sweep_particles(elapsed_ms, self.bounds, &mut self.explosions, &mut self.explosion_pool);
        sweep_particles(elapsed_ms, self.bounds, &mut self.photons, &mut self.photon_pool);
        sweep_segments(elapsed_ms, &mut self.segments, &mut self.segment_pool);

        self.process_input(input);
        self.process_trackers(elapsed_ms / 1000.0);
    }

    fn spawn_photon_batch(&mut self, count: usize) {
        for _ in 0..count {
            self.spawn_photon();
        }
    }

    fn spawn_photon(&mut self) {
        let (radius_min, radius_max) = self.config.photon_radius;
        let (age_min, age_max) = self.config.photon_lifetime_ms;
        let speed = self.config.photon_speed;

        let position = Vec2::new(self.rng.next_float(), self.rng.next_float());
        let velocity = Vec2::new(
            (self.rng.next_float() - 0.5) * speed,
            (self.rng.next_float() - 0.5) * speed,
        );
        let radius = self.rng.next_range(radius_min, radius_max);
        let color = Rgb::random(&mut self.rng);
        let max_age = self.rng.next_range(age_min, age_max);

        let mut photon = self.photon_pool.get();
        photon.init(position, velocity, radius, color, max_age);
        self.photons.push(photon);
    }

    /// Drain queued pointer points pairwise: pop the oldest, pair it with
    /// the next, and leave the newest point behind for the next stroke.
    fn process_input(&mut self, input: &mut PointQueue) {
        while input.len() > 1 {
            let (start, end) = match (input.pop(), input.peek()) {
                (Some(start), Some(&end)) => (start, end),
                _ => break,
            };
            let color = self.trail_colors.next();
            self.create_trail(start, end, color, self.config.pointer_trail_age_ms);
        }
    }

    /// Rebuild the spatial index over live photons and step every tracker
    /// against it, drawing a trail for each movement. A photon killed by one
    /// tracker's trail is invisible to the trackers after it.
    fn process_trackers(&mut self, elapsed_secs: f32) {
        let mut tree = QuadTree::new(Rect::UNIT, self.config.quadtree_capacity);
        for (i, photon) in self.photons.iter().enumerate() {
            if photon.is_alive() && !tree.insert(i, photon.position) {
                log::trace!("photon {i} outside index bounds, unindexed this tick");
            }
        }

        for t in 0..self.trackers.len() {
            let movement = {
                let photons = &self.photons;
                self.trackers[t].update(elapsed_secs, &tree, |i| photons[i].is_alive())
            };
            if let Some(m) = movement {
                let start = Vec2::new(m.start.x * self.bounds.width, m.start.y * self.bounds.height);
                let end = Vec2::new(m.end.x * self.bounds.width, m.end.y * self.bounds.height);
                let color = self.trackers[t].color;
                self.create_trail(start, end, color, self.config.tracker_trail_age_ms);
            }
        }
    }

    /// Lay trail segments from `start` to `end` (pixels). Long spans are cut
    /// into equal sub-steps near the configured step size, one pooled
    /// segment and one collision pass per step.
    fn create_trail(&mut self, start: Vec2, end: Vec2, color: Rgb, max_age: f32) {
        let step_size = self.config.trail_step;
        let thickness = self.config.trail_thickness;
        let distance = start.distance(end);

        if distance > step_size {
            let steps = (distance / step_size) as usize;
            let step = (end - start) / steps as f32;
            let mut current = start;
            for _ in 0..steps {
                let next = current + step;
                let mut segment = self.segment_pool.get();
                segment.init(current, next, color, thickness, max_age);
                self.segments.push(segment);
                self.check_collisions(current, next);
                current = next;
            }
        } else {
            let mut segment = self.segment_pool.get();
            segment.init(start, end, color, thickness, max_age);
            self.segments.push(segment);
            self.check_collisions(start, end);
        }
    }

    /// Kill every live photon the segment cuts, award points, and spray
    /// debris from each kill.
    fn check_collisions(&mut self, start: Vec2, end: Vec2) {
        for i in (0..self.photons.len()).rev() {
            if !self.photons[i].is_alive() {
                continue;
            }
            if self.photons[i].intersects_line(start, end, self.bounds) {
                self.photons[i].kill();
                let position = self.photons[i].position;
                let color = self.photons[i].color;
                self.spawn_splatter(position, color);
                self.set_score(self.score + self.config.hit_score);
            }
        }
    }

    fn spawn_splatter(&mut self, position: Vec2, color: Rgb) {
        let (count_min, count_max) = self.config.splatter_count;
        let (radius_min, radius_max) = self.config.splatter_radius;
        let speed = self.config.splatter_speed;
        let max_age = self.config.splatter_age_ms;

        let count = count_min + self.rng.next_int(count_max.saturating_sub(count_min) + 1);
        for _ in 0..count {
            let radius = self.rng.next_range(radius_min, radius_max);
            let angle = self.rng.next_float() * std::f32::consts::TAU;
            let velocity = Vec2::new(angle.cos() * speed, angle.sin() * speed);

            let mut particle = self.explosion_pool.get();
            particle.init(position, velocity, radius, color, max_age);
            self.explosions.push(particle);
        }
    }

    fn set_score(&mut self, value: u32) {
        if value != self.score {
            self.score = value;
            self.events.push(GameEvent::ScoreChanged { score: value });
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
