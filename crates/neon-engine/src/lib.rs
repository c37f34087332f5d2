pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::EngineConfig;
pub use api::engine::GameEngine;
pub use api::types::GameEvent;
pub use components::explosion::ExplosionParticle;
pub use components::particle::Particle;
pub use components::photon::PhotonParticle;
pub use components::segment::TraceSegment;
pub use components::tracker::{AutoTracker, Movement};
pub use core::pool::ObjectPool;
pub use core::quadtree::{QuadEntry, QuadTree};
pub use core::rect::Rect;
pub use core::rng::Rng;
pub use input::queue::PointQueue;
pub use systems::color::{ColorCycle, Rgb};
pub use systems::sweep::{sweep_particles, sweep_segments};
