//! Update-and-recycle sweeps over the active entity lists.
//!
//! Free functions so the engine can run them against any list/pool pair
//! without borrow conflicts across its fields.

use crate::components::particle::Particle;
use crate::components::segment::TraceSegment;
use crate::core::pool::ObjectPool;
use crate::core::rect::Rect;

/// Advance every particle and recycle the ones that are no longer alive.
/// Iterates in reverse index order so removal by index stays safe, and
/// preserves the relative order of survivors.
pub fn sweep_particles<T: Particle + Default>(
    elapsed_ms: f32,
    bounds: Rect,
    active: &mut Vec<T>,
    pool: &mut ObjectPool<T>,
) {
    for i in (0..active.len()).rev() {
        active[i].update(elapsed_ms, bounds);
        if !active[i].is_alive() {
            let particle = active.remove(i);
            pool.put(particle);
        }
    }
}

/// Advance every trail segment and recycle the fully faded ones.
pub fn sweep_segments(
    elapsed_ms: f32,
    active: &mut Vec<TraceSegment>,
    pool: &mut ObjectPool<TraceSegment>,
) {
    for i in (0..active.len()).rev() {
        active[i].update(elapsed_ms);
        if active[i].is_faded() {
            let segment = active.remove(i);
            pool.put(segment);
        }
    }
}
