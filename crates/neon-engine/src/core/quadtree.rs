//! Region quadtree for nearest-neighbor queries over photon positions.
//!
//! The tree indexes positions for a single tick and is rebuilt from scratch
//! every frame. It stores list indices, not particles, so it never owns or
//! outlives the entities it points at.

use glam::Vec2;

use crate::core::rect::Rect;

/// One indexed position: the particle's slot in the engine's photon list plus
/// its position snapshot at insert time.
#[derive(Debug, Clone, Copy)]
pub struct QuadEntry {
    pub index: usize,
    pub pos: Vec2,
}

/// Recursive rectangular partition. Nodes hold up to `capacity` entries and
/// lazily split into four equal quadrants when full.
pub struct QuadTree {
    bounds: Rect,
    capacity: usize,
    entries: Vec<QuadEntry>,
    children: Option<Box<[QuadTree; 4]>>,
}

impl QuadTree {
    pub const DEFAULT_CAPACITY: usize = 4;

    pub fn new(bounds: Rect, capacity: usize) -> Self {
        Self {
            bounds,
            capacity,
            entries: Vec::new(),
            children: None,
        }
    }

    /// Index a position. Returns false when the position lies outside this
    /// node's rect, or in the rare float-boundary case where every child
    /// rejects it; the caller treats such a particle as unindexed this tick.
    pub fn insert(&mut self, index: usize, pos: Vec2) -> bool {
        if !self.bounds.contains(pos) {
            return false;
        }

        if self.entries.len() < self.capacity {
            self.entries.push(QuadEntry { index, pos });
            return true;
        }

        if self.children.is_none() {
            self.subdivide();
        }
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                if child.insert(index, pos) {
                    return true;
                }
            }
        }
        false
    }

    fn subdivide(&mut self) {
        let x = self.bounds.x;
        let y = self.bounds.y;
        let w = self.bounds.width / 2.0;
        let h = self.bounds.height / 2.0;

        self.children = Some(Box::new([
            QuadTree::new(Rect::new(x, y, w, h), self.capacity),
            QuadTree::new(Rect::new(x + w, y, w, h), self.capacity),
            QuadTree::new(Rect::new(x, y + h, w, h), self.capacity),
            QuadTree::new(Rect::new(x + w, y + h, w, h), self.capacity),
        ]));
    }

    /// Find the closest entry within `search_radius` of `pos` for which
    /// `alive` still holds, or None. Candidates are gathered from the square
    /// around `pos`, then ranked by true squared distance; the first entry
    /// seen at a given distance wins.
    pub fn query_nearest(
        &self,
        pos: Vec2,
        search_radius: f32,
        alive: impl Fn(usize) -> bool,
    ) -> Option<QuadEntry> {
        let range = Rect::new(
            pos.x - search_radius,
            pos.y - search_radius,
            search_radius * 2.0,
            search_radius * 2.0,
        );
        let mut candidates = Vec::new();
        self.query(&range, &mut candidates);

        let r_sq = search_radius * search_radius;
        let mut nearest = None;
        let mut min_dist_sq = f32::MAX;
        for entry in candidates {
            if !alive(entry.index) {
                continue;
            }
            let dist_sq = entry.pos.distance_squared(pos);
            if dist_sq < r_sq && dist_sq < min_dist_sq {
                min_dist_sq = dist_sq;
                nearest = Some(entry);
            }
        }
        nearest
    }

    fn query(&self, range: &Rect, found: &mut Vec<QuadEntry>) {
        if !self.bounds.intersects(range) {
            return;
        }
        for entry in &self.entries {
            if range.contains(entry.pos) {
                found.push(*entry);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query(range, found);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    fn unit_tree() -> QuadTree {
        QuadTree::new(Rect::UNIT, QuadTree::DEFAULT_CAPACITY)
    }

    #[test]
    fn insert_outside_bounds_fails() {
        let mut tree = unit_tree();
        assert!(!tree.insert(0, Vec2::new(2.0, 0.5)));
        assert!(!tree.insert(0, Vec2::new(0.5, -0.1)));
        assert!(tree.insert(0, Vec2::new(0.5, 0.5)));
    }

    #[test]
    fn insert_past_capacity_subdivides() {
        let mut tree = unit_tree();
        for i in 0..32 {
            let t = i as f32 / 32.0;
            assert!(tree.insert(i, Vec2::new(t, t)), "insert {} failed", i);
        }
        assert!(tree.children.is_some());
    }

    #[test]
    fn query_nearest_empty_tree_is_none() {
        let tree = unit_tree();
        assert!(tree.query_nearest(Vec2::new(0.5, 0.5), 0.5, |_| true).is_none());
    }

    #[test]
    fn query_nearest_matches_brute_force() {
        let mut rng = Rng::new(99);
        for &n in &[1usize, 2, 5, 20, 100, 500] {
            let points: Vec<Vec2> = (0..n)
                .map(|_| Vec2::new(rng.next_float(), rng.next_float()))
                .collect();
            let mut tree = unit_tree();
            for (i, p) in points.iter().enumerate() {
                assert!(tree.insert(i, *p), "in-bounds insert {} failed", i);
            }

            for _ in 0..20 {
                let q = Vec2::new(rng.next_float(), rng.next_float());
                // Radius 2 covers the whole unit square from any query point.
                let found = tree
                    .query_nearest(q, 2.0, |_| true)
                    .expect("a live candidate must exist");
                let best = points
                    .iter()
                    .map(|p| p.distance_squared(q))
                    .fold(f32::MAX, f32::min);
                assert!(
                    (found.pos.distance_squared(q) - best).abs() < 1e-9,
                    "n={} query returned a non-nearest entry",
                    n
                );
            }
        }
    }

    #[test]
    fn query_nearest_respects_radius() {
        let mut tree = unit_tree();
        assert!(tree.insert(0, Vec2::new(0.9, 0.9)));
        let near_miss = tree.query_nearest(Vec2::new(0.1, 0.1), 0.5, |_| true);
        assert!(near_miss.is_none());
        let hit = tree.query_nearest(Vec2::new(0.8, 0.8), 0.5, |_| true);
        assert_eq!(hit.map(|e| e.index), Some(0));
    }

    #[test]
    fn query_nearest_skips_dead_entries() {
        let mut tree = unit_tree();
        assert!(tree.insert(0, Vec2::new(0.5, 0.5)));
        assert!(tree.insert(1, Vec2::new(0.6, 0.6)));
        // Index 0 is closer to the query but no longer alive.
        let found = tree.query_nearest(Vec2::new(0.5, 0.5), 0.5, |i| i != 0);
        assert_eq!(found.map(|e| e.index), Some(1));
    }

    #[test]
    fn seam_positions_still_insert() {
        let mut tree = unit_tree();
        // Overfill the root so seam points have to descend into children.
        for i in 0..4 {
            assert!(tree.insert(i, Vec2::new(0.1 + i as f32 * 0.01, 0.1)));
        }
        assert!(tree.insert(4, Vec2::new(0.5, 0.5)));
        assert!(tree.insert(5, Vec2::new(0.5, 0.25)));
        assert!(tree.insert(6, Vec2::new(1.0, 1.0)));
    }
}
