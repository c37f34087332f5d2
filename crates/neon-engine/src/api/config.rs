use serde::{Deserialize, Serialize};

/// Engine tunables. `Default` is the stock game balance; hosts can override
/// individual fields or load a JSON fragment via `from_json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Photon population floor; a spawn batch fires when live photons drop
    /// below this.
    pub min_photons: usize,
    /// Photons spawned per replenishment batch.
    pub spawn_batch: usize,
    /// Photon radius range in pixels (min, max).
    pub photon_radius: (f32, f32),
    /// Photon lifetime range in milliseconds (min, max).
    pub photon_lifetime_ms: (f32, f32),
    /// Per-axis photon velocity span in units/ms; components are drawn from
    /// plus or minus half of this.
    pub photon_speed: f32,
    /// Trail sub-step length in pixels.
    pub trail_step: f32,
    /// Trail stroke thickness in pixels.
    pub trail_thickness: f32,
    /// Lifetime of pointer-drawn segments in milliseconds.
    pub pointer_trail_age_ms: f32,
    /// Lifetime of tracker-drawn segments in milliseconds.
    pub tracker_trail_age_ms: f32,
    /// Points awarded per destroyed photon.
    pub hit_score: u32,
    /// Explosion burst size range, inclusive (min, max).
    pub splatter_count: (u32, u32),
    /// Explosion particle radius range in pixels (min, max).
    pub splatter_radius: (f32, f32),
    /// Explosion particle speed in units/ms.
    pub splatter_speed: f32,
    /// Explosion particle lifetime in milliseconds.
    pub splatter_age_ms: f32,
    /// Quadtree node capacity.
    pub quadtree_capacity: usize,
    /// Object pool capacity, per entity kind.
    pub pool_max: usize,
    /// Object pool pre-fill, per entity kind.
    pub pool_initial: usize,
    /// Tracker speed range in units/sec (min, max).
    pub tracker_speed: (f32, f32),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_photons: 20,
            spawn_batch: 20,
            photon_radius: (13.0, 22.0),
            photon_lifetime_ms: (5000.0, 15_000.0),
            photon_speed: 0.0007,
            trail_step: 5.0,
            trail_thickness: 8.0,
            pointer_trail_age_ms: 500.0,
            tracker_trail_age_ms: 1000.0,
            hit_score: 10,
            splatter_count: (7, 9),
            splatter_radius: (4.0, 7.0),
            splatter_speed: 0.0007,
            splatter_age_ms: 2500.0,
            quadtree_capacity: 4,
            pool_max: 10_000,
            pool_initial: 100,
            tracker_speed: (0.4, 0.5),
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) config from a JSON string. Missing fields
    /// keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_stock_balance() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.min_photons, 20);
        assert_eq!(cfg.trail_step, 5.0);
        assert_eq!(cfg.trail_thickness, 8.0);
        assert_eq!(cfg.hit_score, 10);
        assert_eq!(cfg.splatter_count, (7, 9));
        assert_eq!(cfg.pool_max, 10_000);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json(r#"{ "min_photons": 50, "hit_score": 25 }"#).unwrap();
        assert_eq!(cfg.min_photons, 50);
        assert_eq!(cfg.hit_score, 25);
        assert_eq!(cfg.trail_step, 5.0);
        assert_eq!(cfg.tracker_speed, (0.4, 0.5));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EngineConfig::from_json("{ min_photons: }").is_err());
    }
}
