use glam::Vec2;

use crate::core::rect::Rect;

/// Shared lifecycle contract for pooled simulation particles.
///
/// Positions are normalized to the unit square; `radius` and rendering happen
/// in pixels, so hit tests go through `center_px`. Opacity and aliveness are
/// derived from age, never set directly after `init`.
pub trait Particle {
    /// Normalized position.
    fn position(&self) -> Vec2;

    /// Whether the particle should stay in the active list. The engine's
    /// sweep recycles it the moment this turns false.
    fn is_alive(&self) -> bool;

    /// Advance by `elapsed_ms` against the current viewport bounds.
    fn update(&mut self, elapsed_ms: f32, bounds: Rect);

    /// Pixel-space center of this particle within the viewport.
    fn center_px(&self, bounds: Rect) -> Vec2 {
        Vec2::new(
            bounds.width * self.position().x,
            bounds.height * self.position().y,
        )
    }
}
