// src/math/vec2d.rs

use glam::DVec2;

/// Euclidean length via `hypot`, which avoids intermediate overflow.
///
/// Kept over `DVec2::length` so face radii round exactly as in the reference
/// encodings.
#[inline]
#[must_use]
pub fn length(v: DVec2) -> f64 {
  v.x.hypot(v.y)
}
