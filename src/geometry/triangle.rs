// src/geometry/triangle.rs

use glam::DVec2;

/// Triangle prepared for repeated point-in-triangle tests.
///
/// Works in barycentric-style coordinates relative to the first vertex. The
/// dot products are divided by the Gram determinant up front so each test is
/// a handful of multiplications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
  origin: DVec2,
  edge1: DVec2,
  edge2: DVec2,
  dot11: f64,
  dot12: f64,
  dot22: f64,
}

impl Triangle {
  #[must_use]
  pub fn new(a: DVec2, b: DVec2, c: DVec2) -> Self {
    let edge1 = b - a;
    let edge2 = c - a;
    let dot11 = edge1.dot(edge1);
    let dot12 = edge1.dot(edge2);
    let dot22 = edge2.dot(edge2);
    // Degenerate triangles give an infinite scale and NaN coordinates, which fail every test.
    let inv_denom = 1.0 / (dot11 * dot22 - dot12 * dot12);
    Self {
      origin: a,
      edge1,
      edge2,
      dot11: dot11 * inv_denom,
      dot12: dot12 * inv_denom,
      dot22: dot22 * inv_denom,
    }
  }

  /// Inclusive containment: points on the edges count as inside.
  #[must_use]
  pub fn contains_point(&self, p: DVec2) -> bool {
    let test = p - self.origin;
    let dot_p1 = test.dot(self.edge1);
    let dot_p2 = test.dot(self.edge2);

    let u = self.dot22 * dot_p1 - self.dot12 * dot_p2;
    if u < 0.0 {
      return false;
    }
    let v = self.dot11 * dot_p2 - self.dot12 * dot_p1;
    v >= 0.0 && u + v <= 1.0
  }
}
