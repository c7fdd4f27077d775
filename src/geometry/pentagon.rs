// src/geometry/pentagon.rs

//! Planar pentagons: the mutable `PentagonShape` and the primitive tiles the
//! lattice is built from.

use std::sync::{LazyLock, OnceLock};

use glam::{DAffine2, DMat2, DVec2, DVec3};

use crate::constants::{DISTANCE_TO_EDGE, PI_OVER_10, PI_OVER_5};
use crate::geometry::triangle::Triangle;
use crate::math::vec2d;

/// Five planar vertices with a lazily built triangulation for containment tests.
///
/// All mutating operations act in place and return `&mut Self` so they can be
/// chained on a fresh clone of a primitive.
#[derive(Debug, Clone, Default)]
pub struct PentagonShape {
  vertices: [DVec2; 5],
  triangles: OnceLock<[Triangle; 3]>,
}

impl PartialEq for PentagonShape {
  fn eq(&self, other: &Self) -> bool {
    self.vertices == other.vertices
  }
}

impl PentagonShape {
  #[must_use]
  pub fn new(vertices: [DVec2; 5]) -> Self {
    Self {
      vertices,
      triangles: OnceLock::new(),
    }
  }

  #[inline]
  #[must_use]
  pub fn vertices(&self) -> &[DVec2; 5] {
    &self.vertices
  }

  fn map_vertices(&mut self, f: impl Fn(DVec2) -> DVec2) -> &mut Self {
    for vertex in &mut self.vertices {
      *vertex = f(*vertex);
    }
    self.triangles = OnceLock::new();
    self
  }

  pub fn scale(&mut self, scale: f64) -> &mut Self {
    self.map_vertices(|v| v * scale)
  }

  /// Rotates by 180 degrees about the origin (negates both coordinates).
  pub fn rotate180(&mut self) -> &mut Self {
    self.map_vertices(|v| -v)
  }

  /// Reflects across the x axis (negates y).
  pub fn reflect_y(&mut self) -> &mut Self {
    self.map_vertices(|v| DVec2::new(v.x, -v.y))
  }

  pub fn translate(&mut self, translation: DVec2) -> &mut Self {
    self.map_vertices(|v| v + translation)
  }

  /// Applies a linear 2x2 transform.
  pub fn transform(&mut self, transform: DMat2) -> &mut Self {
    self.map_vertices(|v| transform * v)
  }

  /// Applies an affine transform.
  pub fn transform_2d(&mut self, transform: DAffine2) -> &mut Self {
    self.map_vertices(|v| transform.transform_point2(v))
  }

  /// Vertex mean.
  #[must_use]
  pub fn center(&self) -> DVec2 {
    self.vertices.iter().fold(DVec2::ZERO, |sum, v| sum + *v / 5.0)
  }

  /// Inclusive point-in-pentagon test over a fan triangulation from vertex 0.
  ///
  /// Assumes the pentagon is convex as seen from vertex 0.
  #[must_use]
  pub fn contains_point(&self, point: DVec2) -> bool {
    let triangles = self.triangles.get_or_init(|| {
      let v = &self.vertices;
      // Largest triangles first for an early exit.
      [2, 1, 3].map(|i| Triangle::new(v[0], v[i], v[i + 1]))
    });
    triangles.iter().any(|t| t.contains_point(point))
  }
}

/// Area of a planar polygon in 3D (fan triangulation from the first vertex).
#[must_use]
pub fn pentagon_area(vertices: &[DVec3]) -> f64 {
  let Some((&first, rest)) = vertices.split_first() else {
    return 0.0;
  };
  rest
    .windows(2)
    .map(|pair| 0.5 * (pair[0] - first).cross(pair[1] - first).length())
    .sum()
}

/// The primitive tile vertices, triangle corners and bisector angle.
struct Primitives {
  pentagon: [DVec2; 5],
  v: DVec2,
  w: DVec2,
  v_angle: f64,
}

static PRIMITIVES: LazyLock<Primitives> = LazyLock::new(|| {
  // Pentagon with interior angles 72 and ~127.95 degrees at a and b; c and d
  // come from circle intersections.
  let raw = [
    DVec2::new(0.0, 0.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(0.788_596_668_178_700_6, 1.614_910_802_423_776_4),
    DVec2::new(1.617_101_365_938_794_5, 1.054_928_690_397_459),
    DVec2::new(PI_OVER_10.cos(), PI_OVER_10.sin()),
  ];
  let c = raw[2];

  // Scale so edge midpoints sit at the dodecahedron's distance to edge, and
  // rotate the AC growth direction onto the quintant bisector.
  let edge_midpoint_d = 2.0 * vec2d::length(c) * PI_OVER_5.cos();
  let basis_rotation = PI_OVER_5 - c.y.atan2(c.x);
  let scale = 2.0 * DISTANCE_TO_EDGE / edge_midpoint_d;
  let rotation = DMat2::from_angle(basis_rotation);
  let pentagon = raw.map(|p| rotation * (p * scale));

  let c = pentagon[2];
  let bisector_angle = c.y.atan2(c.x) - PI_OVER_5;
  let l = DISTANCE_TO_EDGE / PI_OVER_5.cos();
  let v_angle = bisector_angle + PI_OVER_5;
  let w_angle = bisector_angle - PI_OVER_5;
  Primitives {
    pentagon,
    v: DVec2::new(l * v_angle.cos(), l * v_angle.sin()),
    w: DVec2::new(l * w_angle.cos(), l * w_angle.sin()),
    v_angle,
  }
});

/// The pentagon that tiles each quintant's lattice.
pub static PENTAGON: LazyLock<PentagonShape> = LazyLock::new(|| PentagonShape::new(PRIMITIVES.pentagon));

/// Quintant triangle `u, v, w` padded to five vertices (`w` repeated).
pub static TRIANGLE: LazyLock<PentagonShape> = LazyLock::new(|| {
  let (u, v, w) = (DVec2::ZERO, PRIMITIVES.v, PRIMITIVES.w);
  PentagonShape::new([u, v, w, w, w])
});

/// Lattice basis with columns `v` and `w`; maps IJ to face coordinates.
pub static BASIS: LazyLock<DMat2> = LazyLock::new(|| DMat2::from_cols(PRIMITIVES.v, PRIMITIVES.w));

/// Inverse of `BASIS`; maps face coordinates to IJ.
pub static BASIS_INVERSE: LazyLock<DMat2> = LazyLock::new(|| BASIS.inverse());

/// Triangle corner `v` of quintant 0.
#[inline]
#[must_use]
pub fn v() -> DVec2 {
  PRIMITIVES.v
}

/// Triangle corner `w` of quintant 0.
#[inline]
#[must_use]
pub fn w() -> DVec2 {
  PRIMITIVES.w
}

/// Polar angle of `v`, where quintant 0 starts.
#[inline]
#[must_use]
pub fn v_angle() -> f64 {
  PRIMITIVES.v_angle
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  fn square_ish() -> PentagonShape {
    PentagonShape::new([
      DVec2::new(0.0, 2.0),
      DVec2::new(2.0, 1.0),
      DVec2::new(1.0, -2.0),
      DVec2::new(-1.0, -2.0),
      DVec2::new(-2.0, 1.0),
    ])
  }

  #[test]
  fn test_contains_point() {
    let p = square_ish();
    assert!(p.contains_point(DVec2::ZERO));
    assert!(p.contains_point(DVec2::new(1.0, 0.5)));
    assert!(p.contains_point(DVec2::new(0.0, 2.0)), "Vertex is inside");
    assert!(!p.contains_point(DVec2::new(2.0, 2.0)));
    assert!(!p.contains_point(DVec2::new(0.0, -2.5)));
  }

  #[test]
  fn test_mutation_resets_triangulation() {
    let mut p = square_ish();
    assert!(p.contains_point(DVec2::ZERO));
    p.translate(DVec2::new(10.0, 0.0));
    assert!(!p.contains_point(DVec2::ZERO), "Cached triangles must follow the vertices");
    assert!(p.contains_point(DVec2::new(10.0, 0.0)));
  }

  #[test]
  fn test_transforms() {
    let mut p = square_ish();
    p.scale(2.0).rotate180().reflect_y();
    assert_eq!(p.vertices()[0], DVec2::new(0.0, 4.0));
    assert_eq!(p.vertices()[1], DVec2::new(-4.0, 2.0));

    let mut q = square_ish();
    q.transform(DMat2::from_cols(DVec2::new(0.0, 1.0), DVec2::new(-1.0, 0.0)));
    assert_eq!(q.vertices()[0], DVec2::new(-2.0, 0.0));

    let mut r = square_ish();
    r.transform_2d(DAffine2::from_scale_angle_translation(DVec2::splat(2.0), 0.0, DVec2::new(1.0, 1.0)));
    assert_eq!(r.vertices()[0], DVec2::new(1.0, 5.0));
  }

  #[test]
  fn test_clone_is_independent() {
    let mut copy = PENTAGON.clone();
    copy.scale(3.0);
    assert_ne!(copy, *PENTAGON);
    assert_abs_diff_eq!(PENTAGON.vertices()[2].x, 0.618_033_988_749_894_9, epsilon = 1e-12);
  }

  #[test]
  fn test_primitive_pentagon() {
    let expected = [
      (0.0, 0.0),
      (0.199_381_847_431_158_8, 0.375_413_822_391_423_8),
      (0.618_033_988_749_894_9, 0.449_027_976_579_585_4),
      (0.817_415_836_181_053_7, 0.073_614_154_188_161_7),
      (0.418_652_141_318_736, -0.073_614_154_188_161_61),
    ];
    for (vertex, (x, y)) in PENTAGON.vertices().iter().zip(expected) {
      assert_abs_diff_eq!(vertex.x, x, epsilon = 1e-12);
      assert_abs_diff_eq!(vertex.y, y, epsilon = 1e-12);
    }
    // c lies on the triangle corner v.
    assert_abs_diff_eq!(PENTAGON.vertices()[2].distance(v()), 0.0, epsilon = 1e-12);
  }

  #[test]
  fn test_triangle_and_basis() {
    assert_abs_diff_eq!(v_angle(), PI_OVER_5, epsilon = 1e-12);
    assert_abs_diff_eq!(w().x, v().x, epsilon = 1e-15);
    assert_abs_diff_eq!(w().y, -v().y, epsilon = 1e-15);
    assert_eq!(TRIANGLE.vertices()[0], DVec2::ZERO);
    assert_eq!(TRIANGLE.vertices()[3], w());

    let id = *BASIS * *BASIS_INVERSE;
    assert_abs_diff_eq!(id.x_axis.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(id.y_axis.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(BASIS_INVERSE.x_axis.x, 0.809_016_994_374_947_5, epsilon = 1e-12);
    assert_abs_diff_eq!(BASIS_INVERSE.y_axis.x, 1.113_516_364_411_606_8, epsilon = 1e-12);
  }

  #[test]
  fn test_center() {
    let c = square_ish().center();
    assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-15);
  }

  #[test]
  fn test_pentagon_area() {
    let unit_square = [
      DVec3::new(0.0, 0.0, 0.0),
      DVec3::new(1.0, 0.0, 0.0),
      DVec3::new(1.0, 1.0, 0.0),
      DVec3::new(0.5, 1.0, 0.0),
      DVec3::new(0.0, 1.0, 0.0),
    ];
    assert_abs_diff_eq!(pentagon_area(&unit_square), 1.0, epsilon = 1e-15);
    assert_eq!(pentagon_area(&[]), 0.0);
  }
}
