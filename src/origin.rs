// src/origin.rs

//! The 12 dodecahedron faces ("origins") in Hilbert curve order.

use std::sync::LazyLock;

use glam::{DQuat, DVec2, DVec3};

use crate::constants::{interhedral_angle, DISTANCE_TO_EDGE, M_PI, NUM_ORIGINS, NUM_SEGMENTS, PI_OVER_5, TWO_PI_OVER_5};
use crate::coords::transforms::to_cartesian;
use crate::math::quat;
use crate::types::{Face, Orientation, Spherical};

/// Order in which the Hilbert curve visits the quintants of a face, and the
/// curve orientation within each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuintantLayout {
  ClockwiseFan,
  ClockwiseStep,
  CounterStep,
  CounterJump,
}

impl QuintantLayout {
  /// Curve orientation per face-relative quintant.
  #[must_use]
  pub const fn orientations(self) -> [Orientation; NUM_SEGMENTS] {
    use Orientation::{UV, UW, VU, VW, WU, WV};
    match self {
      QuintantLayout::ClockwiseFan => [VU, UW, VW, VW, VW],
      QuintantLayout::ClockwiseStep => [WU, UW, VW, VU, UW],
      QuintantLayout::CounterStep => [WU, UV, WV, WU, UW],
      QuintantLayout::CounterJump => [VU, UV, WV, WU, UW],
    }
  }

  /// Winding direction: -1 for clockwise layouts, +1 otherwise.
  #[inline]
  #[must_use]
  pub const fn step(self) -> i32 {
    match self {
      QuintantLayout::ClockwiseFan | QuintantLayout::ClockwiseStep => -1,
      QuintantLayout::CounterStep | QuintantLayout::CounterJump => 1,
    }
  }
}

/// One dodecahedron face center and its local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
  /// Position along the global Hilbert curve (0-11).
  pub id: usize,
  /// Face center direction.
  pub axis: Spherical,
  /// Rotation taking the north pole onto `axis`.
  pub quat: DQuat,
  /// In-plane rotation of the face.
  pub angle: f64,
  /// Quintant traversal layout.
  pub layout: QuintantLayout,
  /// Quintant the Hilbert curve enters the face through.
  pub first_quintant: usize,
}

impl Origin {
  /// Curve orientation per face-relative quintant.
  #[inline]
  #[must_use]
  pub fn orientation(&self) -> [Orientation; NUM_SEGMENTS] {
    self.layout.orientations()
  }
}

// Layouts and entry quintants, indexed by generation order (north pole,
// alternating upper/lower band, south pole).
#[rustfmt::skip]
const GENERATED_LAYOUTS: [QuintantLayout; NUM_ORIGINS] = [
  QuintantLayout::ClockwiseFan,  // Arctic
  QuintantLayout::CounterJump,   // North America
  QuintantLayout::CounterStep,   // South America
  QuintantLayout::ClockwiseStep, // North Atlantic, Western Europe, Africa
  QuintantLayout::CounterStep,   // South Atlantic, Africa
  QuintantLayout::CounterJump,   // Europe, Middle East, Central Africa
  QuintantLayout::CounterStep,   // Indian Ocean
  QuintantLayout::ClockwiseStep, // Asia
  QuintantLayout::ClockwiseStep, // Australia
  QuintantLayout::ClockwiseStep, // North Pacific
  QuintantLayout::CounterJump,   // South Pacific
  QuintantLayout::CounterJump,   // Antarctic
];

const GENERATED_FIRST_QUINTANT: [usize; NUM_ORIGINS] = [4, 2, 3, 2, 0, 4, 3, 2, 2, 0, 3, 0];

/// Generation index of the face visited at each Hilbert position.
const ORIGIN_ORDER: [usize; NUM_ORIGINS] = [0, 1, 2, 4, 3, 5, 7, 8, 6, 11, 10, 9];

static ORIGINS: LazyLock<[Origin; NUM_ORIGINS]> = LazyLock::new(build_origins);

fn build_origins() -> [Origin; NUM_ORIGINS] {
  let interhedral = interhedral_angle();
  let mut axes = Vec::with_capacity(NUM_ORIGINS);
  axes.push((Spherical { theta: 0.0, phi: 0.0 }, 0.0));
  for i in 0..5 {
    let alpha = f64::from(i) * TWO_PI_OVER_5;
    let alpha2 = alpha + PI_OVER_5;
    axes.push((Spherical { theta: alpha, phi: interhedral }, PI_OVER_5));
    axes.push((Spherical { theta: alpha2, phi: M_PI - interhedral }, PI_OVER_5));
  }
  axes.push((Spherical { theta: 0.0, phi: M_PI }, 0.0));

  std::array::from_fn(|id| {
    let generated = ORIGIN_ORDER[id];
    let (axis, angle) = axes[generated];
    Origin {
      id,
      axis,
      quat: quat_from_spherical(axis),
      angle,
      layout: GENERATED_LAYOUTS[generated],
      first_quintant: GENERATED_FIRST_QUINTANT[generated],
    }
  })
}

/// Rotation taking the north pole onto the direction `axis`.
#[must_use]
pub fn quat_from_spherical(axis: Spherical) -> DQuat {
  quat::rotation_to(DVec3::Z, to_cartesian(axis).0)
}

/// The 12 origins, indexed by id.
#[inline]
#[must_use]
pub fn origins() -> &'static [Origin; NUM_ORIGINS] {
  &ORIGINS
}

/// Modified haversine: monotonic in the great-circle angle between `point`
/// and `axis`, 0 for identical points.
#[must_use]
pub fn haversine(point: Spherical, axis: Spherical) -> f64 {
  let d_theta = axis.theta - point.theta;
  let d_phi = axis.phi - point.phi;
  let a1 = (d_phi / 2.0).sin();
  let a2 = (d_theta / 2.0).sin();
  a1 * a1 + a2 * a2 * point.phi.sin() * axis.phi.sin()
}

/// Origin whose axis is closest to `point`. Ties go to the lower id.
#[must_use]
pub fn find_nearest_origin(point: Spherical) -> &'static Origin {
  let all = origins();
  let mut nearest = &all[0];
  let mut min_distance = f64::INFINITY;
  for origin in all {
    let distance = haversine(point, origin.axis);
    if distance < min_distance {
      min_distance = distance;
      nearest = origin;
    }
  }
  nearest
}

/// True when `point` is far (haversine above 0.49) from `origin`'s axis, in
/// which case boundary projection keeps the point on `origin`'s face.
#[inline]
#[must_use]
pub fn is_nearest_origin(point: Spherical, origin: &Origin) -> bool {
  haversine(point, origin.axis) > 0.49
}

/// Maps a geometric quintant to its Hilbert segment and curve orientation.
#[must_use]
pub fn quintant_to_segment(quintant: usize, origin: &Origin) -> (usize, Orientation) {
  let n = NUM_SEGMENTS as i32;
  let first = origin.first_quintant as i32;
  let delta = (quintant as i32 - first).rem_euclid(n);
  let face_relative = (origin.layout.step() * delta).rem_euclid(n) as usize;
  let segment = (origin.first_quintant + face_relative) % NUM_SEGMENTS;
  (segment, origin.orientation()[face_relative])
}

/// Inverse of `quintant_to_segment`.
#[must_use]
pub fn segment_to_quintant(segment: usize, origin: &Origin) -> (usize, Orientation) {
  let n = NUM_SEGMENTS as i32;
  let first = origin.first_quintant as i32;
  let face_relative = (segment as i32 - first).rem_euclid(n);
  let quintant = (first + origin.layout.step() * face_relative).rem_euclid(n) as usize;
  (quintant, origin.orientation()[face_relative as usize])
}

/// Re-expresses `point`, given in the frame of `from`, relative to the
/// adjacent face `to`.
///
/// Returns the moved point and the rotation to use when projecting it.
#[must_use]
pub fn move_point_to_face(point: Face, from: &Origin, to: &Origin) -> (Face, DQuat) {
  let inverse = quat::invert(from.quat);
  let to_axis = to_cartesian(to.axis).0;
  let local_to_axis = quat::transform(to_axis, inverse);

  // Flatten onto the face plane, distance between neighboring centers is 2 * DISTANCE_TO_EDGE
  let flat = DVec2::new(local_to_axis.x, local_to_axis.y);
  let direction = flat.normalize_or_zero() * (2.0 * DISTANCE_TO_EDGE);

  let interface = quat::multiply(from.quat, quat::rotation_to(DVec3::Z, local_to_axis));
  (Face(point.0 - direction), interface)
}
