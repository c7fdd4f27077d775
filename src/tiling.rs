// src/tiling.rs

//! Placement of primitive pentagons on the face plane.

use glam::{DMat2, DVec2};

use crate::constants::{M_2PI, NUM_SEGMENTS, TWO_PI_OVER_5};
use crate::geometry::pentagon::{v, v_angle, w, PentagonShape, BASIS, PENTAGON, TRIANGLE};
use crate::types::{Anchor, Flip};

#[inline]
fn quintant_rotation(quintant: usize) -> DMat2 {
  DMat2::from_angle(TWO_PI_OVER_5 * quintant as f64)
}

/// Pentagon of the cell at `anchor`, for a Hilbert resolution of at least 1,
/// in the face plane.
///
/// The order of operations matters: orient the primitive for the anchor's
/// flips and corner, move it to the anchor, shrink to the resolution, then
/// rotate into the quintant.
#[must_use]
pub fn get_pentagon_vertices(resolution: i32, quintant: usize, anchor: &Anchor) -> PentagonShape {
  let mut pentagon = PENTAGON.clone();
  let translation = *BASIS * anchor.offset.0;
  let [flip_x, flip_y] = anchor.flips;

  if flip_x == Flip::No && flip_y == Flip::Yes {
    pentagon.rotate180();
  }

  let k = anchor.k;
  let f = flip_x.sign() + flip_y.sign();
  // Both or neither flipped: orient the last two pentagons. One flip: the first and last.
  if ((f == -2 || f == 2) && k > 1) || (f == 0 && (k == 0 || k == 3)) {
    pentagon.reflect_y();
  }

  match (flip_x, flip_y) {
    (Flip::Yes, Flip::Yes) => {
      pentagon.rotate180();
    }
    (Flip::Yes, Flip::No) => {
      pentagon.translate(-w());
    }
    (Flip::No, Flip::Yes) => {
      pentagon.translate(w());
    }
    (Flip::No, Flip::No) => {}
  }

  pentagon
    .translate(translation)
    .scale(1.0 / 2f64.powi(resolution))
    .transform(quintant_rotation(quintant));
  pentagon
}

/// The whole quintant triangle (Hilbert resolution 0).
#[must_use]
pub fn get_quintant_vertices(quintant: usize) -> PentagonShape {
  let mut triangle = TRIANGLE.clone();
  triangle.transform(quintant_rotation(quintant));
  triangle
}

/// The outer pentagon of a face.
#[must_use]
pub fn get_face_vertices() -> PentagonShape {
  let corner = v();
  PentagonShape::new(std::array::from_fn(|quintant| quintant_rotation(quintant) * corner))
}

/// Angular sector (0-4) of a face-plane point. Sector 0 starts at the `v`
/// corner; each sector includes its upper boundary.
#[must_use]
pub fn get_quintant(point: DVec2) -> usize {
  let angle = point.y.atan2(point.x);
  let normalized = (angle - v_angle() + M_2PI) % M_2PI;
  (normalized / TWO_PI_OVER_5).ceil() as usize % NUM_SEGMENTS
}
