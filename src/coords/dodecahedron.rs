// src/coords/dodecahedron.rs

//! Projection between a face plane and the sphere: warp, gnomonic projection
//! around the pole, then rotation into the face's frame.

use glam::DQuat;

use crate::coords::gnomonic::{project_gnomonic, unproject_gnomonic};
use crate::coords::transforms::{to_cartesian, to_spherical};
use crate::coords::warp::{unwarp_polar, warp_polar};
use crate::math::quat;
use crate::types::{Cartesian, Polar, Spherical};

/// Projects an unwarped face polar coordinate onto the sphere.
///
/// `origin_rotation` is the face quaternion and `angle` the face's in-plane
/// rotation, added to the warped angle before projecting.
#[must_use]
pub fn project_dodecahedron(unwarped: Polar, origin_rotation: DQuat, angle: f64) -> Spherical {
  let warped = warp_polar(unwarped);
  let rotated = Polar {
    rho: warped.rho,
    gamma: warped.gamma + angle,
  };
  let on_pole = to_cartesian(project_gnomonic(rotated));
  to_spherical(Cartesian(quat::transform(on_pole.0, origin_rotation)))
}

/// Inverse of `project_dodecahedron`.
#[must_use]
pub fn unproject_dodecahedron(spherical: Spherical, origin_rotation: DQuat, angle: f64) -> Polar {
  let inverse = quat::invert(origin_rotation);
  let on_pole = quat::transform(to_cartesian(spherical).0, inverse);
  let mut polar = unproject_gnomonic(to_spherical(Cartesian(on_pole)));
  polar.gamma -= angle;
  unwarp_polar(polar)
}
