// src/coords/transforms.rs

use glam::DVec3;

use crate::constants::LONGITUDE_OFFSET;
use crate::geometry::pentagon::{BASIS, BASIS_INVERSE};
use crate::math::vec2d;
use crate::types::{Cartesian, Face, LonLat, Polar, Spherical, IJ};

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians.to_degrees()
}

/// Face-plane cartesian to polar.
#[inline]
#[must_use]
pub fn to_polar(face: Face) -> Polar {
  Polar {
    rho: vec2d::length(face.0),
    gamma: face.0.y.atan2(face.0.x),
  }
}

/// Polar to face-plane cartesian.
#[inline]
#[must_use]
pub fn to_face(polar: Polar) -> Face {
  let (s, c) = polar.gamma.sin_cos();
  Face(glam::DVec2::new(polar.rho * c, polar.rho * s))
}

/// Face-plane point to lattice coordinates.
#[inline]
#[must_use]
pub fn face_to_ij(face: Face) -> IJ {
  IJ(*BASIS_INVERSE * face.0)
}

/// Lattice coordinates to face-plane point.
#[inline]
#[must_use]
pub fn ij_to_face(ij: IJ) -> Face {
  Face(*BASIS * ij.0)
}

/// Cartesian direction to spherical angles. The vector need not be normalized.
#[must_use]
pub fn to_spherical(cartesian: Cartesian) -> Spherical {
  let v = cartesian.0;
  let theta = v.y.atan2(v.x);
  let r = v.length();
  Spherical { theta, phi: (v.z / r).acos() }
}

/// Spherical angles to a unit vector.
#[must_use]
pub fn to_cartesian(spherical: Spherical) -> Cartesian {
  let (sin_theta, cos_theta) = spherical.theta.sin_cos();
  let (sin_phi, cos_phi) = spherical.phi.sin_cos();
  Cartesian(DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi))
}

/// Geographic degrees to spherical radians, applying the layout's longitude offset.
#[inline]
#[must_use]
pub fn from_lon_lat(lon_lat: LonLat) -> Spherical {
  Spherical {
    theta: degs_to_rads(lon_lat.lon + LONGITUDE_OFFSET),
    phi: degs_to_rads(90.0 - lon_lat.lat),
  }
}

/// Spherical radians to geographic degrees. The longitude is not wrapped.
#[inline]
#[must_use]
pub fn to_lon_lat(spherical: Spherical) -> LonLat {
  LonLat {
    lon: rads_to_degs(spherical.theta) - LONGITUDE_OFFSET,
    lat: 90.0 - rads_to_degs(spherical.phi),
  }
}

/// Shifts longitudes by multiples of 360 degrees so that every point lies
/// within 180 degrees of the contour's circular mean longitude.
///
/// A single point is wrapped into `(-180, 180]`.
#[must_use]
pub fn normalize_longitudes(contour: &[LonLat]) -> Vec<LonLat> {
  if contour.is_empty() {
    return Vec::new();
  }
  let (sum_sin, sum_cos) = contour.iter().fold((0.0, 0.0), |(s, c), p| {
    let (sin, cos) = degs_to_rads(p.lon).sin_cos();
    (s + sin, c + cos)
  });
  let center = rads_to_degs(sum_sin.atan2(sum_cos));

  contour
    .iter()
    .map(|p| LonLat {
      lon: wrap_longitude(p.lon, center),
      lat: p.lat,
    })
    .collect()
}

/// Shifts `lon` by whole turns to within 180 degrees of `center`.
/// Longitudes already in range are returned unchanged.
fn wrap_longitude(lon: f64, center: f64) -> f64 {
  let delta = lon - center;
  if delta.abs() <= 180.0 {
    return lon;
  }
  center + (delta + 180.0).rem_euclid(360.0) - 180.0
}
