// src/math/quat.rs

//! Quaternion helpers.
//!
//! The dodecahedron frames are built from "shortest arc" rotations. The
//! antiparallel case is ambiguous, so the exact construction below is part of
//! the cell layout: changing the chosen axis would rotate the south face.
//!
//! `invert`, `multiply` and `transform` keep gl-matrix's operation order
//! rather than glam's `DQuat` operators, so that face frames and the cell ids
//! derived from them are bit-stable against reference encodings.

use glam::{DQuat, DVec3};

/// Shortest-arc rotation taking unit vector `a` onto unit vector `b`.
///
/// For (near) antiparallel inputs the rotation is PI about `x × a`, or about
/// `y × a` when `a` lies along x.
#[must_use]
pub fn rotation_to(a: DVec3, b: DVec3) -> DQuat {
  let dot = a.dot(b);
  if dot < -0.999_999 {
    let mut axis = DVec3::X.cross(a);
    if axis.length() < 0.000_001 {
      axis = DVec3::Y.cross(a);
    }
    return DQuat::from_axis_angle(axis.normalize(), std::f64::consts::PI);
  }
  if dot > 0.999_999 {
    return DQuat::IDENTITY;
  }
  let c = a.cross(b);
  DQuat::from_xyzw(c.x, c.y, c.z, 1.0 + dot).normalize()
}

/// Multiplicative inverse (conjugate over squared norm).
#[inline]
#[must_use]
pub fn invert(q: DQuat) -> DQuat {
  let dot = q.x * q.x + q.y * q.y + q.z * q.z + q.w * q.w;
  let inv = if dot == 0.0 { 0.0 } else { 1.0 / dot };
  DQuat::from_xyzw(-q.x * inv, -q.y * inv, -q.z * inv, q.w * inv)
}

/// Hamilton product `a * b` (apply `b`, then `a`).
#[inline]
#[must_use]
pub fn multiply(a: DQuat, b: DQuat) -> DQuat {
  DQuat::from_xyzw(
    a.x * b.w + a.w * b.x + a.y * b.z - a.z * b.y,
    a.y * b.w + a.w * b.y + a.z * b.x - a.x * b.z,
    a.z * b.w + a.w * b.z + a.x * b.y - a.y * b.x,
    a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
  )
}

/// Rotates `v` by the unit quaternion `q`.
#[must_use]
pub fn transform(v: DVec3, q: DQuat) -> DVec3 {
  let qv = DVec3::new(q.x, q.y, q.z);
  let uv = qv.cross(v);
  let uuv = qv.cross(uv);
  v + uv * (2.0 * q.w) + uuv * 2.0
}
