// src/coords/warp.rs

//! Area-equalizing warp applied to face-plane polar coordinates.
//!
//! The angle is warped within each quintant by a scaled tangent that leaves
//! the quintant edges fixed, and the radius by a tangent whose strength
//! depends on the warped angle. Both maps have closed-form inverses.

use std::sync::LazyLock;

use crate::constants::{DISTANCE_TO_EDGE, PI_OVER_5, TWO_PI_OVER_5, WARP_FACTOR};
use crate::types::Polar;

/// Maximum angular offset from a quintant bisector.
const BETA_MAX: f64 = PI_OVER_5;

/// Normalizes `warp_beta` so that `BETA_MAX` maps onto itself.
static WARP_SCALER: LazyLock<f64> = LazyLock::new(|| raw_warp_beta(BETA_MAX) / BETA_MAX);

/// Wraps `gamma` into `[-PI/5, PI/5]` around the nearest quintant bisector.
#[inline]
#[must_use]
pub fn normalize_gamma(gamma: f64) -> f64 {
  let segment = gamma / TWO_PI_OVER_5;
  // Halves round towards +infinity
  let s_center = (segment + 0.5).floor();
  (segment - s_center) * TWO_PI_OVER_5
}

#[inline]
fn raw_warp_beta(beta: f64) -> f64 {
  (beta * WARP_FACTOR).tan()
}

#[inline]
fn raw_unwarp_beta(beta: f64) -> f64 {
  beta.atan() / WARP_FACTOR
}

/// Warps a bisector-relative angle.
#[inline]
#[must_use]
pub fn warp_beta(beta: f64) -> f64 {
  raw_warp_beta(beta) / *WARP_SCALER
}

/// Inverse of `warp_beta`.
#[inline]
#[must_use]
pub fn unwarp_beta(beta: f64) -> f64 {
  raw_unwarp_beta(beta * *WARP_SCALER)
}

#[inline]
fn rho_factor(beta: f64) -> f64 {
  let beta_ratio = beta.abs() / BETA_MAX;
  0.95 - 0.05 * beta_ratio
}

/// Warps a radius given the (warped) bisector-relative angle.
#[inline]
#[must_use]
pub fn warp_rho(rho: f64, beta: f64) -> f64 {
  (rho * rho_factor(beta)).tan()
}

/// Inverse of `warp_rho` for the same `beta`.
#[inline]
#[must_use]
pub fn unwarp_rho(rho: f64, beta: f64) -> f64 {
  rho.atan() / rho_factor(beta)
}

/// Warps a face-plane polar coordinate.
#[must_use]
pub fn warp_polar(polar: Polar) -> Polar {
  let Polar { rho, gamma } = polar;
  let beta = normalize_gamma(gamma);
  let beta2 = warp_beta(beta);
  let delta_beta = beta2 - beta;

  // Distance to the edge changes with the angle, rescale so edges line up.
  let scale = beta.cos() / beta2.cos();
  let rho_out = scale * rho;

  let rho_max = DISTANCE_TO_EDGE / beta2.cos();
  let scale2 = warp_rho(rho_max, beta2) / rho_max;
  Polar {
    rho: warp_rho(rho_out, beta2) / scale2,
    gamma: gamma + delta_beta,
  }
}

/// Inverse of `warp_polar`.
#[must_use]
pub fn unwarp_polar(polar: Polar) -> Polar {
  let Polar { rho, gamma } = polar;
  let beta2 = normalize_gamma(gamma);
  let beta = unwarp_beta(beta2);
  let delta_beta = beta2 - beta;

  let rho_max = DISTANCE_TO_EDGE / beta2.cos();
  let scale2 = warp_rho(rho_max, beta2) / rho_max;
  let rho_unwarped = unwarp_rho(rho * scale2, beta2);

  let scale = beta.cos() / beta2.cos();
  Polar {
    rho: rho_unwarped / scale,
    gamma: gamma - delta_beta,
  }
}
