// src/coords/gnomonic.rs

use crate::types::{Polar, Spherical};

/// Projects a tangent-plane polar coordinate onto the unit sphere.
#[inline]
#[must_use]
pub fn project_gnomonic(polar: Polar) -> Spherical {
  Spherical {
    theta: polar.gamma,
    phi: polar.rho.atan(),
  }
}

/// Unprojects a spherical point onto the tangent plane at the north pole.
#[inline]
#[must_use]
pub fn unproject_gnomonic(spherical: Spherical) -> Polar {
  Polar {
    rho: spherical.phi.tan(),
    gamma: spherical.theta,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;
  use std::f64::consts::FRAC_PI_4;

  #[test]
  fn test_project_gnomonic() {
    let s = project_gnomonic(Polar { rho: 1.0, gamma: 0.3 });
    assert_abs_diff_eq!(s.phi, FRAC_PI_4);
    assert_abs_diff_eq!(s.theta, 0.3);

    let s = project_gnomonic(Polar { rho: 0.0, gamma: -1.0 });
    assert_abs_diff_eq!(s.phi, 0.0);
  }

  #[test]
  fn test_gnomonic_round_trip() {
    for &(rho, gamma) in &[(0.001, 0.0), (0.1, 0.5), (0.5, -1.2), (1.0, 3.0), (2.0, -2.9)] {
      let back = unproject_gnomonic(project_gnomonic(Polar { rho, gamma }));
      assert_abs_diff_eq!(back.rho, rho, epsilon = 1e-12);
      assert_abs_diff_eq!(back.gamma, gamma, epsilon = 1e-12);
    }
  }
}
