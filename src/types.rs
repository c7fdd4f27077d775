//! Core A5 data structures.

use glam::{DVec2, DVec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

use crate::origin::Origin;

/// Represents an A5 cell index.
/// This is a 64-bit unsigned integer; see `a5_index` for the bit layout.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct A5Index(pub u64);

/// The single resolution 0 cell covering the whole globe.
pub const A5_WORLD_CELL: A5Index = A5Index(0);

/// Longitude/latitude coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LonLat {
  /// Longitude in degrees.
  pub lon: f64,
  /// Latitude in degrees.
  pub lat: f64,
}

impl LonLat {
  #[inline]
  #[must_use]
  pub const fn new(lon: f64, lat: f64) -> Self {
    Self { lon, lat }
  }
}

/// Spherical coordinates in radians: azimuth `theta` and polar angle `phi`
/// measured from the north pole.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spherical {
  /// Azimuthal angle.
  pub theta: f64,
  /// Polar angle, 0 at the north pole and PI at the south pole.
  pub phi: f64,
}

/// Polar coordinates on a face plane.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polar {
  /// Distance from the face center.
  pub rho: f64,
  /// Angle from the face x axis.
  pub gamma: f64,
}

/// Point on the unit sphere (or any 3D direction).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cartesian(pub DVec3);

/// Planar point in a face's local frame, centered on the face origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face(pub DVec2);

/// Lattice coordinates along the pentagon growth directions `v` and `w`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IJ(pub DVec2);

/// Skewed lattice coordinates used while walking the Hilbert curve.
/// `i = k - j`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KJ(pub DVec2);

/// Curve orientation within a triangular segment, naming the corners
/// `{u, v, w}` the Hilbert curve enters and leaves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
  #[default]
  UV,
  VU,
  UW,
  WU,
  VW,
  WV,
}

impl Orientation {
  /// All six orientations.
  pub const ALL: [Orientation; 6] = [
    Orientation::UV,
    Orientation::VU,
    Orientation::UW,
    Orientation::WU,
    Orientation::VW,
    Orientation::WV,
  ];

  /// The curve runs backwards along S.
  #[inline]
  #[must_use]
  pub const fn reverse(self) -> bool {
    matches!(self, Orientation::VU | Orientation::WU | Orientation::VW)
  }

  /// The j axis is substituted with `2^resolution - (i + j)`.
  #[inline]
  #[must_use]
  pub const fn invert_j(self) -> bool {
    matches!(self, Orientation::WV | Orientation::VW)
  }

  /// The i and j axes are swapped.
  #[inline]
  #[must_use]
  pub const fn flip_ij(self) -> bool {
    matches!(self, Orientation::WU | Orientation::UW)
  }
}

/// Accumulated reflection along one lattice axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Flip {
  /// Reflected.
  Yes = -1,
  /// Not reflected.
  #[default]
  No = 1,
}

impl Flip {
  /// Signed value, `-1` for `Yes` and `1` for `No`.
  #[inline]
  #[must_use]
  pub const fn sign(self) -> i8 {
    self as i8
  }

  /// Composes two reflections (sign multiplication).
  #[inline]
  #[must_use]
  pub const fn compose(self, other: Flip) -> Flip {
    if self.sign() * other.sign() < 0 {
      Flip::Yes
    } else {
      Flip::No
    }
  }

  #[inline]
  #[must_use]
  pub const fn negate(self) -> Flip {
    match self {
      Flip::Yes => Flip::No,
      Flip::No => Flip::Yes,
    }
  }
}

/// Decoded Hilbert position: corner selector, lattice offset and the
/// reflections accumulated along the way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
  /// Quaternary corner selector (0-3).
  pub k: u8,
  /// Lattice offset in IJ units.
  pub offset: IJ,
  /// Reflection state per axis `[x, y]`.
  pub flips: [Flip; 2],
}

/// Working (deserialized) form of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct A5Cell {
  /// Dodecahedron face the cell lies on.
  pub origin: &'static Origin,
  /// Triangular segment (0-4) in Hilbert order.
  pub segment: usize,
  /// Position along the Hilbert curve within the segment.
  pub s: u64,
  /// Resolution (0-31).
  pub resolution: i32,
}

/// Represents an A5 error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum A5Error {
  /// The operation failed but a more specific error is not available.
  #[error("operation failed")]
  Failed = 1,
  /// Resolution argument was outside of acceptable range.
  #[error("resolution outside of acceptable range")]
  ResDomain = 2,
  /// Hilbert index does not fit in the bits available at its resolution.
  #[error("hilbert index too large for resolution")]
  IndexOverflow = 3,
  /// `A5Index` cell argument was not valid.
  #[error("invalid cell index")]
  CellInvalid = 4,
  /// Longitude or latitude arguments were not finite.
  #[error("longitude/latitude outside of acceptable range")]
  LonLatDomain = 5,
  /// The nearest cell search produced no candidate at all.
  #[error("no candidate cell found")]
  NoCandidate = 6,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_orientation_axes() {
    let reversed: Vec<_> = Orientation::ALL.iter().filter(|o| o.reverse()).collect();
    assert_eq!(reversed, [&Orientation::VU, &Orientation::WU, &Orientation::VW]);
    let inverted: Vec<_> = Orientation::ALL.iter().filter(|o| o.invert_j()).collect();
    assert_eq!(inverted, [&Orientation::VW, &Orientation::WV]);
    let flipped: Vec<_> = Orientation::ALL.iter().filter(|o| o.flip_ij()).collect();
    assert_eq!(flipped, [&Orientation::UW, &Orientation::WU]);
    assert!(!Orientation::UV.reverse() && !Orientation::UV.invert_j() && !Orientation::UV.flip_ij());
  }

  #[test]
  fn test_flip_composition() {
    assert_eq!(Flip::Yes.compose(Flip::Yes), Flip::No);
    assert_eq!(Flip::Yes.compose(Flip::No), Flip::Yes);
    assert_eq!(Flip::No.compose(Flip::No), Flip::No);
    assert_eq!(Flip::No.negate(), Flip::Yes);
    assert_eq!(Flip::Yes.sign() + Flip::No.sign(), 0);
  }

  #[test]
  fn test_error_display() {
    assert_eq!(A5Error::ResDomain.to_string(), "resolution outside of acceptable range");
    assert_eq!(A5Error::CellInvalid as u32, 4);
  }
}
