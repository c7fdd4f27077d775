//! A5 core library constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// 2 * pi / 5, the angular span of one quintant
pub const TWO_PI_OVER_5: f64 = 2.0 * consts::PI / 5.0;
/// pi / 5, half a quintant
pub const PI_OVER_5: f64 = consts::PI / 5.0;
/// pi / 10
pub const PI_OVER_10: f64 = consts::PI / 10.0;

/// Golden ratio, (1 + sqrt(5)) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// Distance from a face center to the midpoint of one of its edges, on the
/// unit-sphere gnomonic plane (`PHI - 1`).
pub const DISTANCE_TO_EDGE: f64 = PHI - 1.0;

/// Dihedral angle between two adjacent dodecahedron faces (`2 * atan(PHI)`).
#[inline]
#[must_use]
pub fn dihedral_angle() -> f64 {
  2.0 * PHI.atan()
}

/// Angle between the axes of two adjacent faces (`PI - dihedral_angle`).
#[inline]
#[must_use]
pub fn interhedral_angle() -> f64 {
  M_PI - dihedral_angle()
}

// Coordinate layout
/// Empirical longitude rotation (degrees) applied before projection, so that
/// the earliest faces along the Hilbert order cover most of the populated land.
pub const LONGITUDE_OFFSET: f64 = 93.0;

// Warp
/// Angular warp strength applied within each triangular segment.
pub const WARP_FACTOR: f64 = 0.515;

// Resolution and bit layout
/// First resolution at which the Hilbert curve subdivides a segment.
pub const FIRST_HILBERT_RESOLUTION: i32 = 3;
/// Finest supported resolution.
pub const MAX_RESOLUTION: i32 = 31;
/// Bit position right below the 6-bit origin/segment header.
pub const HILBERT_START_BIT: u32 = 58;
/// Mask covering the 58 bits below the origin/segment header.
pub const REMOVAL_MASK: u64 = (1 << HILBERT_START_BIT) - 1;
/// Number of origins (dodecahedron faces).
pub const NUM_ORIGINS: usize = 12;
/// Number of triangular segments per face.
pub const NUM_SEGMENTS: usize = 5;

// Cell search
/// Number of offset samples tried around the input point by `lon_lat_to_cell`.
pub const SEARCH_SAMPLES: usize = 25;
/// Sample spiral radius, in degrees, at Hilbert resolution 0.
pub const SEARCH_RADIUS_SCALE: f64 = 50.0;
/// Floor on the latitude cosine that stretches sample longitudes near the poles.
pub const SEARCH_MIN_LAT_COS: f64 = 0.05;
