// src/indexing/to_a5.rs

use glam::DMat2;

use crate::a5_index::{hilbert_bits, serialize};
use crate::constants::{
  FIRST_HILBERT_RESOLUTION, MAX_RESOLUTION, SEARCH_MIN_LAT_COS, SEARCH_RADIUS_SCALE, SEARCH_SAMPLES, TWO_PI_OVER_5,
};
use crate::coords::dodecahedron::unproject_dodecahedron;
use crate::coords::transforms::{face_to_ij, from_lon_lat, rads_to_degs, to_face};
use crate::hilbert::ij_to_s;
use crate::origin::{find_nearest_origin, haversine, quintant_to_segment};
use crate::tiling::get_quintant;
use crate::types::{A5Cell, A5Error, A5Index, Face, LonLat};

use super::from_a5::{a5_cell_contains_point, get_pentagon};
use super::project::project_point;

/// Finds the A5 cell containing the given point at the specified resolution.
///
/// Below the Hilbert resolutions the answer is exact. From resolution 3 on,
/// the lattice lookup only approximates the pentagon tiling, so the point and
/// a spiral of nearby samples are tried until a candidate's boundary contains
/// the point; failing that, the candidate whose center is nearest on the
/// sphere wins.
///
/// # Arguments
/// * `lon_lat` - The point, in degrees.
/// * `res` - The A5 resolution (0-31).
///
/// # Errors
/// * `A5Error::ResDomain` for a resolution outside 0..=31.
/// * `A5Error::LonLatDomain` for non-finite coordinates.
/// * `A5Error::NoCandidate` if no sample produced a usable cell.
pub fn lon_lat_to_cell(lon_lat: LonLat, res: i32) -> Result<A5Index, A5Error> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(A5Error::ResDomain);
  }
  if !lon_lat.lon.is_finite() || !lon_lat.lat.is_finite() {
    return Err(A5Error::LonLatDomain);
  }

  if res < FIRST_HILBERT_RESOLUTION {
    let estimate = lon_lat_to_estimate(lon_lat, res).ok_or(A5Error::Failed)?;
    return serialize(&estimate);
  }

  let mut candidates = Vec::with_capacity(SEARCH_SAMPLES + 1);
  for sample in search_samples(lon_lat, res) {
    let Some(estimate) = lon_lat_to_estimate(sample, res) else {
      continue;
    };
    if a5_cell_contains_point(&estimate, lon_lat) {
      return serialize(&estimate);
    }
    candidates.push(estimate);
  }

  let target = from_lon_lat(lon_lat);
  let mut best: Option<(f64, A5Cell)> = None;
  for cell in candidates {
    let center = project_point(Face(get_pentagon(&cell).center()), cell.origin);
    let distance = haversine(from_lon_lat(center), target);
    let closer = match best {
      Some((nearest, _)) => distance < nearest,
      None => true,
    };
    if closer {
      best = Some((distance, cell));
    }
  }

  match best {
    Some((distance, cell)) => {
      log::debug!(
        "No candidate contains ({}, {}) at resolution {res}, using nearest center {:.6} degrees away",
        lon_lat.lon,
        lon_lat.lat,
        rads_to_degs(2.0 * distance.sqrt().min(1.0).asin())
      );
      serialize(&cell)
    }
    None => {
      log::warn!("No cell found for ({}, {}) at resolution {res}", lon_lat.lon, lon_lat.lat);
      Err(A5Error::NoCandidate)
    }
  }
}

/// The point itself followed by a spiral of samples whose radius shrinks
/// with the resolution.
///
/// Longitude offsets are divided by the cosine of the latitude so the spiral
/// covers the same ground distance at every latitude.
fn search_samples(lon_lat: LonLat, res: i32) -> impl Iterator<Item = LonLat> {
  let hilbert_res = 1 + res - FIRST_HILBERT_RESOLUTION;
  let scale = SEARCH_RADIUS_SCALE / 2f64.powi(hilbert_res);
  let lon_stretch = 1.0 / lon_lat.lat.to_radians().cos().max(SEARCH_MIN_LAT_COS);
  let spiral = (0..SEARCH_SAMPLES).map(move |i| {
    let step = i as f64;
    let r = step / SEARCH_SAMPLES as f64 * scale;
    LonLat::new(lon_lat.lon + step.cos() * r * lon_stretch, lon_lat.lat + step.sin() * r)
  });
  std::iter::once(lon_lat).chain(spiral)
}

/// Cell whose lattice triangle holds `lon_lat`. Only approximates the pentagon
/// tiling from resolution 3 on.
///
/// Returns `None` when the lattice position falls outside the segment.
fn lon_lat_to_estimate(lon_lat: LonLat, res: i32) -> Option<A5Cell> {
  let spherical = from_lon_lat(lon_lat);
  let origin = find_nearest_origin(spherical);

  let polar = unproject_dodecahedron(spherical, origin.quat, origin.angle);
  let mut dodec_point = to_face(polar).0;
  let quintant = get_quintant(dodec_point);
  let (segment, orientation) = quintant_to_segment(quintant, origin);
  if res < FIRST_HILBERT_RESOLUTION {
    return Some(A5Cell { origin, segment, s: 0, resolution: res });
  }

  // Rotate into the first quintant.
  if quintant != 0 {
    dodec_point = DMat2::from_angle(-TWO_PI_OVER_5 * quintant as f64) * dodec_point;
  }

  let hilbert_res = 1 + res - FIRST_HILBERT_RESOLUTION;
  dodec_point *= 2f64.powi(hilbert_res);

  let ij = face_to_ij(Face(dodec_point));
  let s = ij_to_s(ij, hilbert_res, orientation);
  if s.checked_shr(hilbert_bits(res)).unwrap_or(0) != 0 {
    log::trace!("Dropping estimate S={s} outside resolution {res} segment");
    return None;
  }
  Some(A5Cell { origin, segment, s, resolution: res })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::a5_index::get_resolution;

  #[test]
  fn test_lon_lat_to_cell_res_domain() {
    let point = LonLat::new(-122.4, 37.77);
    assert_eq!(lon_lat_to_cell(point, -1), Err(A5Error::ResDomain));
    assert_eq!(lon_lat_to_cell(point, 32), Err(A5Error::ResDomain));
  }

  #[test]
  fn test_lon_lat_to_cell_coord_domain() {
    assert_eq!(lon_lat_to_cell(LonLat::new(f64::NAN, 0.0), 5), Err(A5Error::LonLatDomain));
    assert_eq!(lon_lat_to_cell(LonLat::new(0.0, f64::INFINITY), 5), Err(A5Error::LonLatDomain));
  }

  #[test]
  fn test_lon_lat_to_cell_known_values() {
    let cases = [
      ((0.0, 0.0), 5, 0x4f08_0000_0000_0000u64),
      ((-73.9857, 40.7484), 10, 0x260c_9200_0000_0000),
      ((139.6917, 35.6895), 8, 0x86ef_a000_0000_0000),
      ((2.3522, 48.8566), 3, 0x6380_0000_0000_0000),
      ((-122.4194, 37.7749), 20, 0x1ae2_f853_5f60_0000),
    ];
    for ((lon, lat), res, expected) in cases {
      let index = lon_lat_to_cell(LonLat::new(lon, lat), res).unwrap();
      assert_eq!(index, A5Index(expected), "({lon}, {lat}) at {res}: {index}");
      assert_eq!(get_resolution(index), res);
    }
  }

  #[test]
  fn test_low_resolutions_are_exact() {
    let paris = LonLat::new(2.3522, 48.8566);
    assert_eq!(lon_lat_to_cell(paris, 0), Ok(A5Index(0)));
    assert_eq!(lon_lat_to_cell(paris, 1), Ok(A5Index(0x1200_0000_0000_0000)));
    assert_eq!(lon_lat_to_cell(paris, 2), Ok(A5Index(0x6100_0000_0000_0000)));
  }

  #[test]
  fn test_search_samples() {
    let samples: Vec<_> = search_samples(LonLat::new(10.0, 0.0), 3).collect();
    assert_eq!(samples.len(), SEARCH_SAMPLES + 1);
    assert_eq!(samples[0], LonLat::new(10.0, 0.0));
    // The first spiral sample has zero radius.
    assert_eq!(samples[1], LonLat::new(10.0, 0.0));
    let last = samples[SEARCH_SAMPLES];
    let radius = ((last.lon - 10.0).powi(2) + last.lat.powi(2)).sqrt();
    assert!((radius - 24.0 / 25.0 * 50.0 / 2.0).abs() < 1e-9);
  }

  #[test]
  fn test_search_samples_stretch_towards_poles() {
    let equator: Vec<_> = search_samples(LonLat::new(0.0, 0.0), 5).collect();
    let north: Vec<_> = search_samples(LonLat::new(0.0, 60.0), 5).collect();
    for (e, n) in equator.iter().zip(&north) {
      assert!((n.lon - 2.0 * e.lon).abs() < 1e-9);
      assert!((n.lat - 60.0 - e.lat).abs() < 1e-9);
    }
    let pole: Vec<_> = search_samples(LonLat::new(0.0, 90.0), 5).collect();
    assert!(pole.iter().all(|p| p.lon.is_finite()));
  }

  #[test]
  fn test_antimeridian_points_at_coarse_resolution() {
    let cases = [
      ((179.2, -18.3), 0x9780_0000_0000_0000u64),
      ((179.9, -52.4), 0xc780_0000_0000_0000),
      ((168.9, 68.0), 0x0280_0000_0000_0000),
    ];
    for ((lon, lat), expected) in cases {
      let point = LonLat::new(lon, lat);
      let index = lon_lat_to_cell(point, 3).unwrap();
      assert_eq!(index, A5Index(expected), "({lon}, {lat})");
      let cell = crate::a5_index::deserialize(index).unwrap();
      assert!(a5_cell_contains_point(&cell, point));
    }
  }

  #[test]
  fn test_longitude_turns_give_same_cell() {
    for (lon, lat, res) in [(179.2, -18.3, 3), (179.9, -52.4, 3), (-179.5, 10.0, 3), (179.9, 0.5, 7)] {
      let cell = lon_lat_to_cell(LonLat::new(lon, lat), res).unwrap();
      assert_eq!(lon_lat_to_cell(LonLat::new(lon - 360.0, lat), res), Ok(cell), "({lon}, {lat})");
      assert_eq!(lon_lat_to_cell(LonLat::new(lon + 360.0, lat), res), Ok(cell), "({lon}, {lat})");
    }
  }

  #[test]
  fn test_estimate_lands_in_segment() {
    let estimate = lon_lat_to_estimate(LonLat::new(-73.9857, 40.7484), 10).unwrap();
    assert!(estimate.s < 1 << hilbert_bits(10));
    assert_eq!(estimate.resolution, 10);
  }
}
