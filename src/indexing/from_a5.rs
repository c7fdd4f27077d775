// src/indexing/from_a5.rs

use glam::{DVec2, DVec3};

use crate::a5_index::deserialize;
use crate::constants::FIRST_HILBERT_RESOLUTION;
use crate::coords::normalize_longitudes;
use crate::coords::transforms::{from_lon_lat, to_cartesian};
use crate::geometry::PentagonShape;
use crate::hilbert::s_to_anchor;
use crate::origin::segment_to_quintant;
use crate::tiling::{get_face_vertices, get_pentagon_vertices, get_quintant_vertices};
use crate::types::{A5Cell, A5Error, A5Index, Face, LonLat};

use super::project::{project_pentagon, project_point};

/// Face-plane outline of a cell.
///
/// Resolution 1 is the whole face and resolution 2 a quintant triangle
/// (padded to five vertices). The world cell reuses the face outline of origin 0.
#[must_use]
pub fn get_pentagon(cell: &A5Cell) -> PentagonShape {
  let (quintant, orientation) = segment_to_quintant(cell.segment, cell.origin);
  if cell.resolution == FIRST_HILBERT_RESOLUTION - 1 {
    return get_quintant_vertices(quintant);
  }
  if cell.resolution < FIRST_HILBERT_RESOLUTION - 1 {
    return get_face_vertices();
  }

  let hilbert_res = cell.resolution - FIRST_HILBERT_RESOLUTION + 1;
  let anchor = s_to_anchor(cell.s, hilbert_res, orientation);
  get_pentagon_vertices(hilbert_res, quintant, &anchor)
}

/// Center of the cell, with the longitude wrapped into (-180, 180].
///
/// # Errors
/// `A5Error::CellInvalid` if `index` does not decode.
pub fn cell_to_lon_lat(index: A5Index) -> Result<LonLat, A5Error> {
  let cell = deserialize(index)?;
  let center = project_point(Face(get_pentagon(&cell).center()), cell.origin);
  normalize_longitudes(&[center]).first().copied().ok_or(A5Error::Failed)
}

/// The 5 boundary vertices of the cell, longitudes normalized as one ring.
///
/// # Errors
/// `A5Error::CellInvalid` if `index` does not decode.
pub fn cell_to_boundary(index: A5Index) -> Result<[LonLat; 5], A5Error> {
  let cell = deserialize(index)?;
  Ok(project_pentagon(&get_pentagon(&cell), cell.origin))
}

/// Whether `point` lies inside the projected boundary of `cell`.
///
/// The boundary and the point are projected onto the plane tangent to the
/// sphere at the cell's mean direction, so cell edges become straight lines
/// and the test holds across the antimeridian and at the poles. Longitudes
/// that differ by whole turns give the same answer.
#[must_use]
pub fn a5_cell_contains_point(cell: &A5Cell, point: LonLat) -> bool {
  let boundary = project_pentagon(&get_pentagon(cell), cell.origin);
  let ring = boundary.map(|p| to_cartesian(from_lon_lat(p)).0);
  let axis = ring.iter().sum::<DVec3>().normalize_or_zero();
  let (e1, e2) = axis.any_orthonormal_pair();

  // Gnomonic projection about `axis`; points on the far hemisphere never match.
  let to_plane = |v: DVec3| {
    let height = v.dot(axis);
    (height > 0.0).then(|| DVec2::new(v.dot(e1), v.dot(e2)) / height)
  };

  let Some(target) = to_plane(to_cartesian(from_lon_lat(point)).0) else {
    return false;
  };
  let mut vertices = [DVec2::ZERO; 5];
  for (plane, vertex) in vertices.iter_mut().zip(ring) {
    match to_plane(vertex) {
      Some(projected) => *plane = projected,
      None => return false,
    }
  }
  PentagonShape::new(vertices).contains_point(target)
}
