// src/indexing/project.rs

//! Face-plane geometry back onto the globe.

use glam::DMat2;

use crate::constants::PI_OVER_5;
use crate::coords::dodecahedron::project_dodecahedron;
use crate::coords::normalize_longitudes;
use crate::coords::transforms::{to_lon_lat, to_polar};
use crate::geometry::PentagonShape;
use crate::origin::{find_nearest_origin, is_nearest_origin, move_point_to_face, Origin};
use crate::types::{Face, LonLat};

/// Projects a face-plane vertex of `origin` to longitude/latitude.
///
/// Vertices that land closer to a neighbouring face are re-projected through
/// that face so boundaries stay continuous across face edges. The longitude
/// is not wrapped.
#[must_use]
pub fn project_point(vertex: Face, origin: &Origin) -> LonLat {
  let mut point = project_dodecahedron(to_polar(vertex), origin.quat, origin.angle);
  let closest = if is_nearest_origin(point, origin) {
    origin
  } else {
    find_nearest_origin(point)
  };

  if closest.id != origin.id {
    let rotated = Face(DMat2::from_angle(origin.angle) * vertex.0);
    let (offset, interface) = move_point_to_face(rotated, origin, closest);

    #[allow(clippy::float_cmp)] // Face angles are exact constants
    let angle = if origin.angle != closest.angle && closest.angle != 0.0 {
      -PI_OVER_5
    } else {
      0.0
    };

    let mut polar = to_polar(offset);
    polar.gamma -= angle;
    point = project_dodecahedron(polar, interface, angle);
  }

  to_lon_lat(point)
}

/// Projects every vertex of `pentagon` and normalizes the longitudes so the
/// ring does not jump across the antimeridian.
#[must_use]
pub fn project_pentagon(pentagon: &PentagonShape, origin: &Origin) -> [LonLat; 5] {
  let projected = pentagon.vertices().map(|vertex| project_point(Face(vertex), origin));
  let normalized = normalize_longitudes(&projected);
  std::array::from_fn(|i| normalized[i])
}
