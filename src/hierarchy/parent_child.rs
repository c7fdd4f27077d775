// src/hierarchy/parent_child.rs

use crate::a5_index::{deserialize, serialize};
use crate::constants::{FIRST_HILBERT_RESOLUTION, MAX_RESOLUTION, NUM_SEGMENTS};
use crate::origin::{origins, Origin};
use crate::types::{A5Cell, A5Error, A5Index};

/// Resolution levels below `child_res` that multiply the Hilbert index.
#[inline]
fn hilbert_levels(parent_res: i32, child_res: i32) -> u32 {
  (child_res - parent_res.max(FIRST_HILBERT_RESOLUTION - 1)).max(0) as u32
}

fn validate_child_res(parent_res: i32, child_res: i32) -> Result<(), A5Error> {
  if child_res <= parent_res || child_res > MAX_RESOLUTION {
    return Err(A5Error::ResDomain);
  }
  Ok(())
}

/// Origins and segments a parent fans out over when descending to `child_res`.
fn fan_out(cell: &A5Cell, child_res: i32) -> (Vec<&'static Origin>, Vec<usize>) {
  let new_origins = if cell.resolution == 0 {
    origins().iter().collect()
  } else {
    vec![cell.origin]
  };
  let new_segments = if (cell.resolution == 0 && child_res > 1) || cell.resolution == 1 {
    (0..NUM_SEGMENTS).collect()
  } else {
    vec![cell.segment]
  };
  (new_origins, new_segments)
}

/// Produces the parent of `index` at `parent_res`, or one level up when `None`.
///
/// # Errors
/// * `A5Error::CellInvalid` if `index` does not decode.
/// * `A5Error::ResDomain` if `parent_res` is negative or not coarser than the cell.
pub fn cell_to_parent(index: A5Index, parent_res: Option<i32>) -> Result<A5Index, A5Error> {
  let cell = deserialize(index)?;
  let parent_res = parent_res.unwrap_or(cell.resolution - 1);
  if parent_res < 0 || parent_res >= cell.resolution {
    return Err(A5Error::ResDomain);
  }

  let shift = 2 * (cell.resolution - parent_res) as u32;
  let s = cell.s.checked_shr(shift).unwrap_or(0);
  serialize(&A5Cell { s, resolution: parent_res, ..cell })
}

/// Exact number of children `cell_to_children` would return.
///
/// # Errors
/// Same as [`cell_to_children`].
pub fn cell_to_children_size(index: A5Index, child_res: Option<i32>) -> Result<u64, A5Error> {
  let cell = deserialize(index)?;
  let child_res = child_res.unwrap_or(cell.resolution + 1);
  validate_child_res(cell.resolution, child_res)?;

  let (new_origins, new_segments) = fan_out(&cell, child_res);
  let per_segment = 1u64 << (2 * hilbert_levels(cell.resolution, child_res));
  Ok(new_origins.len() as u64 * new_segments.len() as u64 * per_segment)
}

/// Produces the children of `index` at `child_res`, or one level down when
/// `None`, in Hilbert order.
///
/// # Errors
/// * `A5Error::CellInvalid` if `index` does not decode.
/// * `A5Error::ResDomain` if `child_res` is not finer than the cell or exceeds 31.
pub fn cell_to_children(index: A5Index, child_res: Option<i32>) -> Result<Vec<A5Index>, A5Error> {
  let cell = deserialize(index)?;
  let child_res = child_res.unwrap_or(cell.resolution + 1);
  validate_child_res(cell.resolution, child_res)?;

  let (new_origins, new_segments) = fan_out(&cell, child_res);
  let levels = hilbert_levels(cell.resolution, child_res);
  let per_segment = 1u64 << (2 * levels);
  let shifted_s = cell.s << (2 * levels);

  let capacity = usize::try_from(new_origins.len() as u64 * new_segments.len() as u64 * per_segment)
    .map_err(|_| A5Error::ResDomain)?;
  let mut children = Vec::with_capacity(capacity);
  for &origin in &new_origins {
    for &segment in &new_segments {
      for i in 0..per_segment {
        children.push(serialize(&A5Cell {
          origin,
          segment,
          s: shifted_s + i,
          resolution: child_res,
        })?);
      }
    }
  }
  Ok(children)
}
