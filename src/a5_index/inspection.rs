// src/a5_index/inspection.rs

use crate::constants::{MAX_RESOLUTION, NUM_ORIGINS, NUM_SEGMENTS};
use crate::types::{A5Error, A5Index};

use super::{deserialize, serialize};

/// Returns whether `index` is a canonical cell id: it decodes, and encoding
/// the decoded cell reproduces the exact same bits.
#[must_use]
pub fn is_valid_cell(index: A5Index) -> bool {
  deserialize(index).and_then(|cell| serialize(&cell)) == Ok(index)
}

/// Number of cells covering the globe at the given resolution.
///
/// # Errors
/// `A5Error::ResDomain` if `res` is outside 0..=31.
pub fn get_num_cells(res: i32) -> Result<u64, A5Error> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(A5Error::ResDomain);
  }
  let faces = NUM_ORIGINS as u64;
  Ok(match res {
    0 => 1,
    1 => faces,
    _ => faces * NUM_SEGMENTS as u64 * 4u64.pow((res - 2) as u32),
  })
}
