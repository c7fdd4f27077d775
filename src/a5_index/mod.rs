// src/a5_index/mod.rs
#![allow(clippy::cast_possible_truncation)] // Top 6 bits always fit in usize

//! 64-bit cell identifiers.
//!
//! Bit layout, most significant first:
//!
//! ```text
//! | 6 bits          | 2 * (res - 2) bits | 1      | zeros |
//! | origin/segment  | Hilbert index S    | marker |       |
//! ```
//!
//! The top 6 bits hold `5 * origin + segment_offset`, or just the origin at
//! resolution 1. S is only present from resolution 3 upward. The marker bit
//! is the lowest set bit and its position encodes the resolution: one bit per
//! level below resolution 3, two bits per level from there on. Resolution 0
//! is the all-zero index.

pub mod inspection;
pub mod string_conv;

use crate::constants::{FIRST_HILBERT_RESOLUTION, HILBERT_START_BIT, MAX_RESOLUTION, NUM_SEGMENTS, REMOVAL_MASK};
use crate::origin::origins;
use crate::types::{A5Cell, A5Error, A5Index, A5_WORLD_CELL};

pub use inspection::{get_num_cells, is_valid_cell};
pub use string_conv::{a5_to_string, hex_to_u64, string_to_a5, u64_to_hex};

/// Gets the raw origin/segment field (top 6 bits).
#[inline(always)]
#[must_use]
pub const fn get_origin_segment_bits(index: A5Index) -> u64 {
  index.0 >> HILBERT_START_BIT
}

/// Number of bits S occupies at `resolution` (0 below the Hilbert resolutions).
#[inline]
#[must_use]
pub const fn hilbert_bits(resolution: i32) -> u32 {
  if resolution < FIRST_HILBERT_RESOLUTION {
    0
  } else {
    2 * (resolution - FIRST_HILBERT_RESOLUTION + 1) as u32
  }
}

/// Offset of the resolution marker below `HILBERT_START_BIT`.
#[inline]
const fn marker_offset(resolution: i32) -> u32 {
  if resolution < FIRST_HILBERT_RESOLUTION {
    resolution as u32
  } else {
    hilbert_bits(resolution) + 1
  }
}

/// Gets the resolution of an index from the position of its lowest set bit.
///
/// Resolution 31 has no marker bit, so it is never reported.
#[must_use]
pub fn get_resolution(index: A5Index) -> i32 {
  let mut resolution = MAX_RESOLUTION - 1;
  let mut shifted = index.0 >> 1;
  while resolution > 0 && shifted & 1 == 0 {
    resolution -= 1;
    shifted >>= if resolution < FIRST_HILBERT_RESOLUTION { 1 } else { 2 };
  }
  resolution
}

/// Encodes a cell as an `A5Index`.
///
/// # Errors
/// * `A5Error::ResDomain` if the resolution is outside 0..=31.
/// * `A5Error::CellInvalid` if the segment is outside 0..5.
/// * `A5Error::IndexOverflow` if S does not fit at the cell's resolution.
pub fn serialize(cell: &A5Cell) -> Result<A5Index, A5Error> {
  let A5Cell { origin, segment, s, resolution } = *cell;
  if !(0..=MAX_RESOLUTION).contains(&resolution) {
    return Err(A5Error::ResDomain);
  }
  if segment >= NUM_SEGMENTS {
    return Err(A5Error::CellInvalid);
  }
  if resolution == 0 {
    return Ok(A5_WORLD_CELL);
  }

  let top_bits = if resolution == 1 {
    origin.id as u64
  } else {
    let segment_offset = (segment + NUM_SEGMENTS - origin.first_quintant) % NUM_SEGMENTS;
    (NUM_SEGMENTS * origin.id + segment_offset) as u64
  };
  let mut index = top_bits << HILBERT_START_BIT;

  let bits = hilbert_bits(resolution);
  if bits > 0 {
    if s >> bits != 0 {
      return Err(A5Error::IndexOverflow);
    }
    index |= s << (HILBERT_START_BIT - bits);
  }

  // Resolution 31 leaves no room for the marker.
  let marker = marker_offset(resolution);
  if marker <= HILBERT_START_BIT {
    index |= 1 << (HILBERT_START_BIT - marker);
  }

  Ok(A5Index(index))
}

/// Decodes an `A5Index` into its cell.
///
/// # Errors
/// `A5Error::CellInvalid` if the top bits name an origin outside 0..12.
pub fn deserialize(index: A5Index) -> Result<A5Cell, A5Error> {
  let resolution = get_resolution(index);
  let table = origins();

  if resolution == 0 {
    return Ok(A5Cell { origin: &table[0], segment: 0, s: 0, resolution });
  }

  let top_bits = get_origin_segment_bits(index) as usize;
  let (origin_id, segment_offset) = if resolution == 1 {
    (top_bits, None)
  } else {
    (top_bits / NUM_SEGMENTS, Some(top_bits % NUM_SEGMENTS))
  };
  let origin = table.get(origin_id).ok_or(A5Error::CellInvalid)?;
  let segment = segment_offset.map_or(0, |offset| (offset + origin.first_quintant) % NUM_SEGMENTS);

  let bits = hilbert_bits(resolution);
  let s = if bits == 0 {
    0
  } else {
    (index.0 & REMOVAL_MASK) >> (HILBERT_START_BIT - bits)
  };

  Ok(A5Cell { origin, segment, s, resolution })
}
