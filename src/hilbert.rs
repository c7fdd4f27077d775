// src/hilbert.rs

//! Hilbert curve over the triangular lattice of a quintant.
//!
//! A Hilbert index `S` at resolution `R` has `R` quaternary digits. Each digit
//! picks one of four children of the current cell; children are described in
//! the KJ basis (where both unit steps have unit length) and flip the curve
//! along one or both axes.

use glam::DVec2;

use crate::types::{Anchor, Flip, Orientation, IJ, KJ};

const K_POS: DVec2 = DVec2::new(1.0, 0.0);
const J_POS: DVec2 = DVec2::new(0.0, 1.0);
const K_NEG: DVec2 = DVec2::new(-1.0, 0.0);
const J_NEG: DVec2 = DVec2::new(0.0, -1.0);

/// Offset correction applied when the i and j axes are swapped on a flipped cell.
const FLIP_SHIFT: DVec2 = DVec2::new(-1.0, 1.0);

#[inline]
#[must_use]
pub fn ij_to_kj(ij: IJ) -> KJ {
  KJ(DVec2::new(ij.0.x + ij.0.y, ij.0.y))
}

#[inline]
#[must_use]
pub fn kj_to_ij(kj: KJ) -> IJ {
  IJ(DVec2::new(kj.0.x - kj.0.y, kj.0.y))
}

/// Offset of child `n` (0-3) relative to its parent, given the parent's flips.
#[must_use]
pub fn quaternary_to_kj(n: u8, flips: [Flip; 2]) -> KJ {
  let (p, q) = match flips {
    [Flip::No, Flip::No] => (K_POS, J_POS),
    // Swap and negate
    [Flip::Yes, Flip::No] => (J_NEG, K_NEG),
    // Swap only
    [Flip::No, Flip::Yes] => (J_POS, K_POS),
    // Negate only
    [Flip::Yes, Flip::Yes] => (K_NEG, J_NEG),
  };
  KJ(match n {
    0 => DVec2::ZERO,
    1 => p,
    2 => q + p,
    _ => q + p * 2.0,
  })
}

/// Reflections introduced by child `n`.
#[inline]
#[must_use]
pub const fn quaternary_to_flips(n: u8) -> [Flip; 2] {
  match n {
    1 => [Flip::No, Flip::Yes],
    3 => [Flip::Yes, Flip::No],
    _ => [Flip::No, Flip::No],
  }
}

#[inline]
fn compose_flips(a: [Flip; 2], b: [Flip; 2]) -> [Flip; 2] {
  [a[0].compose(b[0]), a[1].compose(b[1])]
}

/// Decodes `s` in the canonical `uv` orientation.
#[must_use]
pub fn s_to_anchor_uv(s: u64) -> Anchor {
  let mut offset = DVec2::ZERO;
  let mut flips = [Flip::No, Flip::No];

  let num_digits = if s == 0 { 0 } else { (64 - s.leading_zeros()).div_ceil(2) };
  for i in (0..num_digits).rev() {
    let digit = ((s >> (2 * i)) & 3) as u8;
    offset = offset * 2.0 + quaternary_to_kj(digit, flips).0;
    flips = compose_flips(flips, quaternary_to_flips(digit));
  }

  Anchor {
    k: (s % 4) as u8,
    offset: kj_to_ij(KJ(offset)),
    flips,
  }
}

/// Decodes Hilbert index `s` at `resolution` into the lattice anchor of its cell.
#[must_use]
pub fn s_to_anchor(s: u64, resolution: i32, orientation: Orientation) -> Anchor {
  let input = if orientation.reverse() { reverse_s(s, resolution) } else { s };
  let mut anchor = s_to_anchor_uv(input);

  if orientation.flip_ij() {
    let [flip_x, flip_y] = anchor.flips;
    let mut offset = DVec2::new(anchor.offset.0.y, anchor.offset.0.x);
    // Swapping axes moves the cell origin on flipped cells.
    if flip_x == Flip::Yes {
      offset += FLIP_SHIFT;
    }
    if flip_y == Flip::Yes {
      offset -= FLIP_SHIFT;
    }
    anchor.offset = IJ(offset);
  }

  if orientation.invert_j() {
    let IJ(DVec2 { x: i, y: j }) = anchor.offset;
    anchor.offset.0.y = resolution_span(resolution) - (i + j);
    anchor.flips[0] = anchor.flips[0].negate();
  }
  anchor
}

/// `4^resolution - s - 1`, wrapping for out of range inputs.
#[inline]
fn reverse_s(s: u64, resolution: i32) -> u64 {
  (1u64 << (2 * resolution)).wrapping_sub(s).wrapping_sub(1)
}

/// Side of the quintant lattice at `resolution`, `2^resolution`.
#[inline]
fn resolution_span(resolution: i32) -> f64 {
  2f64.powi(resolution)
}

/// Number of quaternary digits needed to reach `offset`.
#[must_use]
pub fn get_required_digits(offset: IJ) -> u32 {
  let index_sum = offset.0.x.ceil() + offset.0.y.ceil();
  if index_sum <= 0.0 {
    return 1;
  }
  1 + index_sum.log2().floor() as u32
}

/// Classifies an offset (in IJ units of the current child size) into one of
/// the four children. Lower boundaries are closed, upper ones open.
#[must_use]
pub fn ij_to_quaternary(uv: DVec2, flips: [Flip; 2]) -> u8 {
  let (u, v) = (uv.x, uv.y);
  let a = if flips[0] == Flip::Yes { -(u + v) } else { u + v };
  let b = if flips[1] == Flip::Yes { -u } else { u };
  let c = if flips[0] == Flip::Yes { -v } else { v };

  if flips[0].sign() + flips[1].sign() == 0 {
    // Exactly one flip
    if c < 1.0 {
      0
    } else if b > 1.0 {
      3
    } else if a > 1.0 {
      2
    } else {
      1
    }
  } else if a < 1.0 {
    0
  } else if b > 1.0 {
    3
  } else if c > 1.0 {
    2
  } else {
    1
  }
}

/// Encodes a lattice offset in the canonical `uv` orientation.
#[must_use]
pub fn ij_to_s_uv(input: IJ) -> u64 {
  let num_digits = get_required_digits(input);
  let mut flips = [Flip::No, Flip::No];
  let mut pivot = DVec2::ZERO;
  let mut s = 0u64;

  for i in 0..num_digits {
    let relative = input.0 - pivot;
    let scale = 2f64.powi((num_digits - 1 - i) as i32);
    let digit = ij_to_quaternary(relative * (1.0 / scale), flips);

    let child = kj_to_ij(quaternary_to_kj(digit, flips));
    pivot += child.0 * scale;
    flips = compose_flips(flips, quaternary_to_flips(digit));
    s = (s << 2) | u64::from(digit);
  }
  s
}

/// Encodes a lattice offset at `resolution` into a Hilbert index.
///
/// Offsets outside the quintant yield indices of `4^resolution` or more.
#[must_use]
pub fn ij_to_s(input: IJ, resolution: i32, orientation: Orientation) -> u64 {
  let mut ij = input.0;
  if orientation.flip_ij() {
    ij = DVec2::new(ij.y, ij.x);
  }
  if orientation.invert_j() {
    ij.y = resolution_span(resolution) - (ij.x + ij.y);
  }

  let s = ij_to_s_uv(IJ(ij));
  if orientation.reverse() {
    reverse_s(s, resolution)
  } else {
    s
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  fn nudged(anchor: &Anchor) -> IJ {
    let shift = match anchor.flips {
      [Flip::No, Flip::No] => DVec2::new(0.1, 0.1),
      [Flip::Yes, Flip::No] => DVec2::new(0.1, -0.2),
      [Flip::No, Flip::Yes] => DVec2::new(-0.1, 0.2),
      [Flip::Yes, Flip::Yes] => DVec2::new(-0.1, -0.1),
    };
    IJ(anchor.offset.0 + shift)
  }

  #[test]
  fn test_kj_ij() {
    let ij = IJ(DVec2::new(3.0, -2.0));
    assert_eq!(ij_to_kj(ij), KJ(DVec2::new(1.0, -2.0)));
    assert_eq!(kj_to_ij(ij_to_kj(ij)), ij);
  }

  #[test]
  fn test_quaternary_to_kj() {
    let no = [Flip::No, Flip::No];
    assert_eq!(quaternary_to_kj(0, no).0, DVec2::ZERO);
    assert_eq!(quaternary_to_kj(1, no).0, DVec2::new(1.0, 0.0));
    assert_eq!(quaternary_to_kj(2, no).0, DVec2::new(1.0, 1.0));
    assert_eq!(quaternary_to_kj(3, no).0, DVec2::new(2.0, 1.0));

    let both = [Flip::Yes, Flip::Yes];
    assert_eq!(quaternary_to_kj(3, both).0, DVec2::new(-2.0, -1.0));
    assert_eq!(quaternary_to_kj(1, [Flip::Yes, Flip::No]).0, DVec2::new(0.0, -1.0));
    assert_eq!(quaternary_to_kj(2, [Flip::No, Flip::Yes]).0, DVec2::new(1.0, 1.0));
  }

  #[test]
  fn test_quaternary_to_flips() {
    assert_eq!(quaternary_to_flips(0), [Flip::No, Flip::No]);
    assert_eq!(quaternary_to_flips(1), [Flip::No, Flip::Yes]);
    assert_eq!(quaternary_to_flips(2), [Flip::No, Flip::No]);
    assert_eq!(quaternary_to_flips(3), [Flip::Yes, Flip::No]);
  }

  #[test]
  fn test_s_to_anchor_known_values() {
    use Flip::{No, Yes};
    let cases: [(u64, (f64, f64), [Flip; 2]); 15] = [
      (0, (0.0, 0.0), [No, No]),
      (9, (1.0, 2.0), [No, Yes]),
      (16, (4.0, 0.0), [No, Yes]),
      (17, (3.0, 1.0), [No, No]),
      (31, (1.0, 3.0), [No, Yes]),
      (77, (5.0, 4.0), [Yes, No]),
      (100, (6.0, 6.0), [No, No]),
      (101, (7.0, 6.0), [No, Yes]),
      (170, (0.0, 15.0), [No, No]),
      (411, (13.0, 15.0), [Yes, No]),
      (1762, (24.0, 27.0), [Yes, Yes]),
      (481_952, (192.0, 388.0), [Yes, Yes]),
      (192_885_192, (4280.0, 10098.0), [No, No]),
      (4_719_283_155, (51227.0, 27554.0), [Yes, Yes]),
      (7_123_456_789, (64685.0, 60853.0), [No, No]),
    ];
    for (s, (i, j), flips) in cases {
      let anchor = s_to_anchor_uv(s);
      assert_eq!(anchor.offset.0, DVec2::new(i, j), "Offset for s={s}");
      assert_eq!(anchor.flips, flips, "Flips for s={s}");
      assert_eq!(anchor.k, (s % 4) as u8);
    }
  }

  #[test]
  fn test_s_to_anchor_matches_uv_for_canonical_orientation() {
    for s in [0u64, 5, 63, 1000] {
      assert_eq!(s_to_anchor(s, 6, Orientation::UV), s_to_anchor_uv(s));
    }
  }

  #[test]
  fn test_get_required_digits() {
    let cases = [((0.0, 0.0), 1), ((1.0, 0.0), 1), ((2.0, 1.0), 2), ((4.0, 0.0), 3), ((8.0, 8.0), 5), ((16.0, 0.0), 5), ((32.0, 32.0), 7)];
    for ((i, j), expected) in cases {
      assert_eq!(get_required_digits(IJ(DVec2::new(i, j))), expected, "Digits for ({i}, {j})");
    }
    assert_eq!(get_required_digits(IJ(DVec2::new(-3.5, 1.0))), 1, "Negative sums need one digit");
  }

  #[test]
  fn test_ij_to_s_known_values() {
    let cases = [
      ((0.6, 0.6), 1),
      ((1.2, 0.5), 3),
      ((1.1, 1.1), 5),
      ((0.9, 2.5), 9),
      ((2.8, 0.5), 13),
      ((2.5, 1.5), 19),
      ((3.999, 3.999), 26),
      ((1.2, 3.5), 29),
      ((0.1, 3.9), 31),
    ];
    for ((i, j), expected) in cases {
      assert_eq!(ij_to_s_uv(IJ(DVec2::new(i, j))), expected, "S for ({i}, {j})");
    }
  }

  #[test]
  fn test_inverse_law_exhaustive_small_resolutions() {
    for orientation in Orientation::ALL {
      for resolution in 1..=5 {
        for s in 0..(1u64 << (2 * resolution)) {
          let anchor = s_to_anchor(s, resolution, orientation);
          let back = ij_to_s(nudged(&anchor), resolution, orientation);
          assert_eq!(back, s, "{orientation:?} resolution {resolution} s={s}");
        }
      }
    }
  }

  #[test]
  fn test_inverse_law_sampled_high_resolution() {
    let samples = [
      0u64, 1, 2, 3, 4, 9, 16, 17, 31, 77, 100, 101, 170, 411, 1762, 4410, 12387, 41872, 410_922, 1_247_878, 88_889_182,
    ];
    for orientation in Orientation::ALL {
      for &s in &samples {
        let anchor = s_to_anchor(s, 20, orientation);
        assert_eq!(ij_to_s(nudged(&anchor), 20, orientation), s, "{orientation:?} s={s}");
      }
    }
  }

  #[test]
  fn test_out_of_range_offset_overflows_resolution() {
    let s = ij_to_s(IJ(DVec2::new(40.0, 40.0)), 3, Orientation::UV);
    assert!(s >= 64, "Offsets outside the quintant do not fit in 3 digits");
  }

  #[test]
  fn test_invert_j_anchor() {
    let plain = s_to_anchor_uv(0);
    let inverted = s_to_anchor(0, 4, Orientation::WV);
    assert_eq!(inverted.flips[0], plain.flips[0].negate());
    assert_abs_diff_eq!(inverted.offset.0.y, 16.0 - (plain.offset.0.x + plain.offset.0.y));
  }
}
