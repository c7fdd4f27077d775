// src/a5_index/string_conv.rs

use std::fmt;
use std::str::FromStr;

use crate::types::{A5Error, A5Index};

/// Parses a hexadecimal cell id (no `0x` prefix).
///
/// # Errors
/// `A5Error::Failed` if the string is empty, not hexadecimal, or wider than 64 bits.
pub fn hex_to_u64(s: &str) -> Result<u64, A5Error> {
  if s.is_empty() {
    return Err(A5Error::Failed);
  }
  u64::from_str_radix(s, 16).map_err(|_| A5Error::Failed)
}

/// Formats a cell id as lowercase hex, without prefix or padding.
#[must_use]
pub fn u64_to_hex(value: u64) -> String {
  format!("{value:x}")
}

/// Converts a string representation of an A5 index into an `A5Index`.
///
/// # Errors
/// `A5Error::Failed` if parsing fails. The result is not checked for validity.
pub fn string_to_a5(s: &str) -> Result<A5Index, A5Error> {
  hex_to_u64(s).map(A5Index)
}

/// Converts an `A5Index` into its string representation.
#[must_use]
pub fn a5_to_string(index: A5Index) -> String {
  u64_to_hex(index.0)
}

impl fmt::LowerHex for A5Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

impl fmt::Display for A5Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

impl FromStr for A5Index {
  type Err = A5Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    string_to_a5(s)
  }
}
