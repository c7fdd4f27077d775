#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::cast_possible_truncation)] // Bit fields and lattice indices, review carefully
#![allow(clippy::cast_precision_loss)] // Sample counters converted to f64
#![allow(clippy::cast_sign_loss)] // Resolutions are validated before casting
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // Reference coordinates read better unseparated
#![allow(clippy::similar_names)] // Can be common in math-heavy code

//! `xs-a5` is a Rust implementation of the A5 pentagonal discrete global grid.
//!
//! The globe is split into the 12 faces of a dodecahedron, each face into 5
//! triangular segments, and each segment is walked by a Hilbert curve over a
//! lattice of equal-area pentagons. A cell is identified by a 64-bit index.
//!
//! ```
//! use xs_a5::{cell_to_lon_lat, get_resolution, lon_lat_to_cell, LonLat};
//!
//! let cell = lon_lat_to_cell(LonLat::new(-73.9857, 40.7484), 10).unwrap();
//! assert_eq!(get_resolution(cell), 10);
//! let center = cell_to_lon_lat(cell).unwrap();
//! assert!((center.lat - 40.75).abs() < 0.1);
//! ```

// Declare modules
pub mod a5_index;
pub mod constants;
pub mod coords;
pub mod geometry;
pub mod hierarchy;
pub mod hilbert;
pub mod indexing;
pub mod math;
pub mod origin;
pub mod tiling;
pub mod types;

// Re-export key public types and functions for easier use
pub use constants::{FIRST_HILBERT_RESOLUTION, MAX_RESOLUTION};
pub use coords::normalize_longitudes;
pub use coords::transforms::{degs_to_rads, rads_to_degs};
pub use geometry::{pentagon_area, PentagonShape};
pub use origin::{origins, Origin};
pub use types::{
  A5Cell, A5Error, A5Index, Anchor, Cartesian, Face, Flip, LonLat, Orientation, Polar, Spherical, A5_WORLD_CELL, IJ, KJ,
};

pub use a5_index::{
  a5_to_string, deserialize, get_num_cells, get_resolution, hex_to_u64, is_valid_cell, serialize, string_to_a5,
  u64_to_hex,
};
pub use hierarchy::{cell_to_children, cell_to_children_size, cell_to_parent};
pub use indexing::{a5_cell_contains_point, cell_to_boundary, cell_to_lon_lat, lon_lat_to_cell};
