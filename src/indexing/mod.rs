// src/indexing/mod.rs

pub mod from_a5;
pub mod project;
pub mod to_a5;

// Re-export public functions from submodules for easier access
pub use from_a5::{a5_cell_contains_point, cell_to_boundary, cell_to_lon_lat, get_pentagon};
pub use project::{project_pentagon, project_point};
pub use to_a5::lon_lat_to_cell;
