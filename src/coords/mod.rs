// src/coords/mod.rs

pub mod dodecahedron;
pub mod gnomonic;
pub mod transforms;
pub mod warp;

pub use transforms::normalize_longitudes;
