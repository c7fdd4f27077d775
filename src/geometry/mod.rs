// src/geometry/mod.rs

pub mod pentagon;
pub mod triangle;

pub use pentagon::{pentagon_area, PentagonShape};
pub use triangle::Triangle;
