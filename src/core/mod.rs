pub mod color;
pub mod constants;
pub mod geometry;
pub mod grid;

pub use color::*;
pub use constants::*;
pub use geometry::*;
pub use grid::*;
