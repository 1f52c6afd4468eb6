//! Raster data structures and operations

mod element;
mod extent;
mod grid;
mod ops;

pub use element::{Element, NumericElement};
pub use extent::Extent;
pub use grid::Raster;
