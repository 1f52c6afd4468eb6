//! # mapalgebra Algorithms
//!
//! Map algebra operations built on the lazy rasters of `mapalgebra-core`.
//!
//! ## Available Algorithm Categories
//!
//! - **local**: Classification, band math, local min/max
//! - **statistics**: Per-cell mean, variety, majority, minority over raster stacks
//!
//! Every operation returns a lazy raster; nothing is computed until the
//! result is read or materialized.

pub mod local;
pub mod statistics;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::local::{
        band_math, band_math_binary, classify, local_max, local_min, BandMathOp, Breakpoints,
    };
    pub use crate::statistics::{
        collect_values, majority, mean, minority, variety, Majority, Mean, Minority, ReduceParams,
        Variety,
    };
    pub use mapalgebra_core::prelude::*;
}
