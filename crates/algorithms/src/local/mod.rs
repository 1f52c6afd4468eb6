//! Local (cell-by-cell) operations
//!
//! Every output cell depends only on the input cells at the same
//! coordinate:
//! - Classify: breakpoint-based value classification
//! - Band math: unary transforms and binary arithmetic
//! - Local min / max of two rasters

mod band_math;
mod classify;

pub use band_math::{band_math, band_math_binary, local_max, local_min, BandMathOp};
pub use classify::{classify, Breakpoints};
