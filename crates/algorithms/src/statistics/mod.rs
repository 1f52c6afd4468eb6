//! Statistics across stacks of rasters
//!
//! - **cell_stats**: Per-cell mean, variety, majority and minority of an
//!   ordered list of same-sized rasters

mod cell_stats;

pub use cell_stats::{
    collect_values, majority, mean, minority, variety, Majority, Mean, Minority, ReduceParams,
    Variety,
};
