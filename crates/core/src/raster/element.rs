//! Element traits for raster cell values

use num_traits::{Num, NumCast};
use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// Any cloneable, thread-safe value qualifies; lazy rasters share their
/// cell sources across threads.
pub trait Element: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Element for T {}

/// Numeric cell values that support raster arithmetic and averaging.
///
/// `NumCast` gives a checked conversion from counts and indices; a value
/// outside the type's range converts to `None` rather than wrapping.
pub trait NumericElement: Element + Copy + Debug + PartialOrd + Num + NumCast {}

impl<T: Element + Copy + Debug + PartialOrd + Num + NumCast> NumericElement for T {}
