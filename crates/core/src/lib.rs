//! # mapalgebra Core
//!
//! Core types and traits for the mapalgebra map-algebra library.
//!
//! This crate provides:
//! - `Raster<T, P>`: Immutable, lazily evaluated raster grid
//! - `Extent`: Grid dimensions and intersection
//! - `Projection`, `Point`: Coordinate reference systems and reprojection
//! - Elementwise raster arithmetic operators
//! - Algorithm trait for consistent API

pub mod crs;
pub mod error;
pub mod raster;

pub use crs::{reproject, LatLng, Point, Projection, Sphere, WebMercator};
pub use error::{Error, Result};
pub use mapalgebra_parallel::{GridEvaluator, ProcessingMode, TiledProcessor};
pub use raster::{Element, Extent, NumericElement, Raster};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::crs::{reproject, LatLng, Point, Projection, Sphere, WebMercator};
    pub use crate::error::{Error, Result};
    pub use crate::raster::{Element, Extent, NumericElement, Raster};
    pub use crate::Algorithm;
    pub use mapalgebra_parallel::{ProcessingMode, TiledProcessor};
}

/// Core trait for all algorithms in mapalgebra.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(
        &self,
        input: Self::Input,
    ) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
