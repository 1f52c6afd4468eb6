//! Band math operations
//!
//! Raster algebra: apply functions to one raster, or combine two rasters
//! element-wise. Two-raster operations cover the intersection of the
//! input extents.

use std::fmt;

use mapalgebra_core::raster::{Element, NumericElement, Raster};
use mapalgebra_core::Projection;

/// Binary arithmetic operations for band math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandMathOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BandMathOp {
    /// Apply this operation to a pair of values.
    ///
    /// No special-casing: integer overflow and division by zero do whatever
    /// the element type does natively.
    pub fn apply<T: NumericElement>(self, a: T, b: T) -> T {
        match self {
            BandMathOp::Add => a + b,
            BandMathOp::Subtract => a - b,
            BandMathOp::Multiply => a * b,
            BandMathOp::Divide => a / b,
        }
    }
}

impl fmt::Display for BandMathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BandMathOp::Add => "+",
            BandMathOp::Subtract => "-",
            BandMathOp::Multiply => "*",
            BandMathOp::Divide => "/",
        };
        f.write_str(symbol)
    }
}

/// Apply a unary function to every cell in a raster.
///
/// # Example
/// ```
/// use mapalgebra_algorithms::local::band_math;
/// use mapalgebra_core::Raster;
///
/// let dn: Raster<f64> = Raster::constant((10, 10), 5000.0);
/// let reflectance = band_math(&dn, |v| v * 0.0001);
/// assert!((reflectance.get(0, 0).unwrap() - 0.5).abs() < 1e-12);
/// ```
pub fn band_math<T, U, P, F>(raster: &Raster<T, P>, f: F) -> Raster<U, P>
where
    T: Element,
    U: Element,
    P: Projection,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    raster.map(f)
}

/// Apply a binary operation between two rasters element-wise.
///
/// # Arguments
/// * `a` - First raster
/// * `b` - Second raster
/// * `op` - Operation to apply
pub fn band_math_binary<T, P>(a: &Raster<T, P>, b: &Raster<T, P>, op: BandMathOp) -> Raster<T, P>
where
    T: NumericElement,
    P: Projection,
{
    a.zip_with(b, move |va, vb| op.apply(va, vb))
}

/// Element-wise minimum of two rasters
pub fn local_min<T, P>(a: &Raster<T, P>, b: &Raster<T, P>) -> Raster<T, P>
where
    T: Element + Ord,
    P: Projection,
{
    a.zip_with(b, |va, vb| va.min(vb))
}

/// Element-wise maximum of two rasters
pub fn local_max<T, P>(a: &Raster<T, P>, b: &Raster<T, P>) -> Raster<T, P>
where
    T: Element + Ord,
    P: Projection,
{
    a.zip_with(b, |va, vb| va.max(vb))
}
