//! Elementwise arithmetic operators for rasters.
//!
//! `a + b`, `a - b`, `a * b` and `a / b` combine two rasters with
//! [`Raster::zip_with`], so the result covers the intersection of both
//! extents and stays lazy. Arithmetic faults (integer overflow, division
//! by zero) behave exactly as the element type's own operator does.

use std::ops::{Add, Div, Mul, Sub};

use crate::crs::Projection;
use crate::raster::{Element, Raster};

macro_rules! impl_raster_op {
    ($trait:ident, $method:ident) => {
        impl<'a, T, P> $trait<&'a Raster<T, P>> for &'a Raster<T, P>
        where
            T: Element + $trait<Output = T>,
            P: Projection,
        {
            type Output = Raster<T, P>;

            fn $method(self, rhs: &'a Raster<T, P>) -> Raster<T, P> {
                self.zip_with(rhs, |a, b| $trait::$method(a, b))
            }
        }

        impl<T, P> $trait for Raster<T, P>
        where
            T: Element + $trait<Output = T>,
            P: Projection,
        {
            type Output = Raster<T, P>;

            fn $method(self, rhs: Raster<T, P>) -> Raster<T, P> {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

impl_raster_op!(Add, add);
impl_raster_op!(Sub, sub);
impl_raster_op!(Mul, mul);
impl_raster_op!(Div, div);

#[cfg(test)]
mod tests {
    use crate::raster::Raster;

    fn band(value: f64) -> Raster<f64> {
        Raster::constant((5, 5), value)
    }

    #[test]
    fn test_add_sub() {
        let a = band(3.0);
        let b = band(7.0);
        assert_eq!((&a + &b).get(2, 2).unwrap(), 10.0);
        assert_eq!((&a - &b).get(2, 2).unwrap(), -4.0);
    }

    #[test]
    fn test_owned_operands() {
        let product = band(2.5) * band(4.0);
        assert_eq!(product.get(4, 4).unwrap(), 10.0);
    }

    #[test]
    fn test_float_divide_by_zero_is_native() {
        let q = &band(1.0) / &band(0.0);
        assert!(q.get(0, 0).unwrap().is_infinite());
        let nan = &band(0.0) / &band(0.0);
        assert!(nan.get(0, 0).unwrap().is_nan());
    }

    #[test]
    fn test_operator_uses_intersection() {
        let a: Raster<i32> = Raster::constant((3, 8), 6);
        let b: Raster<i32> = Raster::constant((5, 2), 3);
        let q = &a / &b;
        assert_eq!(q.shape(), (3, 2));
        assert!(q.values().all(|v| v == 2));
    }

    #[test]
    #[should_panic]
    fn test_integer_divide_by_zero_panics_on_evaluation() {
        let a: Raster<i32> = Raster::constant((1, 1), 1);
        let b: Raster<i32> = Raster::constant((1, 1), 0);
        let q = &a / &b;
        let _ = q.get(0, 0);
    }
}
