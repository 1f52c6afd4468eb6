//! Cell statistics across a stack of rasters
//!
//! Each statistic works in two steps: gather, per cell, the values of every
//! input raster in input order, then reduce that list. All inputs must
//! share one extent; an empty stack is rejected up front.
//!
//! Majority and minority break ties by first appearance: the counts are
//! kept in the order values were first seen, and a later value only
//! replaces the current answer when its count is strictly better.

use std::marker::PhantomData;

use mapalgebra_core::raster::{Element, NumericElement, Raster};
use mapalgebra_core::{Algorithm, Error, ProcessingMode, Projection, Result, Sphere};
use num_traits::NumCast;
use tracing::debug;

/// Values of every input raster at each cell, in input order.
///
/// # Errors
/// - [`Error::EmptyCollection`] if `rasters` is empty
/// - [`Error::SizeMismatch`] if the rasters do not share one extent
pub fn collect_values<T, P>(rasters: &[Raster<T, P>]) -> Result<Raster<Vec<T>, P>>
where
    T: Element,
    P: Projection,
{
    stack("collect_values", rasters)
}

fn stack<T, P>(operation: &'static str, rasters: &[Raster<T, P>]) -> Result<Raster<Vec<T>, P>>
where
    T: Element,
    P: Projection,
{
    let first = rasters.first().ok_or(Error::EmptyCollection { operation })?;
    let extent = first.extent();

    if let Some(other) = rasters.iter().find(|r| r.extent() != extent) {
        return Err(Error::SizeMismatch {
            er: extent.rows,
            ec: extent.cols,
            ar: other.rows(),
            ac: other.cols(),
        });
    }

    debug!(
        operation,
        count = rasters.len(),
        rows = extent.rows,
        cols = extent.cols,
        "stacking rasters"
    );

    let inputs = rasters.to_vec();
    Ok(Raster::from_fn(extent, move |row, col| {
        inputs.iter().map(|r| r.cell(row, col)).collect()
    }))
}

/// Per-cell mean: the sum of all values divided once by their count.
///
/// # Errors
/// Besides the stack errors of [`collect_values`], fails with
/// [`Error::InvalidParameter`] when the number of rasters is not
/// representable in `T` (e.g. 256 `u8` rasters).
pub fn mean<T, P>(rasters: &[Raster<T, P>]) -> Result<Raster<T, P>>
where
    T: NumericElement,
    P: Projection,
{
    let stacked = stack("mean", rasters)?;
    let count = <T as NumCast>::from(rasters.len()).ok_or_else(|| Error::InvalidParameter {
        name: "rasters",
        value: rasters.len().to_string(),
        reason: "raster count does not fit in the cell type".into(),
    })?;

    Ok(stacked.map(move |values: Vec<T>| {
        let sum = values.into_iter().fold(T::zero(), |acc, v| acc + v);
        sum / count
    }))
}

/// Per-cell number of distinct values
pub fn variety<T, P>(rasters: &[Raster<T, P>]) -> Result<Raster<usize, P>>
where
    T: Element + PartialEq,
    P: Projection,
{
    Ok(stack("variety", rasters)?.map(|values: Vec<T>| {
        let mut distinct: Vec<T> = Vec::with_capacity(values.len());
        for value in values {
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }
        distinct.len()
    }))
}

/// Per-cell most frequent value; ties go to the value seen first.
pub fn majority<T, P>(rasters: &[Raster<T, P>]) -> Result<Raster<T, P>>
where
    T: Element + PartialEq,
    P: Projection,
{
    Ok(stack("majority", rasters)?.map(|values| select(values, |count, best| count > best)))
}

/// Per-cell least frequent value; ties go to the value seen first.
pub fn minority<T, P>(rasters: &[Raster<T, P>]) -> Result<Raster<T, P>>
where
    T: Element + PartialEq,
    P: Projection,
{
    Ok(stack("minority", rasters)?.map(|values| select(values, |count, best| count < best)))
}

/// Occurrence counts in order of first appearance
fn tally<T: PartialEq>(values: Vec<T>) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

/// Scan the tally in insertion order, moving to a later value only when
/// `better(its_count, current_count)` holds.
///
/// `values` is never empty: `stack` rejects an empty input list, so every
/// cell sees one value per raster.
fn select<T: PartialEq>(values: Vec<T>, better: fn(usize, usize) -> bool) -> T {
    let mut counts = tally(values);
    let mut best = 0;
    for i in 1..counts.len() {
        if better(counts[i].1, counts[best].1) {
            best = i;
        }
    }
    counts.swap_remove(best).0
}

/// Parameters shared by the cell statistics algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceParams {
    /// Materialize the result with this strategy instead of returning it lazy
    pub materialize: Option<ProcessingMode>,
}

impl ReduceParams {
    fn finish<T: Element, P: Projection>(&self, raster: Raster<T, P>) -> Result<Raster<T, P>> {
        match &self.materialize {
            Some(mode) => raster.materialize(mode),
            None => Ok(raster),
        }
    }
}

macro_rules! cell_statistic {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<T, P = Sphere>(PhantomData<fn() -> (T, P)>);

        impl<T, P> $name<T, P> {
            pub fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T, P> Default for $name<T, P> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

cell_statistic!(
    /// [`mean`] as an [`Algorithm`]
    Mean
);
cell_statistic!(
    /// [`variety`] as an [`Algorithm`]
    Variety
);
cell_statistic!(
    /// [`majority`] as an [`Algorithm`]
    Majority
);
cell_statistic!(
    /// [`minority`] as an [`Algorithm`]
    Minority
);

impl<T: NumericElement, P: Projection> Algorithm for Mean<T, P> {
    type Input = Vec<Raster<T, P>>;
    type Output = Raster<T, P>;
    type Params = ReduceParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Mean"
    }

    fn description(&self) -> &'static str {
        "Per-cell arithmetic mean across a stack of rasters"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        params.finish(mean(&input)?)
    }
}

impl<T: Element + PartialEq, P: Projection> Algorithm for Variety<T, P> {
    type Input = Vec<Raster<T, P>>;
    type Output = Raster<usize, P>;
    type Params = ReduceParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Variety"
    }

    fn description(&self) -> &'static str {
        "Per-cell count of distinct values across a stack of rasters"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        params.finish(variety(&input)?)
    }
}

impl<T: Element + PartialEq, P: Projection> Algorithm for Majority<T, P> {
    type Input = Vec<Raster<T, P>>;
    type Output = Raster<T, P>;
    type Params = ReduceParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Majority"
    }

    fn description(&self) -> &'static str {
        "Per-cell most frequent value across a stack of rasters (first seen wins ties)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        params.finish(majority(&input)?)
    }
}

impl<T: Element + PartialEq, P: Projection> Algorithm for Minority<T, P> {
    type Input = Vec<Raster<T, P>>;
    type Output = Raster<T, P>;
    type Params = ReduceParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Minority"
    }

    fn description(&self) -> &'static str {
        "Per-cell least frequent value across a stack of rasters (first seen wins ties)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        params.finish(minority(&input)?)
    }
}
