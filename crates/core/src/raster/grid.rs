//! Main Raster type

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use mapalgebra_parallel::{GridEvaluator, ParallelStrategy, ProcessingMode};
use ndarray::Array2;
use num_traits::Zero;
use tracing::debug;

use crate::crs::{Projection, Sphere};
use crate::error::{Error, Result};
use crate::raster::{Element, Extent};

type CellFn<T> = dyn Fn(usize, usize) -> T + Send + Sync;

/// Where cell values come from.
enum Cells<T> {
    /// Computed on demand from (row, col)
    Lazy(Arc<CellFn<T>>),
    /// Evaluated buffer in row-major order
    Stored(Arc<Array2<T>>),
}

impl<T> Clone for Cells<T> {
    fn clone(&self) -> Self {
        match self {
            Cells::Lazy(f) => Cells::Lazy(Arc::clone(f)),
            Cells::Stored(data) => Cells::Stored(Arc::clone(data)),
        }
    }
}

/// An immutable, lazily evaluated 2D raster grid.
///
/// `Raster<T, P>` describes a grid of `T` values in projection `P`. Building,
/// transforming and combining rasters only composes closures; no cell is
/// evaluated until the raster is materialized, reduced, compared or read.
///
/// The projection tag exists only at compile time. Combining two rasters
/// requires the same `P`, but nothing checks that the grids are actually
/// co-registered; that is up to the caller.
///
/// Cloning is O(1): clones share the same cell source.
///
/// # Type Parameters
///
/// - `T`: The cell value type, must implement [`Element`]
/// - `P`: The projection tag, [`Sphere`] unless stated otherwise
///
/// # Example
///
/// ```
/// use mapalgebra_core::{Extent, ProcessingMode, Raster};
///
/// let ones: Raster<i32> = Raster::constant(Extent::new(256, 256), 1);
/// let fives = ones.map(|v| v * 5);
///
/// assert_eq!(fives.len(), 65536);
/// assert_eq!(fives.sum(ProcessingMode::Sequential), 327680);
/// ```
pub struct Raster<T, P = Sphere> {
    extent: Extent,
    cells: Cells<T>,
    crs: PhantomData<fn() -> P>,
}

impl<T, P> Clone for Raster<T, P> {
    fn clone(&self) -> Self {
        Self {
            extent: self.extent,
            cells: self.cells.clone(),
            crs: PhantomData,
        }
    }
}

impl<T: Element, P: Projection> Raster<T, P> {
    // Construction

    /// Create a lazy raster from a (row, col) generator
    pub fn from_fn<F>(extent: impl Into<Extent>, f: F) -> Self
    where
        F: Fn(usize, usize) -> T + Send + Sync + 'static,
    {
        Self {
            extent: extent.into(),
            cells: Cells::Lazy(Arc::new(f)),
            crs: PhantomData,
        }
    }

    /// Create a raster with the same value at every cell.
    ///
    /// O(1): no per-cell storage is allocated until the raster is
    /// materialized.
    pub fn constant(extent: impl Into<Extent>, value: T) -> Self {
        Self::from_fn(extent, move |_, _| value.clone())
    }

    /// Create a stored raster from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        let (rows, cols) = data.dim();
        Self {
            extent: Extent::new(rows, cols),
            cells: Cells::Stored(Arc::new(data)),
            crs: PhantomData,
        }
    }

    /// Create a stored raster from row-major data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::InvalidDimensions {
                rows,
                cols,
                len: data.len(),
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;
        Ok(Self::from_array(array))
    }

    // Dimensions

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.extent.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.extent.cols
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.extent.shape()
    }

    /// Total number of cells. Never evaluates a cell.
    pub fn len(&self) -> usize {
        self.extent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extent.is_empty()
    }

    /// Whether cells are backed by an evaluated buffer
    pub fn is_materialized(&self) -> bool {
        matches!(self.cells, Cells::Stored(_))
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if !self.extent.contains(row, col) {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.cell(row, col))
    }

    /// Evaluate the cell at (row, col) without bounds checking.
    ///
    /// Callers must keep (row, col) inside the extent. A stored raster
    /// panics outside it; a lazy one returns whatever its generator yields.
    pub fn cell(&self, row: usize, col: usize) -> T {
        match &self.cells {
            Cells::Lazy(f) => f(row, col),
            Cells::Stored(data) => data[(row, col)].clone(),
        }
    }

    /// Iterate over every cell in row-major order, evaluating as it goes
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        let (rows, cols) = self.shape();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| self.cell(row, col)))
    }

    // Local composition

    /// Apply `f` to every cell.
    ///
    /// Returns a lazy raster of the same extent; nothing is evaluated here.
    pub fn map<U, F>(&self, f: F) -> Raster<U, P>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = self.clone();
        Raster::from_fn(self.extent, move |row, col| f(source.cell(row, col)))
    }

    /// Combine two rasters cell by cell.
    ///
    /// The result covers the intersection of both extents (per-axis
    /// minimum); cells outside it are dropped. Non-overlapping inputs give
    /// an empty raster.
    pub fn zip_with<U, V, F>(&self, other: &Raster<U, P>, f: F) -> Raster<V, P>
    where
        U: Element,
        V: Element,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let a = self.clone();
        let b = other.clone();
        let extent = self.extent.intersection(&other.extent);
        Raster::from_fn(extent, move |row, col| f(a.cell(row, col), b.cell(row, col)))
    }

    /// Relabel the projection tag.
    ///
    /// The cells are untouched; this only asserts, on the caller's
    /// authority, that the grid is already laid out in `Q`.
    pub fn retag<Q: Projection>(self) -> Raster<T, Q> {
        Raster {
            extent: self.extent,
            cells: self.cells,
            crs: PhantomData,
        }
    }

    // Evaluation

    fn evaluate<E: GridEvaluator>(&self, evaluator: &E) -> Result<Array2<T>> {
        let (rows, cols) = self.shape();
        debug!(rows, cols, crs = P::NAME, "materializing raster");

        let data = evaluator.evaluate(rows, cols, |row, col| self.cell(row, col));
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))
    }

    /// Force every cell into a stored buffer.
    ///
    /// `evaluator` picks the partitioning: a [`ProcessingMode`] evaluates
    /// row bands, a [`TiledProcessor`](mapalgebra_parallel::TiledProcessor)
    /// evaluates square tiles. An already stored raster is returned as is.
    pub fn materialize<E: GridEvaluator>(&self, evaluator: &E) -> Result<Self> {
        if self.is_materialized() {
            return Ok(self.clone());
        }
        Ok(Self::from_array(self.evaluate(evaluator)?))
    }

    /// Drop back to a lazy raster reading from the current cell source
    pub fn into_lazy(self) -> Self {
        match self.cells {
            Cells::Lazy(_) => self,
            Cells::Stored(data) => {
                Self::from_fn(self.extent, move |row, col| data[(row, col)].clone())
            }
        }
    }

    /// Evaluate into an owned ndarray
    pub fn to_array<E: GridEvaluator>(&self, evaluator: &E) -> Result<Array2<T>> {
        match &self.cells {
            Cells::Stored(data) => Ok((**data).clone()),
            Cells::Lazy(_) => self.evaluate(evaluator),
        }
    }

    /// Fold every cell into one value.
    ///
    /// `op` must be associative and commutative with `identity` as its
    /// neutral element: rows are folded independently and the partial
    /// results are then folded together.
    pub fn reduce<F>(&self, mode: ProcessingMode, identity: T, op: F) -> T
    where
        F: Fn(T, T) -> T + Send + Sync,
    {
        let (rows, cols) = self.shape();
        debug!(rows, cols, ?mode, "reducing raster");

        let partials = mode.par_map(0..rows, |row| {
            (0..cols).fold(identity.clone(), |acc, col| op(acc, self.cell(row, col)))
        });
        partials.into_iter().fold(identity, &op)
    }

    /// Sum of all cells
    pub fn sum(&self, mode: ProcessingMode) -> T
    where
        T: Zero,
    {
        self.reduce(mode, T::zero(), |a, b| a + b)
    }
}

impl<T: Element + PartialEq, P: Projection> PartialEq for Raster<T, P> {
    /// Same extent and the same value at every cell. Evaluates both rasters.
    fn eq(&self, other: &Self) -> bool {
        self.extent == other.extent && self.values().zip(other.values()).all(|(a, b)| a == b)
    }
}

impl<T, P: Projection> fmt::Debug for Raster<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.cells {
            Cells::Lazy(_) => "lazy",
            Cells::Stored(_) => "stored",
        };
        f.debug_struct("Raster")
            .field("extent", &self.extent)
            .field("crs", &P::NAME)
            .field("state", &state)
            .finish()
    }
}
