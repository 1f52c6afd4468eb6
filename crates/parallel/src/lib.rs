//! # mapalgebra Parallel
//!
//! Evaluation strategies for raster grids.
//!
//! This crate provides:
//! - Sequential and row-parallel processing using Rayon
//! - Tiled processing for large grids

pub mod strategy;
pub mod tiled;

pub use strategy::{num_cpus, set_num_threads, GridEvaluator, ParallelStrategy, ProcessingMode};
pub use tiled::{Tile, TileIterator, TiledProcessor};
