//! Tiled evaluation for large grids

use crate::strategy::{GridEvaluator, ParallelStrategy, ProcessingMode};

/// A tile representing a rectangular block of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Row offset in the source grid
    pub row_offset: usize,
    /// Column offset in the source grid
    pub col_offset: usize,
    /// Number of rows in this tile
    pub rows: usize,
    /// Number of columns in this tile
    pub cols: usize,
}

impl Tile {
    /// Create a new tile
    pub fn new(row_offset: usize, col_offset: usize, rows: usize, cols: usize) -> Self {
        Self {
            row_offset,
            col_offset,
            rows,
            cols,
        }
    }

    /// Number of cells in this tile
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert tile-local coordinates to source grid coordinates
    pub fn to_source_coords(&self, local_row: usize, local_col: usize) -> (usize, usize) {
        (self.row_offset + local_row, self.col_offset + local_col)
    }
}

/// Iterator over non-overlapping tiles covering a grid.
///
/// Tiles are yielded in row-major order: every tile of a tile row before
/// the next tile row. Edge tiles are clipped to the grid.
pub struct TileIterator {
    total_rows: usize,
    total_cols: usize,
    tile_size: usize,
    current_row: usize,
    current_col: usize,
}

impl TileIterator {
    /// Create a new tile iterator. A zero tile size is treated as 1.
    pub fn new(total_rows: usize, total_cols: usize, tile_size: usize) -> Self {
        Self {
            total_rows,
            total_cols,
            tile_size: tile_size.max(1),
            current_row: 0,
            current_col: 0,
        }
    }
}

impl Iterator for TileIterator {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row >= self.total_rows || self.total_cols == 0 {
            return None;
        }

        let rows = self.tile_size.min(self.total_rows - self.current_row);
        let cols = self.tile_size.min(self.total_cols - self.current_col);
        let tile = Tile::new(self.current_row, self.current_col, rows, cols);

        self.current_col += self.tile_size;
        if self.current_col >= self.total_cols {
            self.current_col = 0;
            self.current_row += self.tile_size;
        }

        Some(tile)
    }
}

/// Processor that evaluates grids tile by tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiledProcessor {
    tile_size: usize,
    mode: ProcessingMode,
}

impl TiledProcessor {
    /// Create a new tiled processor
    pub fn new(tile_size: usize, mode: ProcessingMode) -> Self {
        Self {
            tile_size: tile_size.max(1),
            mode,
        }
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }
}

impl Default for TiledProcessor {
    /// 256x256 tiles on the global pool
    fn default() -> Self {
        Self::new(256, ProcessingMode::Parallel)
    }
}

impl GridEvaluator for TiledProcessor {
    fn evaluate<T, F>(&self, rows: usize, cols: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize, usize) -> T + Sync + Send,
    {
        let tiles: Vec<Tile> = TileIterator::new(rows, cols, self.tile_size).collect();

        // Each tile is evaluated into its own row-major block
        let blocks: Vec<Vec<T>> = self.mode.par_map(0..tiles.len(), |i| {
            let tile = &tiles[i];
            let mut block = Vec::with_capacity(tile.len());
            for local_row in 0..tile.rows {
                for local_col in 0..tile.cols {
                    let (row, col) = tile.to_source_coords(local_row, local_col);
                    block.push(f(row, col));
                }
            }
            block
        });

        // Stitch blocks back together one tile row at a time
        let mut out = Vec::with_capacity(rows * cols);
        let mut pending = tiles.into_iter().zip(blocks).peekable();
        while let Some((first, block)) = pending.next() {
            let mut band = vec![(first, block.into_iter())];
            while let Some((tile, _)) = pending.peek() {
                if tile.row_offset != first.row_offset {
                    break;
                }
                if let Some((tile, block)) = pending.next() {
                    band.push((tile, block.into_iter()));
                }
            }

            for _ in 0..first.rows {
                for (tile, cells) in band.iter_mut() {
                    out.extend(cells.by_ref().take(tile.cols));
                }
            }
        }
        out
    }
}
